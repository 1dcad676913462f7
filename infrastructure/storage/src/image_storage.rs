use async_trait::async_trait;
use serde::Deserialize;

use business::domain::errors::CollaboratorError;
use business::domain::item::image::EncodedImage;
use business::domain::item::services::ImageStorageService;
use business::domain::shared::paths::StoragePath;

use crate::client::FirebaseStorageClient;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    download_tokens: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

pub struct ImageStorageFirebase {
    client: FirebaseStorageClient,
}

impl ImageStorageFirebase {
    pub fn new(client: FirebaseStorageClient) -> Self {
        Self { client }
    }

    fn rejection_reason(status: reqwest::StatusCode, body: &str) -> String {
        serde_json::from_str::<ErrorResponse>(body)
            .map(|parsed| parsed.error.message)
            .unwrap_or_else(|_| format!("Image upload refused ({status})"))
    }
}

#[async_trait]
impl ImageStorageService for ImageStorageFirebase {
    async fn upload_encoded(
        &self,
        path: &StoragePath,
        payload: &EncodedImage,
    ) -> Result<String, CollaboratorError> {
        let bytes = payload
            .decode()
            .map_err(|_| CollaboratorError::invalid_data("The image data is corrupted"))?;
        let upload_url = self
            .client
            .upload_url(path)
            .map_err(|e| CollaboratorError::invalid_data(format!("Invalid storage URL: {e}")))?;

        let mut request = self
            .client
            .client
            .post(upload_url)
            .header("Content-Type", payload.mime_type())
            .body(bytes);
        if let Some(auth) = self.client.auth_header() {
            request = request.header("Authorization", auth);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Image upload to {path} failed: {e}");
            CollaboratorError::unavailable("The image storage is unreachable")
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Image upload to {path} refused with {status}");
            return Err(CollaboratorError::rejected(Self::rejection_reason(
                status, &body,
            )));
        }

        let uploaded: UploadResponse = response.json().await.map_err(|e| {
            CollaboratorError::invalid_data(format!("Unexpected storage response: {e}"))
        })?;
        let token = uploaded
            .download_tokens
            .as_deref()
            .and_then(|tokens| tokens.split(',').next())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| CollaboratorError::invalid_data("Storage returned no download token"))?;

        let url = self
            .client
            .download_url(path, token)
            .map_err(|e| CollaboratorError::invalid_data(format!("Invalid storage URL: {e}")))?;
        Ok(url.to_string())
    }

    fn is_stored_url(&self, url: &str) -> bool {
        self.client.owns(url)
    }
}
