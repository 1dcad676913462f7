use async_trait::async_trait;

use crate::domain::errors::CollaboratorError;
use crate::domain::shared::paths::StoragePath;

use super::image::EncodedImage;

/// Service port for binary-object storage.
///
/// Stores the decoded payload at `path` and returns a durable URL for it.
#[async_trait]
pub trait ImageStorageService: Send + Sync {
    async fn upload_encoded(
        &self,
        path: &StoragePath,
        payload: &EncodedImage,
    ) -> Result<String, CollaboratorError>;

    /// Whether `url` is a download URL for an object held by this storage.
    fn is_stored_url(&self, url: &str) -> bool;
}
