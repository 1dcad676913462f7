use reqwest::Client;
use url::Url;

use business::domain::shared::paths::StoragePath;

pub const DEFAULT_BASE_URL: &str = "https://firebasestorage.googleapis.com";

/// Shared Firebase Storage HTTP client configuration.
pub struct FirebaseStorageClient {
    pub client: Client,
    pub bucket: String,
    pub base_url: String,
    pub token: Option<String>,
}

impl FirebaseStorageClient {
    pub fn new(bucket: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            bucket,
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Builds the authorization header value, if a token is configured.
    pub fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }

    fn objects_url(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(["v0", "b", self.bucket.as_str(), "o"]);
        Ok(url)
    }

    /// Whether `url` is a download URL under this bucket on the configured host.
    pub fn owns(&self, url: &str) -> bool {
        let (Ok(objects), Ok(candidate)) = (self.objects_url(), Url::parse(url)) else {
            return false;
        };
        candidate.origin() == objects.origin()
            && candidate
                .path()
                .starts_with(&format!("{}/", objects.path()))
    }

    /// Media upload endpoint for `path`.
    pub fn upload_url(&self, path: &StoragePath) -> Result<Url, url::ParseError> {
        let mut url = self.objects_url()?;
        url.query_pairs_mut()
            .append_pair("uploadType", "media")
            .append_pair("name", path.as_str());
        Ok(url)
    }

    /// Public download URL for an uploaded object; the whole path is a single
    /// encoded segment.
    pub fn download_url(&self, path: &StoragePath, token: &str) -> Result<Url, url::ParseError> {
        let mut url = self.objects_url()?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .push(path.as_str());
        url.query_pairs_mut()
            .append_pair("alt", "media")
            .append_pair("token", token);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> FirebaseStorageClient {
        FirebaseStorageClient::new("inventory.appspot.com".to_string())
    }

    #[test]
    fn should_build_upload_url() {
        let url = client()
            .upload_url(&StoragePath::from("uid-1/1700000000000".to_string()))
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://firebasestorage.googleapis.com/v0/b/inventory.appspot.com/o?uploadType=media&name=uid-1%2F1700000000000"
        );
    }

    #[test]
    fn should_encode_path_as_single_segment_in_download_url() {
        let url = client()
            .download_url(&StoragePath::from("uid-1/profile".to_string()), "abc-123")
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://firebasestorage.googleapis.com/v0/b/inventory.appspot.com/o/uid-1%2Fprofile?alt=media&token=abc-123"
        );
    }

    #[test]
    fn should_respect_custom_base_url() {
        let url = client()
            .with_base_url("http://localhost:9199/".to_string())
            .upload_url(&StoragePath::from("a/b".to_string()))
            .unwrap();

        assert!(url.as_str().starts_with("http://localhost:9199/v0/b/"));
    }

    #[test]
    fn should_own_only_download_urls_of_its_bucket() {
        let client = client();
        let stored = client
            .download_url(&StoragePath::from("uid-1/1".to_string()), "tok")
            .unwrap();

        assert!(client.owns(stored.as_str()));
        assert!(!client.owns("https://images.example.org/mug.png"));
        assert!(!client.owns(
            "https://firebasestorage.googleapis.com/v0/b/other-bucket/o/uid-1%2F1?alt=media"
        ));
        assert!(!client.owns(
            "https://firebasestorage.googleapis.com/v0/b/inventory.appspot.com/other"
        ));
        assert!(!client.owns("not a url"));
    }

    #[test]
    fn should_only_send_auth_header_with_token() {
        assert_eq!(client().auth_header(), None);
        assert_eq!(
            client().with_token(Some("t0k".to_string())).auth_header(),
            Some("Bearer t0k".to_string())
        );
    }
}
