use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use tokio::io::{AsyncRead, AsyncReadExt};
use url::Url;

use super::errors::EncodingError;

const DATA_URL_PATTERN: &str = r"^data:([A-Za-z0-9.+-]+/[A-Za-z0-9.+-]+);base64,([A-Za-z0-9+/]*={0,2})$";

/// Image formats accepted by the item form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
}

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Webp => "image/webp",
        }
    }

    pub fn from_extension(extension: &str) -> Result<Self, EncodingError> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "webp" => Ok(ImageFormat::Webp),
            other => Err(EncodingError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl std::str::FromStr for ImageFormat {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s)
    }
}

/// A `data:<mime>;base64,<payload>` URL holding a whole image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    data_url: String,
    mime_type: String,
}

impl EncodedImage {
    pub fn from_bytes(bytes: &[u8], format: ImageFormat) -> Self {
        let mime_type = format.mime_type().to_string();
        Self {
            data_url: format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)),
            mime_type,
        }
    }

    /// Validates a data URL received from a client.
    pub fn parse(data_url: &str) -> Result<Self, EncodingError> {
        let pattern = regex::Regex::new(DATA_URL_PATTERN).map_err(|_| EncodingError::Malformed)?;
        let captures = pattern.captures(data_url).ok_or(EncodingError::Malformed)?;
        let mime_type = captures
            .get(1)
            .map(|m| m.as_str().to_ascii_lowercase())
            .ok_or(EncodingError::Malformed)?;
        let payload = captures.get(2).map(|m| m.as_str()).unwrap_or_default();

        if payload.is_empty() {
            return Err(EncodingError::Empty);
        }
        STANDARD
            .decode(payload)
            .map_err(|_| EncodingError::Malformed)?;

        Ok(Self {
            data_url: data_url.to_string(),
            mime_type,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.data_url
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Decoded image bytes.
    pub fn decode(&self) -> Result<Vec<u8>, EncodingError> {
        let (_, payload) = self
            .data_url
            .split_once(";base64,")
            .ok_or(EncodingError::Malformed)?;
        STANDARD.decode(payload).map_err(|_| EncodingError::Malformed)
    }
}

impl std::fmt::Display for EncodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.data_url)
    }
}

/// Whether `url` still carries an inline payload rather than a stored asset.
pub fn is_encoded(url: &str) -> bool {
    url.starts_with("data:")
}

/// Whether `url` points at an asset served over HTTP(S).
pub fn is_durable(url: &str) -> bool {
    Url::parse(url)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Reads the whole source and wraps it into a data URL.
///
/// Resolves once, with either the encoded image or the read failure.
pub async fn encode_image<R>(mut source: R, format: ImageFormat) -> Result<EncodedImage, EncodingError>
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    source
        .read_to_end(&mut bytes)
        .await
        .map_err(EncodingError::Unreadable)?;

    if bytes.is_empty() {
        return Err(EncodingError::Empty);
    }

    Ok(EncodedImage::from_bytes(&bytes, format))
}

/// Encodes an image file, picking the MIME type from its extension.
pub async fn encode_file(path: impl AsRef<Path>) -> Result<EncodedImage, EncodingError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or_default();
    let format = ImageFormat::from_extension(extension)?;

    let file = tokio::fs::File::open(path)
        .await
        .map_err(EncodingError::Unreadable)?;

    encode_image(file, format).await
}
