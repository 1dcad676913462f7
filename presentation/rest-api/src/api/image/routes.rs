use poem_openapi::{
    Object, OpenApi,
    param::Query,
    payload::{Binary, Json},
};

use business::domain::item::errors::ItemError;
use business::domain::item::image::{EncodedImage, ImageFormat, encode_image};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct EncodedImageResponse {
    /// `data:<mime>;base64,<payload>`
    pub data_url: String,
    pub mime_type: String,
}

impl From<EncodedImage> for EncodedImageResponse {
    fn from(image: EncodedImage) -> Self {
        Self {
            mime_type: image.mime_type().to_string(),
            data_url: image.to_string(),
        }
    }
}

pub struct ImageApi;

impl ImageApi {
    pub fn new() -> Self {
        Self
    }
}

/// Image helpers for the item form
#[OpenApi]
impl ImageApi {
    /// Encode an image
    ///
    /// Turns a raw .png, .jpg/.jpeg or .webp upload into a data URL suitable
    /// for the `image.url` field of an item submission.
    #[oai(path = "/images/encode", method = "post", tag = "ApiTags::Images")]
    async fn encode(&self, format: Query<String>, body: Binary<Vec<u8>>) -> EncodeImageResponse {
        let result = match format.0.parse::<ImageFormat>() {
            Ok(format) => encode_image(body.0.as_slice(), format).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(image) => EncodeImageResponse::Ok(Json(image.into())),
            Err(err) => {
                let (_, json) = ItemError::from(err).into_error_response();
                EncodeImageResponse::UnprocessableEntity(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum EncodeImageResponse {
    #[oai(status = 200)]
    Ok(Json<EncodedImageResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
}
