use crate::domain::item::errors::{EncodingError, ItemError};
use crate::domain::item::image::{EncodedImage, is_durable, is_encoded};
use crate::domain::item::lifecycle::{LifecycleObserver, LifecycleState};
use crate::domain::item::model::ItemFields;
use crate::domain::item::services::ImageStorageService;
use crate::domain::logger::Logger;

/// Makes sure the image URL about to be persisted is durable.
///
/// An encoded payload is uploaded at the image's storage path and replaced
/// by the returned URL. An HTTP(S) URL is kept only when the storage itself
/// serves it; any other URL is refused before any network call.
pub(crate) async fn ensure_durable_image(
    storage: &dyn ImageStorageService,
    lifecycle: &dyn LifecycleObserver,
    logger: &dyn Logger,
    fields: ItemFields,
) -> Result<ItemFields, ItemError> {
    let url = fields.image().url.as_str();
    if !is_encoded(url) {
        if !is_durable(url) {
            return Err(EncodingError::Malformed.into());
        }
        if !storage.is_stored_url(url) {
            logger.warn(&format!("Refusing image hosted outside storage: {url}"));
            return Err(EncodingError::ForeignUrl.into());
        }
        return Ok(fields);
    }

    let payload = EncodedImage::parse(url)?;
    lifecycle.on_transition(LifecycleState::ImageSyncing);
    logger.debug(&format!(
        "Uploading {} image to {}",
        payload.mime_type(),
        fields.image().path
    ));

    let durable_url = storage
        .upload_encoded(&fields.image().path, &payload)
        .await?;

    lifecycle.on_transition(LifecycleState::Persisting);
    Ok(fields.with_image_url(durable_url))
}
