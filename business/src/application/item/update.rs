use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::lifecycle::{LifecycleObserver, LifecycleState};
use crate::domain::item::model::{Item, ItemChanges, ItemFields};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::services::ImageStorageService;
use crate::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use crate::domain::item::validation::validate;
use crate::domain::logger::Logger;
use crate::domain::shared::paths::DocumentPath;
use crate::domain::shared::value_objects::OwnerId;

use super::image_sync::ensure_durable_image;

pub struct UpdateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub storage: Arc<dyn ImageStorageService>,
    pub lifecycle: Arc<dyn LifecycleObserver>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateItemUseCaseImpl {
    async fn persist(
        &self,
        owner: &OwnerId,
        previous: &Item,
        fields: ItemFields,
    ) -> Result<Item, ItemError> {
        // Same URL means same asset: nothing to upload.
        let fields = if fields.image().url != previous.image.url {
            ensure_durable_image(
                self.storage.as_ref(),
                self.lifecycle.as_ref(),
                self.logger.as_ref(),
                fields,
            )
            .await?
        } else {
            fields
        };

        let changes = ItemChanges::between(previous, &fields);
        if changes.is_empty() {
            self.logger
                .debug(&format!("Item {} unchanged, skipping write", previous.id));
        } else {
            self.repository
                .update(&DocumentPath::product(owner, &previous.id), &changes)
                .await?;
        }

        Ok(changes.apply_to(previous))
    }
}

#[async_trait]
impl UpdateItemUseCase for UpdateItemUseCaseImpl {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError> {
        self.logger
            .info(&format!("Updating item: {}", params.previous.id));
        self.lifecycle.on_transition(LifecycleState::Validating);

        if params.owner.is_blank() {
            self.lifecycle.on_transition(LifecycleState::Failed);
            return Err(ItemError::MissingOwner);
        }

        let previous = params.previous;
        let mut draft = params.draft;
        if let Some(image) = draft.image.as_mut()
            && image.path != previous.image.path
        {
            if !image.path.as_str().is_empty() {
                self.logger.warn(&format!(
                    "Ignoring image path change on item {}, keeping {}",
                    previous.id, previous.image.path
                ));
            }
            image.path = previous.image.path.clone();
        }

        let fields = match validate(&draft).into_result() {
            Ok(fields) => fields,
            Err(errors) => {
                self.lifecycle.on_transition(LifecycleState::Rejected);
                self.logger.warn(&format!(
                    "Update of item {} rejected, invalid fields: {}",
                    previous.id,
                    errors.field_names().join(", ")
                ));
                return Err(ItemError::Validation(errors));
            }
        };

        self.lifecycle.on_transition(LifecycleState::Persisting);
        match self.persist(&params.owner, &previous, fields).await {
            Ok(item) => {
                self.lifecycle.on_transition(LifecycleState::Committed);
                self.logger.info(&format!("Item updated: {}", item.id));
                Ok(item)
            }
            Err(err) => {
                self.lifecycle.on_transition(LifecycleState::Failed);
                self.logger
                    .error(&format!("Update of item {} failed: {err}", previous.id));
                Err(err)
            }
        }
    }
}
