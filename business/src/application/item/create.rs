use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::item::errors::ItemError;
use crate::domain::item::lifecycle::{LifecycleObserver, LifecycleState};
use crate::domain::item::model::{Item, ItemFields};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::services::ImageStorageService;
use crate::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use crate::domain::item::validation::validate;
use crate::domain::logger::Logger;
use crate::domain::shared::paths::{CollectionPath, StoragePath};
use crate::domain::shared::value_objects::OwnerId;

use super::image_sync::ensure_durable_image;

pub struct CreateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub storage: Arc<dyn ImageStorageService>,
    pub lifecycle: Arc<dyn LifecycleObserver>,
    pub logger: Arc<dyn Logger>,
}

impl CreateItemUseCaseImpl {
    async fn persist(&self, owner: &OwnerId, fields: ItemFields) -> Result<Item, ItemError> {
        let fields = ensure_durable_image(
            self.storage.as_ref(),
            self.lifecycle.as_ref(),
            self.logger.as_ref(),
            fields,
        )
        .await?;

        let item = self
            .repository
            .create(&CollectionPath::products(owner), &fields)
            .await?;
        Ok(item)
    }
}

#[async_trait]
impl CreateItemUseCase for CreateItemUseCaseImpl {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError> {
        self.logger
            .info(&format!("Creating item for {}: {}", params.owner, params.draft.name));
        self.lifecycle.on_transition(LifecycleState::Validating);

        if params.owner.is_blank() {
            self.lifecycle.on_transition(LifecycleState::Failed);
            return Err(ItemError::MissingOwner);
        }

        let mut draft = params.draft;
        if let Some(image) = draft.image.as_mut()
            && image.path.as_str().trim().is_empty()
        {
            image.path = StoragePath::for_new_item(&params.owner, Utc::now().timestamp_millis());
        }

        let fields = match validate(&draft).into_result() {
            Ok(fields) => fields,
            Err(errors) => {
                self.lifecycle.on_transition(LifecycleState::Rejected);
                self.logger.warn(&format!(
                    "Item rejected, invalid fields: {}",
                    errors.field_names().join(", ")
                ));
                return Err(ItemError::Validation(errors));
            }
        };

        self.lifecycle.on_transition(LifecycleState::Persisting);
        match self.persist(&params.owner, fields).await {
            Ok(item) => {
                self.lifecycle.on_transition(LifecycleState::Committed);
                self.logger.info(&format!("Item created with id: {}", item.id));
                Ok(item)
            }
            Err(err) => {
                self.lifecycle.on_transition(LifecycleState::Failed);
                self.logger.error(&format!("Item creation failed: {err}"));
                Err(err)
            }
        }
    }
}
