//! Stateful entry point for an interactive dashboard shell. The HTTP API is
//! stateless and calls the use cases directly.

use std::sync::Arc;

use crate::domain::item::cache::{ItemCache, ItemSnapshot};
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use crate::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use crate::domain::item::use_cases::get_all::{GetAllItemsParams, GetAllItemsUseCase};
use crate::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use crate::domain::item::validation::ItemDraft;
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::shared::value_objects::{ItemId, OwnerId};

pub const CREATED_MESSAGE: &str = "Item created successfully";
pub const UPDATED_MESSAGE: &str = "Item updated successfully";
pub const DELETED_MESSAGE: &str = "Item deleted successfully";

/// Drives the dashboard: submits drafts, deletes items and keeps the cached
/// list in sync with the store. Every outcome is reported through the
/// notifier, once.
pub struct ItemLifecycleController {
    create: Arc<dyn CreateItemUseCase>,
    update: Arc<dyn UpdateItemUseCase>,
    delete: Arc<dyn DeleteItemUseCase>,
    get_all: Arc<dyn GetAllItemsUseCase>,
    notifier: Arc<dyn Notifier>,
    logger: Arc<dyn Logger>,
    cache: ItemCache,
}

impl ItemLifecycleController {
    pub fn new(
        create: Arc<dyn CreateItemUseCase>,
        update: Arc<dyn UpdateItemUseCase>,
        delete: Arc<dyn DeleteItemUseCase>,
        get_all: Arc<dyn GetAllItemsUseCase>,
        notifier: Arc<dyn Notifier>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            create,
            update,
            delete,
            get_all,
            notifier,
            logger,
            cache: ItemCache::new(),
        }
    }

    pub fn snapshot(&self) -> ItemSnapshot {
        self.cache.snapshot()
    }

    pub fn total_profit(&self) -> f64 {
        self.cache.snapshot().total_profit()
    }

    /// Reloads the owner's items, replacing the cached list on success.
    pub async fn refresh(&self, owner: &OwnerId) -> Result<ItemSnapshot, ItemError> {
        let items = self
            .get_all
            .execute(GetAllItemsParams {
                owner: owner.clone(),
            })
            .await?;
        Ok(self.cache.replace_all(items))
    }

    /// Creates a new item, or updates `item_to_update` when one is given.
    ///
    /// A successful write is followed by a refresh; a failing refresh is
    /// logged and does not undo the write.
    pub async fn submit(
        &self,
        owner: &OwnerId,
        draft: ItemDraft,
        item_to_update: Option<&Item>,
    ) -> Result<Item, ItemError> {
        let (result, message) = match item_to_update {
            Some(previous) => (
                self.update
                    .execute(UpdateItemParams {
                        owner: owner.clone(),
                        previous: previous.clone(),
                        draft,
                    })
                    .await,
                UPDATED_MESSAGE,
            ),
            None => (
                self.create
                    .execute(CreateItemParams {
                        owner: owner.clone(),
                        draft,
                    })
                    .await,
                CREATED_MESSAGE,
            ),
        };

        let item = match result {
            Ok(item) => item,
            Err(err) => {
                self.notifier.failure(&err.user_message());
                return Err(err);
            }
        };

        self.notifier.success(message);
        if let Err(err) = self.refresh(owner).await {
            self.logger
                .warn(&format!("Item {} saved but refresh failed: {err}", item.id));
        }
        Ok(item)
    }

    /// Deletes the item and drops it from the cached list without refetching.
    pub async fn delete(&self, owner: &OwnerId, id: &ItemId) -> Result<ItemSnapshot, ItemError> {
        let result = self
            .delete
            .execute(DeleteItemParams {
                owner: owner.clone(),
                id: id.clone(),
            })
            .await;

        match result {
            Ok(()) => {
                self.notifier.success(DELETED_MESSAGE);
                Ok(self.cache.remove_by_id(id))
            }
            Err(err) => {
                self.notifier.failure(&err.user_message());
                Err(err)
            }
        }
    }
}
