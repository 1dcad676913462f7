use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::validation::ItemDraft;
use crate::domain::shared::value_objects::OwnerId;

pub struct UpdateItemParams {
    pub owner: OwnerId,
    /// The stored record being edited; its id, creation time and image path are kept.
    pub previous: Item,
    pub draft: ItemDraft,
}

#[async_trait]
pub trait UpdateItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError>;
}
