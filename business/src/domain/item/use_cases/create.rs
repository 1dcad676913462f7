use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::validation::ItemDraft;
use crate::domain::shared::value_objects::OwnerId;

pub struct CreateItemParams {
    pub owner: OwnerId,
    pub draft: ItemDraft,
}

#[async_trait]
pub trait CreateItemUseCase: Send + Sync {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError>;
}
