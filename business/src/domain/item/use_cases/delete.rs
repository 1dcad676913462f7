use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::shared::value_objects::{ItemId, OwnerId};

pub struct DeleteItemParams {
    pub owner: OwnerId,
    pub id: ItemId,
}

#[async_trait]
pub trait DeleteItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError>;
}
