use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::OwnerId;

pub struct GetAllItemsParams {
    pub owner: OwnerId,
}

#[async_trait]
pub trait GetAllItemsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllItemsParams) -> Result<Vec<Item>, ItemError>;
}
