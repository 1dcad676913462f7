use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::{ItemRepository, OrderSpec};
use crate::domain::item::use_cases::get_all::{GetAllItemsParams, GetAllItemsUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::paths::CollectionPath;

pub struct GetAllItemsUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllItemsUseCase for GetAllItemsUseCaseImpl {
    async fn execute(&self, params: GetAllItemsParams) -> Result<Vec<Item>, ItemError> {
        if params.owner.is_blank() {
            return Err(ItemError::MissingOwner);
        }

        let items = self
            .repository
            .fetch_collection(
                &CollectionPath::products(&params.owner),
                &OrderSpec::newest_first(),
            )
            .await
            .map_err(|err| {
                self.logger
                    .error(&format!("Failed to fetch items for {}: {err}", params.owner));
                ItemError::from(err)
            })?;

        self.logger.debug(&format!(
            "Fetched {} items for {}",
            items.len(),
            params.owner
        ));
        Ok(items)
    }
}
