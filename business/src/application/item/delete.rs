use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::paths::DocumentPath;

pub struct DeleteItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError> {
        self.logger.info(&format!("Deleting item: {}", params.id));

        if params.owner.is_blank() {
            return Err(ItemError::MissingOwner);
        }

        self.repository
            .delete(&DocumentPath::product(&params.owner, &params.id))
            .await
            .map_err(|err| {
                self.logger
                    .error(&format!("Failed to delete item {}: {err}", params.id));
                ItemError::from(err)
            })?;

        self.logger.info(&format!("Item deleted: {}", params.id));
        Ok(())
    }
}
