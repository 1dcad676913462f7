use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::CollaboratorError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::paths::DocumentPath;

pub struct GetItemByIdUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetItemByIdUseCase for GetItemByIdUseCaseImpl {
    async fn execute(&self, params: GetItemByIdParams) -> Result<Item, ItemError> {
        if params.owner.is_blank() {
            return Err(ItemError::MissingOwner);
        }

        let path = DocumentPath::product(&params.owner, &params.id);
        match self.repository.fetch_one(&path).await {
            Ok(Some(item)) => Ok(item),
            Ok(None) | Err(CollaboratorError::NotFound) => {
                self.logger.warn(&format!("Item not found: {path}"));
                Err(ItemError::NotFound)
            }
            Err(err) => {
                self.logger
                    .error(&format!("Failed to fetch item {path}: {err}"));
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::model::{ItemChanges, ItemFields, ItemImage};
    use crate::domain::item::repository::OrderSpec;
    use crate::domain::shared::paths::{CollectionPath, StoragePath};
    use crate::domain::shared::value_objects::{ItemId, OwnerId};
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub ItemRepo {}

        #[async_trait]
        impl ItemRepository for ItemRepo {
            async fn fetch_collection(&self, path: &CollectionPath, order: &OrderSpec) -> Result<Vec<Item>, CollaboratorError>;
            async fn fetch_one(&self, path: &DocumentPath) -> Result<Option<Item>, CollaboratorError>;
            async fn create(&self, path: &CollectionPath, fields: &ItemFields) -> Result<Item, CollaboratorError>;
            async fn update(&self, path: &DocumentPath, changes: &ItemChanges) -> Result<(), CollaboratorError>;
            async fn delete(&self, path: &DocumentPath) -> Result<(), CollaboratorError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params() -> GetItemByIdParams {
        GetItemByIdParams {
            owner: OwnerId::new("uid-1"),
            id: ItemId::from("abc"),
        }
    }

    #[tokio::test]
    async fn should_return_item_when_found() {
        let mut repo = MockItemRepo::new();
        repo.expect_fetch_one()
            .withf(|path| path.as_str() == "users/uid-1/products/abc")
            .returning(|_| {
                Ok(Some(Item {
                    id: ItemId::from("abc"),
                    image: ItemImage::new(
                        StoragePath::from("uid-1/1".to_string()),
                        "https://cdn.example.com/1.png",
                    ),
                    name: "Coffee Mug".to_string(),
                    price: 9.5,
                    sold_units: 2,
                    created_at: Utc::now(),
                }))
            });

        let use_case = GetItemByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let item = use_case.execute(params()).await.unwrap();

        assert_eq!(item.name, "Coffee Mug");
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let mut repo = MockItemRepo::new();
        repo.expect_fetch_one().returning(|_| Ok(None));

        let use_case = GetItemByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result, Err(ItemError::NotFound)));
    }

    #[tokio::test]
    async fn should_map_collaborator_not_found() {
        let mut repo = MockItemRepo::new();
        repo.expect_fetch_one()
            .returning(|_| Err(CollaboratorError::NotFound));

        let use_case = GetItemByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result, Err(ItemError::NotFound)));
    }
}
