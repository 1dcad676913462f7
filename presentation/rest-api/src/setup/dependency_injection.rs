use std::sync::Arc;

use logger::{TracingLifecycleObserver, TracingLogger};
use persistence::item::repository::ItemRepositoryPostgres;
use storage::client::FirebaseStorageClient;
use storage::image_storage::ImageStorageFirebase;

use business::application::item::create::CreateItemUseCaseImpl;
use business::application::item::delete::DeleteItemUseCaseImpl;
use business::application::item::get_all::GetAllItemsUseCaseImpl;
use business::application::item::get_by_id::GetItemByIdUseCaseImpl;
use business::application::item::update::UpdateItemUseCaseImpl;

use crate::config::storage_config::StorageConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub item_api: crate::api::item::routes::ItemApi,
    pub image_api: crate::api::image::routes::ImageApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, storage_config: StorageConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let lifecycle = Arc::new(TracingLifecycleObserver);
        let health_api = crate::api::health::routes::Api::new();
        let image_api = crate::api::image::routes::ImageApi::new();

        // Infrastructure adapters
        let item_repository = Arc::new(ItemRepositoryPostgres::new(pool));
        let storage_client = FirebaseStorageClient::new(storage_config.bucket)
            .with_base_url(storage_config.base_url)
            .with_token(storage_config.token);
        let image_storage = Arc::new(ImageStorageFirebase::new(storage_client));

        // Item use cases
        let create_use_case = Arc::new(CreateItemUseCaseImpl {
            repository: item_repository.clone(),
            storage: image_storage.clone(),
            lifecycle: lifecycle.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateItemUseCaseImpl {
            repository: item_repository.clone(),
            storage: image_storage,
            lifecycle,
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllItemsUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetItemByIdUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteItemUseCaseImpl {
            repository: item_repository,
            logger,
        });

        let item_api = crate::api::item::routes::ItemApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );

        Self {
            health_api,
            item_api,
            image_api,
        }
    }
}
