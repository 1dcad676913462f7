use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::item::errors::ItemError;
use business::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::get_all::{GetAllItemsParams, GetAllItemsUseCase};
use business::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use business::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use business::domain::shared::value_objects::{ItemId, OwnerId};

use crate::api::error::{ErrorResponse, IntoErrorResponse, ValidationErrorResponse};
use crate::api::item::dto::{ItemListResponse, ItemRequest, ItemResponse};
use crate::api::item::error_mapper::validation_error_response;
use crate::api::tags::ApiTags;

pub struct ItemApi {
    create_use_case: Arc<dyn CreateItemUseCase>,
    get_all_use_case: Arc<dyn GetAllItemsUseCase>,
    get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
    update_use_case: Arc<dyn UpdateItemUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
}

impl ItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateItemUseCase>,
        get_all_use_case: Arc<dyn GetAllItemsUseCase>,
        get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
        update_use_case: Arc<dyn UpdateItemUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Item catalog API
///
/// Every route is scoped to the owner named in the path.
#[OpenApi]
impl ItemApi {
    /// List items
    ///
    /// Returns the owner's items, newest first, with per-item and total profit.
    #[oai(path = "/users/:uid/products", method = "get", tag = "ApiTags::Items")]
    async fn get_all_items(&self, uid: Path<String>) -> GetAllItemsResponse {
        let params = GetAllItemsParams {
            owner: OwnerId::new(uid.0),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(items) => GetAllItemsResponse::Ok(Json(items.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetAllItemsResponse::BadRequest(json),
                    502 => GetAllItemsResponse::BadGateway(json),
                    _ => GetAllItemsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get an item by ID
    #[oai(path = "/users/:uid/products/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item_by_id(&self, uid: Path<String>, id: Path<String>) -> GetItemByIdResponse {
        let params = GetItemByIdParams {
            owner: OwnerId::new(uid.0),
            id: ItemId::new(id.0),
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(item) => GetItemByIdResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetItemByIdResponse::BadRequest(json),
                    404 => GetItemByIdResponse::NotFound(json),
                    502 => GetItemByIdResponse::BadGateway(json),
                    _ => GetItemByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create an item
    ///
    /// A `data:` image URL is uploaded to storage before the item is saved.
    #[oai(path = "/users/:uid/products", method = "post", tag = "ApiTags::Items")]
    async fn create_item(&self, uid: Path<String>, body: Json<ItemRequest>) -> CreateItemResponse {
        let params = CreateItemParams {
            owner: OwnerId::new(uid.0),
            draft: body.0.into(),
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => CreateItemResponse::Created(Json(item.into())),
            Err(ItemError::Validation(errors)) => {
                CreateItemResponse::BadRequest(validation_error_response(&errors))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateItemResponse::BadRequest(Json(json.0.into())),
                    422 => CreateItemResponse::UnprocessableEntity(json),
                    502 => CreateItemResponse::BadGateway(json),
                    _ => CreateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an item
    ///
    /// The stored record is loaded first; its image path is kept and the
    /// image is uploaded again only if its URL changed.
    #[oai(path = "/users/:uid/products/:id", method = "put", tag = "ApiTags::Items")]
    async fn update_item(
        &self,
        uid: Path<String>,
        id: Path<String>,
        body: Json<ItemRequest>,
    ) -> UpdateItemResponse {
        let owner = OwnerId::new(uid.0);
        let previous = match self
            .get_by_id_use_case
            .execute(GetItemByIdParams {
                owner: owner.clone(),
                id: ItemId::new(id.0),
            })
            .await
        {
            Ok(item) => item,
            Err(err) => return UpdateItemResponse::from_error(err),
        };

        let params = UpdateItemParams {
            owner,
            previous,
            draft: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(item) => UpdateItemResponse::Ok(Json(item.into())),
            Err(err) => UpdateItemResponse::from_error(err),
        }
    }

    /// Delete an item
    #[oai(path = "/users/:uid/products/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, uid: Path<String>, id: Path<String>) -> DeleteItemResponse {
        let params = DeleteItemParams {
            owner: OwnerId::new(uid.0),
            id: ItemId::new(id.0),
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeleteItemResponse::BadRequest(json),
                    502 => DeleteItemResponse::BadGateway(json),
                    _ => DeleteItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllItemsResponse {
    #[oai(status = 200)]
    Ok(Json<ItemListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetItemByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateItemResponse {
    #[oai(status = 201)]
    Created(Json<ItemResponse>),
    /// Per-field validation messages
    #[oai(status = 400)]
    BadRequest(Json<ValidationErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ValidationErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl UpdateItemResponse {
    fn from_error(err: ItemError) -> Self {
        if let ItemError::Validation(errors) = &err {
            return UpdateItemResponse::BadRequest(validation_error_response(errors));
        }
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => UpdateItemResponse::BadRequest(Json(json.0.into())),
            404 => UpdateItemResponse::NotFound(json),
            422 => UpdateItemResponse::UnprocessableEntity(json),
            502 => UpdateItemResponse::BadGateway(json),
            _ => UpdateItemResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
