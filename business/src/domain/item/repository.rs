use async_trait::async_trait;

use crate::domain::errors::CollaboratorError;
use crate::domain::shared::paths::{CollectionPath, DocumentPath};

use super::model::{Item, ItemChanges, ItemFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Name,
    Price,
    SoldUnits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Ordering requested from the persistence collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl OrderSpec {
    /// The dashboard lists the most recently created items first.
    pub fn newest_first() -> Self {
        Self {
            field: SortField::CreatedAt,
            direction: SortDirection::Descending,
        }
    }
}

/// Persistence collaborator owning item documents.
///
/// `create` assigns the item's id and creation time.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn fetch_collection(
        &self,
        path: &CollectionPath,
        order: &OrderSpec,
    ) -> Result<Vec<Item>, CollaboratorError>;
    async fn fetch_one(&self, path: &DocumentPath) -> Result<Option<Item>, CollaboratorError>;
    async fn create(&self, path: &CollectionPath, fields: &ItemFields) -> Result<Item, CollaboratorError>;
    async fn update(&self, path: &DocumentPath, changes: &ItemChanges) -> Result<(), CollaboratorError>;
    async fn delete(&self, path: &DocumentPath) -> Result<(), CollaboratorError>;
}
