use serde::{Deserialize, Serialize};

use super::value_objects::{ItemId, OwnerId};

/// Kind of resource addressed under an owner's namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind<'a> {
    /// The product collection, or one product document when an id is given.
    Products(Option<&'a ItemId>),
    /// Image asset of a product created at the given millisecond timestamp.
    ProductImage(i64),
    /// The owner's avatar.
    Avatar,
}

/// Builds every collection, document and storage path used by the dashboard.
///
/// - `users/{uid}/products`
/// - `users/{uid}/products/{id}`
/// - `{uid}/{timestamp}`
/// - `{uid}/profile`
pub fn resource_path(owner: &OwnerId, kind: ResourceKind<'_>) -> String {
    match kind {
        ResourceKind::Products(None) => format!("users/{owner}/products"),
        ResourceKind::Products(Some(id)) => format!("users/{owner}/products/{id}"),
        ResourceKind::ProductImage(timestamp) => format!("{owner}/{timestamp}"),
        ResourceKind::Avatar => format!("{owner}/profile"),
    }
}

/// Path of an owner's product collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionPath {
    owner: OwnerId,
    rendered: String,
}

impl CollectionPath {
    pub fn products(owner: &OwnerId) -> Self {
        Self {
            owner: owner.clone(),
            rendered: resource_path(owner, ResourceKind::Products(None)),
        }
    }

    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl std::fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// Path of a single product document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPath {
    owner: OwnerId,
    id: ItemId,
    rendered: String,
}

impl DocumentPath {
    pub fn product(owner: &OwnerId, id: &ItemId) -> Self {
        Self {
            owner: owner.clone(),
            id: id.clone(),
            rendered: resource_path(owner, ResourceKind::Products(Some(id))),
        }
    }

    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl std::fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// Key of an asset in binary-object storage.
///
/// Stored verbatim on the item record as `image.path`, so it round-trips
/// through the persistence collaborator as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn for_new_item(owner: &OwnerId, timestamp_millis: i64) -> Self {
        Self(resource_path(owner, ResourceKind::ProductImage(timestamp_millis)))
    }

    pub fn avatar(owner: &OwnerId) -> Self {
        Self(resource_path(owner, ResourceKind::Avatar))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for StoragePath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl std::fmt::Display for StoragePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> OwnerId {
        OwnerId::new("uid-42")
    }

    #[test]
    fn should_build_collection_path() {
        assert_eq!(
            resource_path(&owner(), ResourceKind::Products(None)),
            "users/uid-42/products"
        );
        assert_eq!(CollectionPath::products(&owner()).as_str(), "users/uid-42/products");
    }

    #[test]
    fn should_build_document_path() {
        let id = ItemId::from("abc");
        let path = DocumentPath::product(&owner(), &id);

        assert_eq!(path.as_str(), "users/uid-42/products/abc");
        assert_eq!(path.id(), &id);
        assert_eq!(path.owner(), &owner());
    }

    #[test]
    fn should_build_image_and_avatar_storage_paths() {
        assert_eq!(
            StoragePath::for_new_item(&owner(), 1_700_000_000_000).as_str(),
            "uid-42/1700000000000"
        );
        assert_eq!(StoragePath::avatar(&owner()).as_str(), "uid-42/profile");
    }
}
