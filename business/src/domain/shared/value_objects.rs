use serde::{Deserialize, Serialize};

/// Identifier of the user owning a catalog (the auth provider's UID).
/// Namespaces item collections and image storage paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A blank owner would produce paths such as `users//products`.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OwnerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Opaque item identifier assigned by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_owner_id_verbatim() {
        let owner = OwnerId::new("firebase-uid-123");
        assert_eq!(owner.to_string(), "firebase-uid-123");
        assert_eq!(owner.as_str(), "firebase-uid-123");
    }

    #[test]
    fn should_detect_blank_owner() {
        assert!(OwnerId::new("   ").is_blank());
        assert!(!OwnerId::from("uid").is_blank());
    }

    #[test]
    fn should_compare_item_ids_by_value() {
        assert_eq!(ItemId::from("abc"), ItemId::new("abc".to_string()));
        assert_ne!(ItemId::from("abc"), ItemId::from("abd"));
    }
}
