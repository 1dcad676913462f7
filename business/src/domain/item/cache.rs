use std::sync::{Arc, PoisonError, RwLock};

use super::model::Item;
use super::profit::{ProfitReport, total_profit};
use crate::domain::shared::value_objects::ItemId;

/// Immutable view of the item list as last fetched.
#[derive(Debug, Clone, Default)]
pub struct ItemSnapshot {
    items: Arc<[Item]>,
}

impl ItemSnapshot {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// A new snapshot without the item whose id matches.
    pub fn without(&self, id: &ItemId) -> Self {
        Self::new(
            self.items
                .iter()
                .filter(|item| &item.id != id)
                .cloned()
                .collect(),
        )
    }

    pub fn total_profit(&self) -> f64 {
        total_profit(self.items.iter())
    }

    pub fn profit_report(&self) -> ProfitReport {
        ProfitReport::from_items(self.items.iter())
    }
}

/// Holds the current snapshot; every mutation publishes a new one.
#[derive(Debug, Default)]
pub struct ItemCache {
    current: RwLock<ItemSnapshot>,
}

impl ItemCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ItemSnapshot {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the whole list, keeping the collaborator's ordering.
    pub fn replace_all(&self, items: Vec<Item>) -> ItemSnapshot {
        self.publish(ItemSnapshot::new(items))
    }

    pub fn remove_by_id(&self, id: &ItemId) -> ItemSnapshot {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = current.without(id);
        *current = next.clone();
        next
    }

    fn publish(&self, snapshot: ItemSnapshot) -> ItemSnapshot {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = snapshot.clone();
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::model::{ItemFields, ItemImage};
    use crate::domain::shared::paths::StoragePath;
    use chrono::Utc;

    fn item(id: &str, price: f64, sold_units: u32) -> Item {
        Item::from_repository(
            ItemId::from(id),
            ItemFields::from_repository(
                ItemImage::new(StoragePath::from(format!("uid/{id}")), "https://cdn/img"),
                format!("Product {id}"),
                price,
                sold_units,
            ),
            Utc::now(),
        )
    }

    #[test]
    fn should_start_empty() {
        let cache = ItemCache::new();

        assert!(cache.snapshot().is_empty());
        assert_eq!(cache.snapshot().total_profit(), 0.0);
    }

    #[test]
    fn should_keep_fetched_order_on_replace_all() {
        let cache = ItemCache::new();

        let snapshot = cache.replace_all(vec![item("c", 1.0, 1), item("a", 1.0, 1), item("b", 1.0, 1)]);

        let ids: Vec<&str> = snapshot.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn should_remove_only_matching_item() {
        let cache = ItemCache::new();
        cache.replace_all(vec![item("xyz", 1.0, 1), item("abc", 2.0, 2), item("def", 3.0, 3)]);

        let snapshot = cache.remove_by_id(&ItemId::from("abc"));

        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.get(&ItemId::from("abc")).is_none());
        assert!(snapshot.get(&ItemId::from("xyz")).is_some());
        assert!(snapshot.get(&ItemId::from("def")).is_some());
    }

    #[test]
    fn should_leave_cache_unchanged_when_id_is_unknown() {
        let cache = ItemCache::new();
        cache.replace_all(vec![item("a", 1.0, 1), item("b", 1.0, 1)]);

        let snapshot = cache.remove_by_id(&ItemId::from("zzz"));

        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn should_not_alter_snapshots_already_handed_out() {
        let cache = ItemCache::new();
        cache.replace_all(vec![item("a", 1.0, 1), item("b", 1.0, 1)]);
        let before = cache.snapshot();

        cache.remove_by_id(&ItemId::from("a"));

        assert_eq!(before.len(), 2);
        assert_eq!(cache.snapshot().len(), 1);
    }

    #[test]
    fn should_aggregate_profit_of_current_snapshot() {
        let cache = ItemCache::new();
        cache.replace_all(vec![item("a", 10.0, 2), item("b", 2.5, 4)]);

        let snapshot = cache.snapshot();

        assert_eq!(snapshot.total_profit(), 30.0);
        assert_eq!(snapshot.profit_report().formatted_total, "$30.00USD");
    }
}
