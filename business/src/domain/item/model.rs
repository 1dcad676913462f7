use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shared::paths::StoragePath;
use crate::domain::shared::value_objects::ItemId;

/// Image attached to an item.
///
/// `path` is the storage key and never changes once set. `url` is either a
/// transient `data:` URL (fresh upload) or a durable storage URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemImage {
    pub path: StoragePath,
    pub url: String,
}

impl ItemImage {
    pub fn new(path: StoragePath, url: impl Into<String>) -> Self {
        Self {
            path,
            url: url.into(),
        }
    }
}

/// A persisted catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub image: ItemImage,
    pub name: String,
    pub price: f64,
    pub sold_units: u32,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: ItemId, fields: ItemFields, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            image: fields.image,
            name: fields.name,
            price: fields.price,
            sold_units: fields.sold_units,
            created_at,
        }
    }
}

/// Normalized record produced by the validator, ready to be persisted.
///
/// Only `validation::validate` and persistence adapters rebuilding stored
/// rows construct it, so a value of this type always satisfies the record
/// constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    image: ItemImage,
    name: String,
    price: f64,
    sold_units: u32,
}

impl ItemFields {
    pub(crate) fn new(image: ItemImage, name: String, price: f64, sold_units: u32) -> Self {
        Self {
            image,
            name,
            price,
            sold_units,
        }
    }

    /// Rebuilds fields from a stored row, trusting the store's constraints.
    pub fn from_repository(image: ItemImage, name: String, price: f64, sold_units: u32) -> Self {
        Self::new(image, name, price, sold_units)
    }

    pub fn image(&self) -> &ItemImage {
        &self.image
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn sold_units(&self) -> u32 {
        self.sold_units
    }

    pub(crate) fn with_image_url(mut self, url: String) -> Self {
        self.image.url = url;
        self
    }
}

/// Fields that differ between a stored item and its edited version.
///
/// `image.path` is immutable, so only the image URL can be part of a change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub sold_units: Option<u32>,
    pub image_url: Option<String>,
}

impl ItemChanges {
    pub fn between(previous: &Item, next: &ItemFields) -> Self {
        Self {
            name: (previous.name != next.name).then(|| next.name.clone()),
            price: (previous.price != next.price).then_some(next.price),
            sold_units: (previous.sold_units != next.sold_units).then_some(next.sold_units),
            image_url: (previous.image.url != next.image.url).then(|| next.image.url.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.sold_units.is_none()
            && self.image_url.is_none()
    }

    /// Returns `item` with these changes applied; identity, creation time and
    /// image path are carried over untouched.
    pub fn apply_to(&self, item: &Item) -> Item {
        let mut updated = item.clone();
        if let Some(name) = &self.name {
            updated.name = name.clone();
        }
        if let Some(price) = self.price {
            updated.price = price;
        }
        if let Some(sold_units) = self.sold_units {
            updated.sold_units = sold_units;
        }
        if let Some(url) = &self.image_url {
            updated.image.url = url.clone();
        }
        updated
    }
}
