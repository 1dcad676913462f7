use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::CollaboratorError;
use business::domain::item::model::{Item, ItemFields, ItemImage};
use business::domain::shared::paths::StoragePath;
use business::domain::shared::value_objects::ItemId;

#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub id: Uuid,
    pub owner_id: String,
    pub name: String,
    pub price: BigDecimal,
    pub sold_units: i64,
    pub image_path: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl ItemEntity {
    pub fn into_domain(self) -> Result<Item, CollaboratorError> {
        let price = self.price.to_f64().ok_or_else(|| {
            CollaboratorError::invalid_data(format!("price of item {} is not representable", self.id))
        })?;
        let sold_units = u32::try_from(self.sold_units).map_err(|_| {
            CollaboratorError::invalid_data(format!(
                "sold units of item {} out of range: {}",
                self.id, self.sold_units
            ))
        })?;

        Ok(Item::from_repository(
            ItemId::new(self.id.to_string()),
            ItemFields::from_repository(
                ItemImage::new(StoragePath::from(self.image_path), self.image_url),
                self.name,
                price,
                sold_units,
            ),
            self.created_at,
        ))
    }
}

/// Stores the shortest decimal that reads back as the same `f64`.
pub fn price_to_decimal(price: f64) -> Result<BigDecimal, CollaboratorError> {
    BigDecimal::from_str(&price.to_string())
        .map_err(|_| CollaboratorError::invalid_data(format!("price {price} cannot be stored")))
}
