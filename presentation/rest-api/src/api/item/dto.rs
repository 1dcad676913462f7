use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde_json::Value;

use business::domain::item::model::{Item, ItemImage};
use business::domain::item::money::format_money;
use business::domain::item::profit::{ProfitReport, profit};
use business::domain::item::validation::{ItemDraft, RawNumber};
use business::domain::shared::paths::StoragePath;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ItemImageDto {
    /// Storage key; leave empty on create to have one assigned
    #[oai(default)]
    pub path: String,
    /// `data:` URL for a new image, or the stored image URL
    pub url: String,
}

impl From<ItemImage> for ItemImageDto {
    fn from(image: ItemImage) -> Self {
        Self {
            path: image.path.as_str().to_string(),
            url: image.url,
        }
    }
}

impl From<ItemImageDto> for ItemImage {
    fn from(dto: ItemImageDto) -> Self {
        ItemImage::new(StoragePath::from(dto.path), dto.url)
    }
}

/// Item form submission. Numbers may be sent as JSON numbers or as text.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ItemRequest {
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<ItemImageDto>,
    #[oai(default)]
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<Value>,
    #[oai(skip_serializing_if_is_none)]
    pub sold_units: Option<Value>,
}

fn raw_number(value: Value) -> Option<RawNumber> {
    match value {
        Value::Null => None,
        Value::Number(number) => Some(
            number
                .as_f64()
                .map(RawNumber::Number)
                .unwrap_or_else(|| RawNumber::Text(number.to_string())),
        ),
        Value::String(text) => Some(RawNumber::Text(text)),
        other => Some(RawNumber::Text(other.to_string())),
    }
}

impl From<ItemRequest> for ItemDraft {
    fn from(request: ItemRequest) -> Self {
        ItemDraft {
            image: request.image.map(ItemImage::from),
            name: request.name,
            price: request.price.and_then(raw_number),
            sold_units: request.sold_units.and_then(raw_number),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: String,
    pub image: ItemImageDto,
    pub name: String,
    pub price: f64,
    /// Price rendered as `$1,234.50USD`
    pub formatted_price: String,
    pub sold_units: u32,
    /// `price × soldUnits`
    pub profit: f64,
    pub formatted_profit: String,
    pub created_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        let profit = profit(&item);
        Self {
            id: item.id.to_string(),
            formatted_price: format_money(item.price),
            price: item.price,
            sold_units: item.sold_units,
            profit,
            formatted_profit: format_money(profit),
            name: item.name,
            image: item.image.into(),
            created_at: item.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ItemListResponse {
    /// Newest first
    pub items: Vec<ItemResponse>,
    pub total_profit: f64,
    pub formatted_total_profit: String,
}

impl From<Vec<Item>> for ItemListResponse {
    fn from(items: Vec<Item>) -> Self {
        let report = ProfitReport::from_items(items.iter());
        Self {
            items: items.into_iter().map(ItemResponse::from).collect(),
            total_profit: report.total,
            formatted_total_profit: report.formatted_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::ItemId;
    use poem_openapi::types::{ParseFromJSON, ToJSON};
    use serde_json::json;

    fn mug(id: &str, price: f64, sold_units: u32) -> Item {
        Item {
            id: ItemId::from(id),
            image: ItemImage::new(
                StoragePath::from("uid-1/1".to_string()),
                "https://cdn.example.com/mug.png",
            ),
            name: "Coffee Mug".to_string(),
            price,
            sold_units,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn should_read_camel_case_request_body() {
        let request = ItemRequest::parse_from_json(Some(json!({
            "name": "Desk Lamp",
            "price": 1,
            "soldUnits": 3,
            "image": { "path": "uid-1/1", "url": "data:image/png;base64,iVBORw==" }
        })))
        .unwrap();

        let draft = ItemDraft::from(request);
        assert_eq!(draft.sold_units, Some(RawNumber::Number(3.0)));
        assert_eq!(draft.price, Some(RawNumber::Number(1.0)));
        assert_eq!(
            draft.image.map(|image| image.path.as_str().to_string()),
            Some("uid-1/1".to_string())
        );
    }

    #[test]
    fn should_write_camel_case_response_body() {
        let list = ItemListResponse::from(vec![mug("a", 2.5, 4)]);

        let body = list.to_json().unwrap();

        assert_eq!(body["totalProfit"], json!(10.0));
        assert_eq!(body["formattedTotalProfit"], json!("$10.00USD"));
        let item = &body["items"][0];
        assert_eq!(item["soldUnits"], json!(4));
        assert_eq!(item["formattedPrice"], json!("$2.50USD"));
        assert!(item.get("createdAt").is_some());
        assert!(item.get("sold_units").is_none());
    }

    #[test]
    fn should_keep_text_numbers_for_the_validator() {
        let draft = ItemDraft::from(ItemRequest {
            image: None,
            name: "Coffee Mug".to_string(),
            price: Some(json!("9.99")),
            sold_units: Some(json!(3)),
        });

        assert_eq!(draft.price, Some(RawNumber::Text("9.99".to_string())));
        assert_eq!(draft.sold_units, Some(RawNumber::Number(3.0)));
    }

    #[test]
    fn should_treat_null_as_missing() {
        let draft = ItemDraft::from(ItemRequest {
            image: None,
            name: String::new(),
            price: Some(Value::Null),
            sold_units: None,
        });

        assert_eq!(draft.price, None);
    }

    #[test]
    fn should_pass_non_numeric_json_as_text() {
        assert_eq!(
            raw_number(json!(true)),
            Some(RawNumber::Text("true".to_string()))
        );
    }

    #[test]
    fn should_render_formatted_price_and_profit() {
        let response = ItemResponse::from(mug("abc", 9.999, 3));

        assert_eq!(response.formatted_price, "$10.00USD");
        assert_eq!(response.formatted_profit, "$30.00USD");
    }

    #[test]
    fn should_total_profit_across_items() {
        let list = ItemListResponse::from(vec![mug("a", 2.5, 4), mug("b", 10.0, 1)]);

        assert_eq!(list.items.len(), 2);
        assert_eq!(list.total_profit, 20.0);
        assert_eq!(list.formatted_total_profit, "$20.00USD");
    }

    #[test]
    fn should_report_zero_total_for_empty_list() {
        let list = ItemListResponse::from(Vec::new());

        assert_eq!(list.formatted_total_profit, "$0.00USD");
    }
}
