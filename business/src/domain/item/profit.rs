use super::model::Item;
use super::money::format_money;
use crate::domain::shared::value_objects::ItemId;

/// Profit of one item: `price × sold units`.
pub fn profit(item: &Item) -> f64 {
    item.price * f64::from(item.sold_units)
}

/// Sum of every item's profit; `0.0` for an empty sequence.
///
/// Plain floating-point accumulation, no error compensation.
pub fn total_profit<'a>(items: impl IntoIterator<Item = &'a Item>) -> f64 {
    items.into_iter().map(profit).fold(0.0, |total, profit| total + profit)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemProfit {
    pub id: ItemId,
    pub profit: f64,
    pub formatted: String,
}

/// Per-item and total profit, with display renderings.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitReport {
    pub items: Vec<ItemProfit>,
    pub total: f64,
    pub formatted_total: String,
}

impl ProfitReport {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let items: Vec<ItemProfit> = items
            .into_iter()
            .map(|item| {
                let profit = profit(item);
                ItemProfit {
                    id: item.id.clone(),
                    profit,
                    formatted: format_money(profit),
                }
            })
            .collect();
        let total = items.iter().fold(0.0, |total, item| total + item.profit);

        Self {
            items,
            total,
            formatted_total: format_money(total),
        }
    }
}
