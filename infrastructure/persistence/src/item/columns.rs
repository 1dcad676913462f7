use business::domain::item::repository::{OrderSpec, SortDirection, SortField};
use strum_macros::{AsRefStr, Display};

/// Sortable columns of the `items` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ItemColumn {
    CreatedAt,
    Name,
    Price,
    SoldUnits,
}

impl From<SortField> for ItemColumn {
    fn from(field: SortField) -> Self {
        match field {
            SortField::CreatedAt => ItemColumn::CreatedAt,
            SortField::Name => ItemColumn::Name,
            SortField::Price => ItemColumn::Price,
            SortField::SoldUnits => ItemColumn::SoldUnits,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Direction {
    #[strum(serialize = "ASC")]
    Asc,
    #[strum(serialize = "DESC")]
    Desc,
}

impl From<SortDirection> for Direction {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => Direction::Asc,
            SortDirection::Descending => Direction::Desc,
        }
    }
}

/// `ORDER BY` clause built only from the fixed column names above.
pub fn order_by_clause(order: &OrderSpec) -> String {
    let column = ItemColumn::from(order.field);
    let direction = Direction::from(order.direction);
    format!("ORDER BY {} {direction}, id {direction}", column.as_ref())
}
