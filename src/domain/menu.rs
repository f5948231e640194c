use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry of the remote flavor catalog, as served on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaFlavor {
    pub name: String,
    pub price: Decimal,
}

/// A selectable row of the menu. `id` is the flavor's position in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MenuListItem {
    pub id: usize,
    pub name: String,
    pub price: Decimal,
}

impl MenuListItem {
    pub fn new(id: usize, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Map catalog records to menu items, using each record's index as its id.
pub fn map_flavors(flavors: Vec<PizzaFlavor>) -> Vec<MenuListItem> {
    flavors
        .into_iter()
        .enumerate()
        .map(|(id, flavor)| MenuListItem {
            id,
            name: flavor.name,
            price: flavor.price,
        })
        .collect()
}
