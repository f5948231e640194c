use rust_decimal::{Decimal, RoundingStrategy};

use super::menu::MenuListItem;

/// A line of an order. When two pizzas share an order each line carries half
/// of its catalog price.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: usize,
    pub name: String,
    pub price: Decimal,
}

/// The current cart. `Order::default()` is the empty order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Order {
    pub total_price: Decimal,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Price a selection of menu items.
    ///
    /// One pizza costs its full price. Two pizzas are split half and half:
    /// each line is charged half of its own price and the total is the sum of
    /// both halves. Any other selection size yields the empty order.
    pub fn from_selection(selected: &[MenuListItem]) -> Self {
        match selected {
            [item] => Self {
                total_price: item.price,
                items: vec![OrderItem {
                    id: item.id,
                    name: item.name.clone(),
                    price: item.price,
                }],
            },
            [first, second] => {
                let items: Vec<OrderItem> = [first, second]
                    .into_iter()
                    .map(|item| OrderItem {
                        id: item.id,
                        name: item.name.clone(),
                        price: item.price / Decimal::TWO,
                    })
                    .collect();
                let total_price = items.iter().map(|item| item.price).sum();
                Self { total_price, items }
            }
            _ => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Display form of a price, e.g. `$9.99`. Half cents round up.
pub fn format_price(price: Decimal) -> String {
    let mut cents = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cents.rescale(2);
    format!("${}", cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: usize, cents: i64) -> MenuListItem {
        MenuListItem::new(id, format!("Pizza {}", id), Decimal::new(cents, 2))
    }

    #[test]
    fn nothing_selected_is_empty_order() {
        let order = Order::from_selection(&[]);
        assert_eq!(order, Order::default());
        assert_eq!(order.total_price, Decimal::ZERO);
        assert!(order.is_empty());
    }

    #[test]
    fn single_pizza_costs_full_price() {
        let order = Order::from_selection(&[item(1, 999)]);
        assert_eq!(order.total_price, Decimal::new(999, 2));
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].price, Decimal::new(999, 2));
        assert_eq!(order.items[0].name, "Pizza 1");
    }

    #[test]
    fn two_pizzas_are_charged_half_each() {
        let order = Order::from_selection(&[item(1, 999), item(2, 899)]);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].price, Decimal::new(4995, 3));
        assert_eq!(order.items[1].price, Decimal::new(4495, 3));
        assert_eq!(order.total_price, Decimal::new(1898, 2) / Decimal::TWO);
    }

    #[test]
    fn split_keeps_selection_order() {
        let order = Order::from_selection(&[item(5, 1000), item(2, 2000)]);
        let ids: Vec<usize> = order.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![5, 2]);
        assert_eq!(order.total_price, Decimal::new(1500, 2));
    }

    #[test]
    fn oversized_selection_is_empty_order() {
        let order = Order::from_selection(&[item(1, 100), item(2, 200), item(3, 300)]);
        assert!(order.is_empty());
    }

    #[test]
    fn price_formatting() {
        assert_eq!(format_price(Decimal::new(999, 2)), "$9.99");
        assert_eq!(format_price(Decimal::new(4995, 3)), "$5.00");
        assert_eq!(format_price(Decimal::new(12, 0)), "$12.00");
        assert_eq!(format_price(Decimal::new(4445, 3)), "$4.45");
    }
}
