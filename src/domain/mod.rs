//! Menu and order model shared by both screens.

mod menu;
mod order;

pub use menu::{map_flavors, MenuListItem, PizzaFlavor};
pub use order::{format_price, Order, OrderItem};
