//! State for the menu screen.

use crate::domain::{MenuListItem, Order};
use crate::ui::mvi::UiState;

/// At most this many pizzas can share one order.
pub const MAX_SELECTED_ITEMS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuListState {
    /// Catalog rows, empty until loaded or after a failed load.
    pub data: Vec<MenuListItem>,
    pub data_error_message: Option<String>,
    pub confirm_button_state: ButtonState,
    /// True while the catalog is being fetched.
    pub is_blocking_loading: bool,
    /// Selected rows in click order, never more than [`MAX_SELECTED_ITEMS`].
    pub selected_menu_items: Vec<MenuListItem>,
    /// Priced selection, updated by `CalculateTotalPizzaPrice`.
    pub order: Order,
}

impl UiState for MenuListState {}

impl MenuListState {
    pub fn is_selected(&self, item: &MenuListItem) -> bool {
        self.selected_menu_items.contains(item)
    }
}
