//! Intents for the menu screen.

use crate::domain::MenuListItem;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the menu screen.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuListIntent {
    /// (Re)load the catalog. Sent automatically on launch.
    LoadData,

    /// The catalog arrived.
    DataReady { items: Vec<MenuListItem> },

    /// The catalog could not be loaded; `message` is shown to the user.
    DataFetchError { message: String },

    /// The user tapped a menu row.
    MenuListItemClick { item: MenuListItem },

    /// Re-derive whether the confirm button is enabled.
    ValidateConfirmButtonState,

    /// Re-price the current selection.
    CalculateTotalPizzaPrice,

    /// The preview total changed. No state change; views refresh on it.
    UpdatePreviewPrice,

    /// The user confirmed the order.
    ConfirmButtonClick,
}

impl Intent for MenuListIntent {}
