use crate::domain::{MenuListItem, Order};
use crate::ui::menu_list::intent::MenuListIntent;
use crate::ui::menu_list::state::{ButtonState, MenuListState, MAX_SELECTED_ITEMS};
use crate::ui::mvi::Reducer;

pub struct MenuListReducer;

impl Reducer for MenuListReducer {
    type State = MenuListState;
    type Intent = MenuListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MenuListIntent::LoadData => MenuListState {
                confirm_button_state: ButtonState { enabled: false },
                is_blocking_loading: true,
                ..state
            },
            MenuListIntent::DataReady { items } => MenuListState {
                data: items,
                data_error_message: None,
                is_blocking_loading: false,
                ..state
            },
            MenuListIntent::DataFetchError { message } => MenuListState {
                data: Vec::new(),
                data_error_message: Some(message),
                is_blocking_loading: false,
                ..state
            },
            MenuListIntent::MenuListItemClick { item } => MenuListState {
                selected_menu_items: toggle_selection(&state.selected_menu_items, item),
                ..state
            },
            MenuListIntent::ValidateConfirmButtonState => MenuListState {
                confirm_button_state: ButtonState {
                    enabled: !state.selected_menu_items.is_empty(),
                },
                ..state
            },
            MenuListIntent::CalculateTotalPizzaPrice => MenuListState {
                order: Order::from_selection(&state.selected_menu_items),
                ..state
            },
            // Handled as effects only
            MenuListIntent::UpdatePreviewPrice | MenuListIntent::ConfirmButtonClick => state,
        }
    }
}

/// Deselect `item` if it is selected, otherwise append it while there is room.
fn toggle_selection(selected: &[MenuListItem], item: MenuListItem) -> Vec<MenuListItem> {
    if selected.contains(&item) {
        selected.iter().filter(|s| **s != item).cloned().collect()
    } else if selected.len() < MAX_SELECTED_ITEMS {
        let mut next = selected.to_vec();
        next.push(item);
        next
    } else {
        tracing::debug!(item = %item.name, "Selection full, click ignored");
        selected.to_vec()
    }
}
