//! Side effects of the menu screen.

use std::sync::Arc;

use async_trait::async_trait;

use crate::data::{load_menu, ConnectivityProbe, FetchError, FlavorSource, OrderStore};
use crate::ui::menu_list::event::MenuListEvent;
use crate::ui::menu_list::intent::MenuListIntent;
use crate::ui::menu_list::reducer::MenuListReducer;
use crate::ui::menu_list::state::MenuListState;
use crate::ui::mvi::{Effects, Screen};

/// Menu screen wired to its collaborators.
pub struct MenuListScreen {
    catalog: Arc<dyn FlavorSource>,
    connectivity: Arc<dyn ConnectivityProbe>,
    orders: Arc<dyn OrderStore>,
}

impl MenuListScreen {
    pub fn new(
        catalog: Arc<dyn FlavorSource>,
        connectivity: Arc<dyn ConnectivityProbe>,
        orders: Arc<dyn OrderStore>,
    ) -> Self {
        Self {
            catalog,
            connectivity,
            orders,
        }
    }

    async fn load_data(&self, effects: &Effects<Self>) {
        let result = if self.is_online().await {
            load_menu(self.catalog.as_ref()).await
        } else {
            Err(FetchError::Offline)
        };

        match result {
            Ok(items) => {
                tracing::info!(count = items.len(), "Menu loaded");
                effects.send_intent(MenuListIntent::DataReady { items });
            }
            Err(e) => {
                tracing::warn!(kind = e.kind(), error = %e, "Menu load failed");
                effects.send_intent(MenuListIntent::DataFetchError {
                    message: e.to_string(),
                });
            }
        }
    }

    /// Probes may block on the network, so they run off the async workers.
    async fn is_online(&self) -> bool {
        let probe = Arc::clone(&self.connectivity);
        match tokio::task::spawn_blocking(move || probe.is_available()).await {
            Ok(online) => online,
            Err(e) => {
                tracing::warn!(error = %e, "Connectivity probe panicked, treating as offline");
                false
            }
        }
    }

    fn confirm(&self, effects: &Effects<Self>) {
        let order = effects.state().order.clone();
        tracing::info!(
            items = order.items.len(),
            total = %order.total_price,
            "Order confirmed"
        );
        self.orders.save(order.clone());
        effects.trigger_event(MenuListEvent::NavigateSummaryScreen { order });
    }
}

#[async_trait]
impl Screen for MenuListScreen {
    const NAME: &'static str = "menu_list";

    type State = MenuListState;
    type Intent = MenuListIntent;
    type Event = MenuListEvent;
    type Reducer = MenuListReducer;

    fn launch_intent(&self) -> Option<MenuListIntent> {
        Some(MenuListIntent::LoadData)
    }

    fn runs_in_background(&self, intent: &MenuListIntent) -> bool {
        matches!(intent, MenuListIntent::LoadData)
    }

    async fn handle(&self, intent: MenuListIntent, effects: &Effects<Self>) {
        match intent {
            MenuListIntent::LoadData => self.load_data(effects).await,
            MenuListIntent::MenuListItemClick { .. } => {
                effects.send_intent(MenuListIntent::ValidateConfirmButtonState);
                effects.send_intent(MenuListIntent::CalculateTotalPizzaPrice);
            }
            MenuListIntent::CalculateTotalPizzaPrice => {
                effects.send_intent(MenuListIntent::UpdatePreviewPrice);
            }
            MenuListIntent::ConfirmButtonClick => self.confirm(effects),
            MenuListIntent::DataReady { .. }
            | MenuListIntent::DataFetchError { .. }
            | MenuListIntent::ValidateConfirmButtonState
            | MenuListIntent::UpdatePreviewPrice => {}
        }
    }
}
