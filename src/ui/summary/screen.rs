use std::sync::Arc;

use async_trait::async_trait;

use crate::data::OrderStore;
use crate::ui::mvi::{Effects, NoEvent, Screen};
use crate::ui::summary::intent::SummaryIntent;
use crate::ui::summary::reducer::SummaryReducer;
use crate::ui::summary::state::SummaryState;

pub struct SummaryScreen {
    orders: Arc<dyn OrderStore>,
}

impl SummaryScreen {
    pub fn new(orders: Arc<dyn OrderStore>) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl Screen for SummaryScreen {
    const NAME: &'static str = "summary";

    type State = SummaryState;
    type Intent = SummaryIntent;
    type Event = NoEvent;
    type Reducer = SummaryReducer;

    fn launch_intent(&self) -> Option<SummaryIntent> {
        Some(SummaryIntent::LoadData)
    }

    async fn handle(&self, intent: SummaryIntent, effects: &Effects<Self>) {
        match intent {
            SummaryIntent::LoadData => {
                let order = self.orders.get();
                effects.send_intent(SummaryIntent::DataReady { order });
            }
            SummaryIntent::DataReady { .. } => {}
        }
    }
}
