use crate::ui::mvi::Reducer;
use crate::ui::summary::intent::SummaryIntent;
use crate::ui::summary::state::SummaryState;

pub struct SummaryReducer;

impl Reducer for SummaryReducer {
    type State = SummaryState;
    type Intent = SummaryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SummaryIntent::LoadData => SummaryState {
                is_blocking_loading: true,
                ..state
            },
            SummaryIntent::DataReady { order } => SummaryState {
                data: order,
                is_blocking_loading: false,
                ..state
            },
        }
    }
}
