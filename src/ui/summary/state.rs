use crate::domain::Order;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryState {
    pub data: Order,
    pub data_error_message: Option<String>,
    pub is_blocking_loading: bool,
}

impl UiState for SummaryState {}
