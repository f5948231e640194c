use crate::domain::Order;
use crate::ui::mvi::SingleEvent;

/// One-shot effects of the menu screen.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuListEvent {
    /// The order was confirmed and saved; show the summary.
    NavigateSummaryScreen { order: Order },
}

impl SingleEvent for MenuListEvent {}
