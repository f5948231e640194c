use crate::domain::Order;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryIntent {
    /// Read the stored order. Sent automatically on launch.
    LoadData,
    DataReady { order: Order },
}

impl Intent for SummaryIntent {}
