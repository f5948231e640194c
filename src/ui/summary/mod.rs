//! Summary screen: shows the last confirmed order.

mod intent;
mod reducer;
mod screen;
mod state;

pub use intent::SummaryIntent;
pub use reducer::SummaryReducer;
pub use screen::SummaryScreen;
pub use state::SummaryState;
