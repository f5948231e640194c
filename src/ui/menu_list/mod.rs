//! Menu screen: load the catalog, pick up to two pizzas, price them, confirm.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Catalog, selection, confirm button and current order
//! - `intent.rs` - User clicks and catalog load results
//! - `event.rs` - Navigation to the summary screen
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `screen.rs` - Catalog fetch, price follow-ups, order persistence

mod event;
mod intent;
mod reducer;
mod screen;
mod state;

pub use event::MenuListEvent;
pub use intent::MenuListIntent;
pub use reducer::MenuListReducer;
pub use screen::MenuListScreen;
pub use state::{ButtonState, MenuListState, MAX_SELECTED_ITEMS};
