//! Collaborators the screens consume: connectivity, the flavor catalog and
//! the current-order slot.

mod catalog;
mod connectivity;
mod error;
mod order_store;

pub use catalog::{load_menu, FlavorSource, HttpCatalog};
pub use connectivity::{ConnectivityProbe, StaticConnectivity, TcpConnectivityProbe};
pub use error::FetchError;
pub use order_store::{InMemoryOrderStore, OrderStore};
