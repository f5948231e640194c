//! Configuration: TOML file under the user config dir, defaults otherwise.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CatalogConfig, Config, ConnectivityConfig};
