//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use async_trait::async_trait;
use parking_lot::Mutex;
use pizzahub::data::{
    FetchError, FlavorSource, InMemoryOrderStore, OrderStore, StaticConnectivity,
};
use pizzahub::domain::{MenuListItem, Order, PizzaFlavor};
use pizzahub::ui::menu_list::MenuListScreen;
use pizzahub::ui::mvi::{Screen, ViewModel};
use rust_decimal::Decimal;
use std::collections::VecDeque;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub type FetchResult = Result<Option<Vec<PizzaFlavor>>, FetchError>;

/// Price from cents, e.g. `price(999)` is 9.99.
pub fn price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

pub fn flavor(name: &str, cents: i64) -> PizzaFlavor {
    PizzaFlavor {
        name: name.to_string(),
        price: price(cents),
    }
}

/// Three flavors: Margherita 9.00, Pepperoni 11.00, Quattro Formaggi 13.99.
pub fn sample_flavors() -> Vec<PizzaFlavor> {
    vec![
        flavor("Margherita", 900),
        flavor("Pepperoni", 1100),
        flavor("Quattro Formaggi", 1399),
    ]
}

/// `sample_flavors()` as menu items.
pub fn sample_items() -> Vec<MenuListItem> {
    vec![
        MenuListItem::new(0, "Margherita", price(900)),
        MenuListItem::new(1, "Pepperoni", price(1100)),
        MenuListItem::new(2, "Quattro Formaggi", price(1399)),
    ]
}

/// Catalog that replays scripted results, one per fetch. Once the script is
/// exhausted every fetch answers `null`.
#[derive(Default)]
pub struct ScriptedCatalog {
    script: Mutex<VecDeque<FetchResult>>,
    calls: AtomicUsize,
    completed: AtomicUsize,
    delay: Option<Duration>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serving(flavors: Vec<PizzaFlavor>) -> Self {
        Self::new().then(Ok(Some(flavors)))
    }

    pub fn then(self, result: FetchResult) -> Self {
        self.script.lock().push_back(result);
        self
    }

    /// Hold every fetch for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Fetches that ran to completion.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FlavorSource for ScriptedCatalog {
    async fn fetch_flavors(&self) -> FetchResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.completed.fetch_add(1, Ordering::SeqCst);
        self.script.lock().pop_front().unwrap_or(Ok(None))
    }
}

/// Order store that records every call.
#[derive(Default)]
pub struct RecordingStore {
    inner: InMemoryOrderStore,
    saved: Mutex<Vec<Order>>,
    reads: AtomicUsize,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Vec<Order> {
        self.saved.lock().clone()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl OrderStore for RecordingStore {
    fn save(&self, order: Order) {
        self.saved.lock().push(order.clone());
        self.inner.save(order);
    }

    fn get(&self) -> Order {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get()
    }
}

/// Menu screen over fakes.
pub fn menu_screen(
    catalog: Arc<ScriptedCatalog>,
    online: bool,
    store: Arc<RecordingStore>,
) -> MenuListScreen {
    MenuListScreen::new(catalog, Arc::new(StaticConnectivity(online)), store)
}

/// Wait until the screen has no queued intents and no running handlers.
pub async fn settle<S: Screen>(view_model: &ViewModel<S>) {
    tokio::time::timeout(Duration::from_secs(5), view_model.settled())
        .await
        .expect("screen did not settle");
}

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a config.toml in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
