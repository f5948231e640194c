use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use pizzahub::config::Config;
use pizzahub::data::{
    ConnectivityProbe, FlavorSource, HttpCatalog, InMemoryOrderStore, OrderStore,
    StaticConnectivity, TcpConnectivityProbe,
};
use pizzahub::domain::{format_price, Order};
use pizzahub::logging::init_tracing;
use pizzahub::ui::menu_list::{MenuListEvent, MenuListIntent, MenuListScreen, MenuListState};
use pizzahub::ui::mvi::ViewModel;
use pizzahub::ui::summary::SummaryScreen;

#[derive(Parser, Debug)]
#[command(name = "pizzahub", version, about = "Order up to two pizzas, half of each")]
struct Cli {
    /// Config file (default: ~/.config/pizzahub/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Catalog server, overrides `catalog.base_url`
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the menu
    Menu,
    /// Order one or two pizzas by menu id
    Order {
        #[arg(required = true, num_args = 1..=2, value_name = "ID")]
        ids: Vec<usize>,
    },
}

/// Collaborators shared by both screens.
struct Services {
    catalog: Arc<dyn FlavorSource>,
    connectivity: Arc<dyn ConnectivityProbe>,
    orders: Arc<dyn OrderStore>,
}

impl Services {
    fn new(config: &Config) -> anyhow::Result<Self> {
        let catalog =
            HttpCatalog::new(&config.catalog).context("Failed to build catalog client")?;
        tracing::debug!(url = catalog.url(), "Catalog endpoint");
        Ok(Self {
            catalog: Arc::new(catalog),
            connectivity: connectivity_probe(config),
            orders: Arc::new(InMemoryOrderStore::new()),
        })
    }

    fn menu_screen(&self) -> MenuListScreen {
        MenuListScreen::new(
            Arc::clone(&self.catalog),
            Arc::clone(&self.connectivity),
            Arc::clone(&self.orders),
        )
    }
}

fn connectivity_probe(config: &Config) -> Arc<dyn ConnectivityProbe> {
    if !config.connectivity.enabled {
        return Arc::new(StaticConnectivity(true));
    }
    let timeout = Duration::from_millis(config.connectivity.probe_timeout_ms);
    match TcpConnectivityProbe::for_url(&config.catalog.base_url, timeout) {
        Some(probe) => Arc::new(probe),
        None => {
            tracing::warn!(
                base_url = %config.catalog.base_url,
                "No probe target in catalog URL, assuming online"
            );
            Arc::new(StaticConnectivity(true))
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    if let Some(base_url) = &cli.base_url {
        config.catalog.base_url = base_url.clone();
        config.validate().context("Invalid --base-url")?;
    }
    Ok(config)
}

/// Launch the menu screen and wait until the catalog load has finished.
async fn loaded_menu(services: &Services) -> anyhow::Result<ViewModel<MenuListScreen>> {
    let menu = ViewModel::new(services.menu_screen());
    menu.settled().await;
    if let Some(message) = menu.state().data_error_message {
        bail!("Failed to load menu: {}", message);
    }
    Ok(menu)
}

fn print_menu(state: &MenuListState) {
    for item in &state.data {
        let mark = if state.is_selected(item) { "*" } else { " " };
        println!(
            "{}{:>3}  {:<28} {:>8}",
            mark,
            item.id,
            item.name,
            format_price(item.price)
        );
    }
}

fn print_order(order: &Order) {
    for item in &order.items {
        println!("{:<32} {:>8}", item.name, format_price(item.price));
    }
    println!("{:<32} {:>8}", "Total", format_price(order.total_price));
}

async fn run_menu(services: &Services) -> anyhow::Result<()> {
    let menu = loaded_menu(services).await?;
    print_menu(&menu.state());
    Ok(())
}

async fn run_order(services: &Services, ids: &[usize]) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    if let Some(dup) = ids.iter().find(|id| !seen.insert(**id)) {
        bail!("Menu item {} given twice", dup);
    }

    let menu = loaded_menu(services).await?;
    let state = menu.state();
    for id in ids {
        let item = state
            .data
            .iter()
            .find(|item| item.id == *id)
            .cloned()
            .with_context(|| format!("Unknown menu item id {}", id))?;
        menu.send_intent(MenuListIntent::MenuListItemClick { item });
    }
    menu.settled().await;

    let state = menu.state();
    print_menu(&state);
    println!();
    if !state.confirm_button_state.enabled {
        bail!("Nothing selected");
    }

    menu.send_intent(MenuListIntent::ConfirmButtonClick);
    menu.settled().await;
    let MenuListEvent::NavigateSummaryScreen { order } = menu
        .try_next_event()
        .context("Order was not confirmed")?;
    tracing::debug!(total = %order.total_price, "Navigating to summary");

    let summary = ViewModel::new(SummaryScreen::new(Arc::clone(&services.orders)));
    summary.settled().await;
    print_order(&summary.state().data);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let services = Services::new(&config)?;

    match &cli.command {
        Command::Menu => run_menu(&services).await,
        Command::Order { ids } => run_order(&services, ids).await,
    }
}
