use clap::{Parser, Subcommand};
use portal_app::{config::PortalConfig, context::AppContext, observability};

use self::error::CommandError;

mod cart;
mod catalog;
mod error;
mod order;
mod render;
mod template;

#[derive(Debug, Parser)]
#[command(name = "portal", about = "Distributor portal ordering CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: PortalConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog(catalog::CatalogCommand),

    /// Inspect and change the current cart
    Cart(cart::CartCommand),

    /// Manage saved cart templates
    Template(template::TemplateCommand),

    /// Place orders and view order history
    Order(order::OrderCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), CommandError> {
        observability::init_logging(&self.config.logging)
            .map_err(|error| {
                CommandError::Failed(format!("failed to initialise logging: {error}"))
            })?;

        let app = AppContext::from_config(&self.config)
            .map_err(|error| CommandError::Failed(format!("failed to start: {error}")))?;

        match self.command {
            Commands::Catalog(command) => catalog::run(&app, command).await,
            Commands::Cart(command) => cart::run(&app, command).await,
            Commands::Template(command) => template::run(&app, command),
            Commands::Order(command) => order::run(&app, command).await,
        }
    }
}
