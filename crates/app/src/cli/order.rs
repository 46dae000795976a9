use clap::{Args, Subcommand};
use portal_app::context::AppContext;

use super::{
    error::{CommandError, failed},
    render,
};

#[derive(Debug, Args)]
pub(crate) struct OrderCommand {
    #[command(subcommand)]
    command: OrderSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrderSubcommand {
    /// Place an order for the current cart
    Place,

    /// List placed orders, newest first
    List,
}

pub(crate) async fn run(app: &AppContext, command: OrderCommand) -> Result<(), CommandError> {
    match command.command {
        OrderSubcommand::Place => {
            let confirmation = app
                .orders
                .place_order()
                .await
                .map_err(|error| CommandError::from_service(&error, None))?;

            println!("order placed: {}", confirmation.order_id);

            if let Some(order) = confirmation.order {
                println!("{}", render::order_summary(&order));
            }

            Ok(())
        }
        OrderSubcommand::List => {
            let orders = app
                .orders
                .history()
                .await
                .map_err(failed("failed to load orders"))?;

            if orders.is_empty() {
                println!("no orders placed");
                return Ok(());
            }

            println!("{}", render::orders(&orders));
            Ok(())
        }
    }
}
