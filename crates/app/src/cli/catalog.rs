use clap::{Args, Subcommand};
use portal::prelude::{CatalogFilter, categories, filter_products};
use portal_app::context::AppContext;

use super::{
    error::{CommandError, failed},
    render,
};

#[derive(Debug, Args)]
pub(crate) struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Debug, Subcommand)]
enum CatalogSubcommand {
    /// List catalog products
    List(ListProductsArgs),
}

#[derive(Debug, Args)]
struct ListProductsArgs {
    /// Case-insensitive text matched against name and description
    #[arg(long)]
    search: Option<String>,

    /// Category to show; "All" shows every category
    #[arg(long)]
    category: Option<String>,
}

pub(crate) async fn run(app: &AppContext, command: CatalogCommand) -> Result<(), CommandError> {
    match command.command {
        CatalogSubcommand::List(args) => list(app, args).await,
    }
}

async fn list(app: &AppContext, args: ListProductsArgs) -> Result<(), CommandError> {
    let products = app
        .catalog
        .list_products()
        .await
        .map_err(failed("failed to load catalog"))?;

    let filter = CatalogFilter {
        search: args.search.as_deref(),
        category: args.category.as_deref(),
    };

    let shown = filter_products(&products, &filter);

    println!("categories: {}", categories(&products).join(", "));

    if shown.is_empty() {
        println!("no products match");
        return Ok(());
    }

    println!("{}", render::products(&shown));

    Ok(())
}
