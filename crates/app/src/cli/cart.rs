use clap::{Args, Subcommand};
use portal::prelude::{ProductId, QuantityChange};
use portal_app::{catalog::find_product, context::AppContext};

use super::{
    error::{CommandError, failed},
    render,
};

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show cart items and totals
    Show,

    /// Add a catalog product, or add to its quantity
    Add(AddItemArgs),

    /// Overwrite an item's quantity; use `remove` to drop an item
    Set(SetQuantityArgs),

    /// Increase an item by its minimum order quantity
    Inc(ItemArgs),

    /// Decrease an item by its minimum order quantity
    Dec(ItemArgs),

    /// Remove an item
    Remove(ItemArgs),

    /// Remove every item
    Clear,
}

#[derive(Debug, Args)]
struct ItemArgs {
    /// Product id
    product_id: String,
}

#[derive(Debug, Args)]
struct AddItemArgs {
    /// Product id
    product_id: String,

    /// Quantity to add; defaults to the product's minimum order quantity
    #[arg(long)]
    quantity: Option<u32>,
}

#[derive(Debug, Args)]
struct SetQuantityArgs {
    /// Product id
    product_id: String,

    /// New quantity
    quantity: u32,
}

pub(crate) async fn run(app: &AppContext, command: CartCommand) -> Result<(), CommandError> {
    match command.command {
        CartSubcommand::Show => show(app),
        CartSubcommand::Add(args) => add(app, args).await,
        CartSubcommand::Set(args) => {
            let id = ProductId::new(args.product_id);
            let quantity = app
                .carts
                .set_quantity(&id, args.quantity)
                .map_err(failed("failed to set quantity"))?;

            print_change(&id, QuantityChange::Updated(quantity));
            show(app)
        }
        CartSubcommand::Inc(args) => {
            let id = ProductId::new(args.product_id);
            let quantity = app
                .carts
                .increment(&id)
                .map_err(failed("failed to increase quantity"))?;

            print_change(&id, QuantityChange::Updated(quantity));
            show(app)
        }
        CartSubcommand::Dec(args) => {
            let id = ProductId::new(args.product_id);
            let change = app
                .carts
                .decrement(&id)
                .map_err(failed("failed to decrease quantity"))?;

            print_change(&id, change);
            show(app)
        }
        CartSubcommand::Remove(args) => {
            let id = ProductId::new(args.product_id);
            app.carts
                .remove_item(&id)
                .map_err(failed("failed to remove item"))?;

            print_change(&id, QuantityChange::Removed);
            show(app)
        }
        CartSubcommand::Clear => {
            app.carts
                .clear()
                .map_err(failed("failed to clear cart"))?;

            println!("cart cleared");
            Ok(())
        }
    }
}

fn show(app: &AppContext) -> Result<(), CommandError> {
    let cart = app
        .carts
        .cart()
        .map_err(failed("failed to load cart"))?;

    if cart.is_empty() {
        println!("cart is empty");
        return Ok(());
    }

    println!("{}", render::cart_items(cart.items()));
    println!("{}", render::totals(&cart.totals()));

    Ok(())
}

async fn add(app: &AppContext, args: AddItemArgs) -> Result<(), CommandError> {
    let id = ProductId::new(args.product_id);

    let product = find_product(app.catalog.as_ref(), &id)
        .await
        .map_err(failed("failed to find product"))?;

    if !product.in_stock {
        return Err(CommandError::Rejected(format!(
            "{} is out of stock",
            product.name
        )));
    }

    let quantity = app
        .carts
        .add_product(&product, args.quantity)
        .map_err(failed("failed to add product"))?;

    println!("{}: {quantity} {} in cart", product.name, product.unit);

    show(app)
}

fn print_change(id: &ProductId, change: QuantityChange) {
    match change {
        QuantityChange::Updated(quantity) => println!("{id}: quantity {quantity}"),
        QuantityChange::Removed => println!("{id}: removed"),
    }
}
