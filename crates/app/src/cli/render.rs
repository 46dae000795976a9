//! Table rendering for command output.

use portal::{
    prelude::{CartTemplate, CartTotals, LineItem, Order, Product},
    pricing::to_money,
};
use rust_decimal::Decimal;
use rusty_money::iso;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

fn money(amount: Decimal) -> String {
    to_money(amount, iso::INR).to_string()
}

fn finish(builder: Builder, numeric_from: usize) -> String {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(numeric_from..), Alignment::right());

    table.to_string()
}

pub(super) fn products(products: &[&Product]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Name", "Category", "Stock", "Price", "MRP", "Off", "Min"]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.category.clone(),
            if product.in_stock { "in stock" } else { "out" }.to_string(),
            money(product.unit_price),
            money(product.list_price),
            format!("{}%", product.discount_percentage()),
            format!("{} {}", product.min_order_quantity, product.unit),
        ]);
    }

    finish(builder, 4)
}

pub(super) fn cart_items(items: &[LineItem]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Item", "Quantity", "Price", "Line Total"]);

    for item in items {
        builder.push_record([
            item.id.to_string(),
            item.name.clone(),
            format!("{} {}", item.quantity, item.unit),
            money(item.unit_price),
            money(item.line_total()),
        ]);
    }

    finish(builder, 2)
}

pub(super) fn totals(totals: &CartTotals) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Items".to_string(), totals.item_count.to_string()]);
    builder.push_record(["Subtotal".to_string(), money(totals.subtotal)]);
    builder.push_record(["Savings".to_string(), money(totals.savings)]);
    builder.push_record(["GST (18%)".to_string(), money(totals.tax)]);
    builder.push_record(["Total".to_string(), money(totals.total)]);

    finish(builder, 1)
}

pub(super) fn templates(templates: &[CartTemplate]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Name", "Created", "Items", "Value"]);

    for template in templates {
        builder.push_record([
            template.id().to_string(),
            template.name().to_string(),
            template.created_at().strftime("%Y-%m-%d %H:%M").to_string(),
            template.total_item_count().to_string(),
            money(template.total_value()),
        ]);
    }

    finish(builder, 3)
}

pub(super) fn orders(orders: &[Order]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Order", "Date", "Status", "Lines", "Total"]);

    for order in orders {
        builder.push_record([
            order.id().to_string(),
            order.date().to_string(),
            order.status().to_string(),
            order.items().len().to_string(),
            money(order.total()),
        ]);
    }

    finish(builder, 3)
}

pub(super) fn order_summary(order: &Order) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Date".to_string(), order.date().to_string()]);
    builder.push_record(["Status".to_string(), order.status().to_string()]);
    builder.push_record(["Subtotal".to_string(), money(order.subtotal())]);
    builder.push_record(["Tax".to_string(), money(order.tax())]);
    builder.push_record(["Total".to_string(), money(order.total())]);

    finish(builder, 1)
}
