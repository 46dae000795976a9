//! Pricing

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};
use serde::Serialize;

use crate::items::LineItem;

/// Flat tax rate applied to the cart subtotal (18%).
pub const TAX_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Sum of selling price times quantity.
pub fn subtotal(items: &[LineItem]) -> Decimal {
    items.iter().map(LineItem::line_total).sum()
}

/// Sum of list price times quantity.
pub fn list_total(items: &[LineItem]) -> Decimal {
    items.iter().map(LineItem::list_line_total).sum()
}

/// Difference between the list total and the subtotal.
pub fn savings(items: &[LineItem]) -> Decimal {
    list_total(items) - subtotal(items)
}

/// Sum of quantities.
pub fn item_count(items: &[LineItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}

/// Tax on a subtotal, rounded to a whole currency unit with midpoints rounded
/// away from zero.
pub fn tax(subtotal: Decimal) -> Decimal {
    (subtotal * TAX_RATE).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Express an amount in the given currency for display.
pub fn to_money(amount: Decimal, currency: &'static Currency) -> Money<'static, Currency> {
    Money::from_decimal(amount, currency)
}

/// Derived totals for a list of line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of quantities
    pub item_count: u64,

    /// Sum of selling price times quantity
    pub subtotal: Decimal,

    /// Sum of list price times quantity
    pub list_total: Decimal,

    /// List total minus subtotal
    pub savings: Decimal,

    /// Rounded tax on the subtotal
    pub tax: Decimal,

    /// Subtotal plus tax
    pub total: Decimal,
}

impl CartTotals {
    /// Compute all totals for `items`.
    pub fn from_items(items: &[LineItem]) -> Self {
        let subtotal = subtotal(items);
        let list_total = list_total(items);
        let tax = tax(subtotal);

        Self {
            item_count: item_count(items),
            subtotal,
            list_total,
            savings: list_total - subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}
