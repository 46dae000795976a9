//! Typed records on top of the raw store.
//!
//! Values that fail to parse or validate are logged and read as absent.

use std::fmt::Display;

use portal::prelude::*;
use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use super::{KeyValueStore, StoreError, StoreKey};

fn read_list<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: StoreKey,
) -> Result<Vec<T>, StoreError> {
    let Some(raw) = store.get(key.as_str())? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(values) => Ok(values),
        Err(error) => {
            warn!(%key, %error, "discarding unreadable stored value");

            Ok(Vec::new())
        }
    }
}

fn or_discard<T: Default, E: Display>(key: StoreKey, result: Result<T, E>) -> T {
    result.unwrap_or_else(|error| {
        warn!(%key, %error, "discarding invalid stored value");

        T::default()
    })
}

fn write_list<T: Serialize>(
    store: &dyn KeyValueStore,
    key: StoreKey,
    values: &[T],
) -> Result<(), StoreError> {
    let encoded = serde_json::to_string(values).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;

    store.set(key.as_str(), encoded)
}

pub(crate) fn read_cart(store: &dyn KeyValueStore) -> Result<Cart, StoreError> {
    let items: Vec<LineItem> = read_list(store, StoreKey::Cart)?;

    Ok(or_discard(StoreKey::Cart, Cart::with_items(items)))
}

pub(crate) fn write_cart(store: &dyn KeyValueStore, cart: &Cart) -> Result<(), StoreError> {
    write_list(store, StoreKey::Cart, cart.items())
}

pub(crate) fn read_templates(store: &dyn KeyValueStore) -> Result<Templates, StoreError> {
    let templates: Vec<CartTemplate> = read_list(store, StoreKey::Templates)?;

    Ok(or_discard(StoreKey::Templates, Templates::with_templates(templates)))
}

pub(crate) fn write_templates(
    store: &dyn KeyValueStore,
    templates: &Templates,
) -> Result<(), StoreError> {
    write_list(store, StoreKey::Templates, templates.as_slice())
}

pub(crate) fn read_orders(store: &dyn KeyValueStore) -> Result<Vec<Order>, StoreError> {
    let orders: Vec<Order> = read_list(store, StoreKey::Orders)?;
    let checked = orders.iter().try_for_each(Order::validate).map(|()| orders);

    Ok(or_discard(StoreKey::Orders, checked))
}

pub(crate) fn write_orders(store: &dyn KeyValueStore, orders: &[Order]) -> Result<(), StoreError> {
    write_list(store, StoreKey::Orders, orders)
}
