//! Portal application layer: persisted services, collaborators and
//! configuration around the `portal` domain core.

pub mod catalog;
pub mod config;
pub mod context;
pub mod crm;
pub mod domain;
pub mod observability;
pub mod store;

#[cfg(test)]
mod test;
