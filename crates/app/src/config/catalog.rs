//! Catalog Config

use std::path::PathBuf;

use clap::{Args, ValueEnum};

/// Where catalog products come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CatalogSourceKind {
    /// A local YAML file.
    File,

    /// A product query against the CRM.
    Crm,
}

/// Catalog settings.
#[derive(Debug, Clone, Args)]
pub struct CatalogConfig {
    /// Catalog source (file, crm)
    #[arg(
        long = "catalog-source",
        env = "PORTAL_CATALOG_SOURCE",
        value_enum,
        default_value_t = CatalogSourceKind::File
    )]
    pub source: CatalogSourceKind,

    /// Catalog YAML file, used by the file source
    #[arg(
        long = "catalog-file",
        env = "PORTAL_CATALOG_FILE",
        default_value = "catalog.yml"
    )]
    pub file: PathBuf,

    /// Product family queried by the CRM source
    #[arg(long = "crm-product-family", env = "CRM_PRODUCT_FAMILY", default_value = "Pipes")]
    pub family: String,
}
