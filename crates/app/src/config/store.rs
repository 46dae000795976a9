//! Store Config

use std::path::PathBuf;

use clap::Args;

/// Persisted store settings.
#[derive(Debug, Clone, Args)]
pub struct StoreConfig {
    /// Directory holding the cart, template and order files
    #[arg(long, env = "PORTAL_DATA_DIR", default_value = ".portal")]
    pub data_dir: PathBuf,
}
