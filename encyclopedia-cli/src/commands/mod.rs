//! CLI command implementations.

pub mod entries;
pub mod init;
pub mod serve;

pub use entries::{
    edit_entry, list_entries, new_entry, random_entry, search_entries, show_entry,
};
pub use init::init_project;
pub use serve::serve;

use anyhow::{Context, Result};
use encyclopedia_core::{Config, EntryStore, FsStorage};
use std::path::Path;

/// Load the configuration and open the entry store it points at
pub fn open_store(config_path: &Path) -> Result<(Config, EntryStore<FsStorage>)> {
    let config = Config::from_file(config_path)
        .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;
    let store = EntryStore::from_config(&config);
    tracing::debug!("Entries directory: {:?}", store.storage().root());
    Ok((config, store))
}
