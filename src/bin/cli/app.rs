use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use flashq_lib::storage::FileStore;
use flashq_lib::view::{Page, ViewController};
use flashq_lib::Config;

/// Shared application state for CLI commands
pub struct App {
    pub data_dir: PathBuf,
    pub store: FileStore,
}

impl App {
    /// Initialize from `--data-dir`, the config file, or the default data directory
    pub fn new(data_dir: Option<&Path>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => Config::load()
                .data_dir()
                .context("Failed to get data directory")?,
        };

        let store = FileStore::new(data_dir.clone());
        store
            .init()
            .with_context(|| format!("Failed to initialize storage in {}", data_dir.display()))?;
        log::debug!("Using data directory {}", data_dir.display());

        Ok(Self { data_dir, store })
    }

    /// A view controller opened on `page`, hydrated from storage
    pub fn controller(&self, page: Page) -> ViewController<FileStore> {
        ViewController::open(self.store.clone(), page)
    }
}
