//! Platform-specific application directory.
//!
//! Every file the tool persists (system config, aliases, cache, token store)
//! lives below one directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\codecentric\lt`
//! - **macOS**: `~/Library/Application Support/codecentric/lt`
//! - **Linux**: `~/.local/share/codecentric/lt`

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "codecentric";
pub const APP_NAME: &str = "lt";
pub const CACHE_DIR_NAME: &str = "cache";

#[derive(Clone, Debug)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Creates the application directory if needed.
    pub fn ensure(&self) -> Result<&Path> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(&self.base_path)
    }

    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        Ok(self.ensure()?.join(file_name))
    }

    /// Directory holding the project/issue cache. Not created here, so that
    /// `reset` can remove it without it reappearing.
    pub fn cache_dir(&self) -> PathBuf {
        self.base_path.join(CACHE_DIR_NAME)
    }
}
