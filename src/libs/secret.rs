//! Encrypted local token store.
//!
//! Jira personal access tokens are kept per user in an AES-256-CBC encrypted,
//! base64 encoded file inside the application directory. The key and IV are
//! embedded at build time (see `build.rs`).

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use dialoguer::{theme::ColorfulTheme, Password};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

// Include generated metadata with the token store keys
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

const TOKEN_FILE_PREFIX: &str = ".jira_token_";

#[derive(Clone, Debug)]
pub struct Secret {
    secret_file_path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Secret {
    pub fn new(secret_name: &str) -> Self {
        let secret_file_path = DataStorage::new().get_path(secret_name).unwrap_or_else(|_| PathBuf::from(secret_name));
        Self::at(secret_file_path)
    }

    /// Token store entry for a Jira user.
    pub fn for_user(user: &str) -> Self {
        Self::new(&Self::file_name(user))
    }

    pub fn at(secret_file_path: impl Into<PathBuf>) -> Self {
        Self {
            secret_file_path: secret_file_path.into(),
            key: APP_METADATA_TOKEN_KEY.to_vec(),
            iv: APP_METADATA_TOKEN_IV.to_vec(),
        }
    }

    pub fn file_name(user: &str) -> String {
        let safe: String = user.chars().map(|c| if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' { c } else { '_' }).collect();
        format!("{}{}", TOKEN_FILE_PREFIX, safe)
    }

    pub fn path(&self) -> &Path {
        &self.secret_file_path
    }

    pub fn exists(&self) -> bool {
        self.secret_file_path.exists()
    }

    /// Stored value, if there is a readable one.
    pub fn get(&self) -> Option<String> {
        if !self.exists() {
            return None;
        }
        match self.decrypt() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!("Ignoring unreadable secret at {}: {}", self.secret_file_path.display(), e);
                None
            }
        }
    }

    pub fn store(&self, value: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let ciphertext = cipher.encrypt_vec(value.as_bytes());
        let encoded = BASE64_STANDARD.encode(&ciphertext);

        if let Some(parent) = self.secret_file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = File::create(&self.secret_file_path)?;
        file.write_all(encoded.as_bytes())?;
        restrict_permissions(&self.secret_file_path)?;

        Ok(())
    }

    /// Removes the stored secret. Returns `false` if there was none.
    pub fn delete(&self) -> Result<bool> {
        if !self.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.secret_file_path)?;
        Ok(true)
    }

    fn decrypt(&self) -> Result<String> {
        let mut file = File::open(&self.secret_file_path)?;
        let mut encoded = String::new();
        file.read_to_string(&mut encoded)?;
        let ciphertext = BASE64_STANDARD.decode(encoded.trim())?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let decrypted = cipher.decrypt_vec(&ciphertext)?;

        Ok(String::from_utf8(decrypted)?)
    }
}

/// Reads a line from the terminal without echoing it.
pub fn prompt_hidden(prompt: &str) -> Result<String> {
    let value = Password::with_theme(&ColorfulTheme::default()).with_prompt(prompt).interact()?;
    Ok(value)
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
