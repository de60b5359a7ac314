use dotenv::dotenv;
use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use toml::Value;

struct AppMetadata {
    file: std::fs::File,
}

impl AppMetadata {
    pub fn new() -> io::Result<Self> {
        let out_dir = env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
        let dest_path = Path::new(&out_dir).join("app_metadata.rs");
        let file = File::create(&dest_path)?;
        Ok(Self { file })
    }

    pub fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        write!(
            self.file,
            "#[allow(unused)]\npub const APP_METADATA_{}: &str = \"{}\";\n",
            &key.to_uppercase(),
            &value
        )
    }

    pub fn write_bytes(&mut self, key: &str, value: &[u8]) -> io::Result<()> {
        write!(
            self.file,
            "#[allow(unused)]\npub const APP_METADATA_{}: &[u8; {}] = &[",
            &key.to_uppercase(),
            value.len()
        )?;

        for (i, byte) in value.iter().enumerate() {
            if i > 0 {
                write!(self.file, ", ")?;
            }
            write!(self.file, "{}", byte)?;
        }

        writeln!(self.file, "];")
    }
}

/// Pads or truncates `seed` to exactly `len` bytes.
fn fit(mut seed: String, len: usize) -> Vec<u8> {
    seed.truncate(len);
    while seed.len() < len {
        seed.push('!');
    }
    seed.into_bytes()
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=LT_TOKEN_KEY");
    println!("cargo:rerun-if-env-changed=LT_TOKEN_IV");

    // Load .env file if it exists
    let _ = dotenv();

    let package_name = env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "log-time-to-tempo".to_string());
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());

    let cargo_toml = fs::read_to_string("Cargo.toml")?;
    let cargo_toml: Value = toml::from_str(&cargo_toml).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let mut app_metadata = AppMetadata::new()?;
    app_metadata.write("NAME", &package_name)?;
    app_metadata.write("VERSION", &version)?;

    if let Some(metadata) = cargo_toml.get("package").and_then(|pkg| pkg.get("metadata")).and_then(|meta| meta.as_table()) {
        for (key, value) in metadata {
            if let Some(value) = value.as_str() {
                app_metadata.write(key, value)?;
            }
        }
    }

    // Keys for the local token store
    let (token_key, token_iv) = match (env::var("LT_TOKEN_KEY"), env::var("LT_TOKEN_IV")) {
        (Ok(key), Ok(iv)) => {
            if key.len() != 32 {
                panic!("LT_TOKEN_KEY must be exactly 32 bytes long, got {} bytes", key.len());
            }
            if iv.len() != 16 {
                panic!("LT_TOKEN_IV must be exactly 16 bytes long, got {} bytes", iv.len());
            }
            (key.into_bytes(), iv.into_bytes())
        }
        _ => {
            println!("cargo:warning=LT_TOKEN_KEY or LT_TOKEN_IV not found in environment, using package defaults.");
            (
                fit(format!("{}_token_store_key_32b", package_name), 32),
                fit(format!("{}_iv_16b", package_name), 16),
            )
        }
    };

    app_metadata.write_bytes("TOKEN_KEY", &token_key)?;
    app_metadata.write_bytes("TOKEN_IV", &token_iv)?;

    Ok(())
}
