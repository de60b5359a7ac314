use anyhow::Result;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub const DB_FILE_NAME: &str = "cache.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (and creates) `cache.db` in `dir`.
    pub fn open(dir: &Path) -> Result<Db> {
        fs::create_dir_all(dir)?;
        let conn: Connection = Connection::open(dir.join(DB_FILE_NAME))?;

        Ok(Db { conn })
    }
}
