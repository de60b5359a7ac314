//! SQLite storage for the project and issue cache.
//!
//! Looking up every project and issue on Jira is slow, so `init` stores them
//! in `cache/cache.db` inside the application directory. The cache backs
//! `projects`, `issues '*'` and issue suggestions; it is refreshed by `init`
//! and removed by `reset`.
//!
//! ```rust,no_run
//! use log_time_to_tempo::db::cache::Cache;
//! use log_time_to_tempo::libs::data_storage::DataStorage;
//!
//! let cache = Cache::open(&DataStorage::new().cache_dir())?;
//! if cache.is_warm()? {
//!     for project in cache.projects()? {
//!         println!("{}: {}", project.key, project.name);
//!     }
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection to the cache database.
pub mod db;

/// Projects, issues and refresh timestamps.
pub mod cache;
