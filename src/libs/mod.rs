//! Building blocks of the command line application.
//!
//! - **Storage**: application directory, configuration, aliases, token store
//! - **Time**: parsing and formatting of durations, times and dates
//! - **Domain**: worklog planning, statistics, budgets, suggestions
//! - **Output**: messages, styling, tables, sparklines, shell completion

pub mod aliases;
pub mod budget;
pub mod catalog;
pub mod completions;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod http;
pub mod logging;
pub mod messages;
pub mod secret;
pub mod sparkline;
pub mod stats;
pub mod style;
pub mod suggest;
pub mod time;
pub mod view;
pub mod worklog;
