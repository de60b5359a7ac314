//! Message output macros.
//!
//! The macros print a [`Message`](super::Message) (or anything `Display`) with
//! a status prefix. In debug mode the text goes through `tracing` so it is
//! interleaved with the debug log; otherwise it is printed directly.
//!
//! Debug mode is on when `LT_DEBUG` or `RUST_LOG` is set, or when the CLI was
//! invoked with `-vv` (see [`set_debug_mode`]).
//!
//! ```rust,no_run
//! use log_time_to_tempo::libs::messages::Message;
//! use log_time_to_tempo::{msg_error, msg_info, msg_warning};
//!
//! msg_info!(Message::CacheReset);
//! msg_warning!(Message::NoConfigFound);
//! msg_error!(Message::NoRecentWorklogs);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Forces debug mode on or off. Only the first decision sticks, so this must
/// run before the first message is printed.
pub fn set_debug_mode(enabled: bool) {
    let from_env = std::env::var("LT_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok();
    let _ = DEBUG_MODE.set(enabled || from_env);
}

#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("LT_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message without prefix.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints an error to stderr (or `tracing::error!` in debug mode).
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("{}", $crate::libs::style::red(&format!("❌ {}", $msg)));
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            eprintln!("{}", $crate::libs::style::yellow(&format!("⚠️ {}", $msg)));
        }
    };
}

/// Informational output; only shown with `-v` or in debug mode.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        tracing::info!("{}", $msg);
    };
}

#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        tracing::debug!("🔍 {}", $msg);
    };
}

/// Builds an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
