use crate::libs::messages::macros::set_debug_mode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CRATE_TARGET: &str = "log_time_to_tempo";

/// Filter directive for a `-v` count: warnings by default, info with `-v`,
/// debug with `-vv`.
pub fn filter_directive(verbosity: u8) -> String {
    match verbosity {
        0 => "warn".to_string(),
        1 => format!("warn,{}=info", CRATE_TARGET),
        _ => format!("info,{}=debug", CRATE_TARGET),
    }
}

/// Logs to stderr. `RUST_LOG` takes precedence over the verbosity.
pub fn init_cli_logger(verbosity: u8) {
    set_debug_mode(verbosity > 1);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));

    // At info level only the message is shown, like regular output.
    let result = if verbosity > 1 {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_level(false)
                    .without_time(),
            )
            .try_init()
    };
    if let Err(e) = result {
        tracing::debug!("Logger already initialised: {}", e);
    }
}
