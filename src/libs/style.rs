// ANSI styling for terminal output.

use std::io::IsTerminal;
use std::sync::OnceLock;

macro_rules! csi {
    ($suffix:literal) => {
        concat!("\x1B[", $suffix)
    };
}

pub const STYLE_RESET: &str = csi!("0m");
pub const STYLE_BOLD: &str = csi!("1m");
pub const STYLE_DIM: &str = csi!("2m");
pub const STYLE_ITALIC: &str = csi!("3m");
pub const FG_RED: &str = csi!("31m");
pub const FG_YELLOW: &str = csi!("33m");
pub const FG_CYAN: &str = csi!("36m");

static COLORS: OnceLock<bool> = OnceLock::new();

/// Styling is applied only on a terminal and when `NO_COLOR` is unset.
pub fn colors_enabled() -> bool {
    *COLORS.get_or_init(|| std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal())
}

fn paint(code: &str, text: &str) -> String {
    if colors_enabled() {
        format!("{}{}{}", code, text, STYLE_RESET)
    } else {
        text.to_string()
    }
}

pub fn bold(text: &str) -> String {
    paint(STYLE_BOLD, text)
}

pub fn dim(text: &str) -> String {
    paint(STYLE_DIM, text)
}

pub fn italic(text: &str) -> String {
    paint(STYLE_ITALIC, text)
}

pub fn red(text: &str) -> String {
    paint(FG_RED, text)
}

pub fn yellow(text: &str) -> String {
    paint(FG_YELLOW, text)
}

pub fn cyan(text: &str) -> String {
    paint(FG_CYAN, text)
}

/// Clickable hyperlink (OSC 8) showing the target itself.
pub fn link(target: &str) -> String {
    if colors_enabled() {
        format!("\x1B]8;;{0}\x1B\\{0}\x1B]8;;\x1B\\", target)
    } else {
        target.to_string()
    }
}
