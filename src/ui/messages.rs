use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

static COLOR: AtomicBool = AtomicBool::new(true);

/// Turn ANSI styling on or off. `NO_COLOR` in the environment always wins.
pub fn set_color(enabled: bool) {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    COLOR.store(enabled && !no_color, Ordering::Relaxed);
}

pub fn color_enabled() -> bool {
    COLOR.load(Ordering::Relaxed)
}

fn styled(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    if color_enabled() {
        format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
    } else {
        format!("{} {}", icon, msg)
    }
}

/// Styled warning line, for callers that write to their own sink
pub fn warning_line<T: fmt::Display>(msg: T) -> String {
    styled(FG_YELLOW, ICON_WARN, msg)
}

pub fn success_line<T: fmt::Display>(msg: T) -> String {
    styled(FG_GREEN, ICON_OK, msg)
}

pub fn error_line<T: fmt::Display>(msg: T) -> String {
    styled(FG_RED, ICON_ERR, msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", styled(FG_BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", success_line(msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", warning_line(msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", error_line(msg));
}

/// Info line on stderr, keeping stdout free for machine readable output
pub fn info_err<T: fmt::Display>(msg: T) {
    eprintln!("{}", styled(FG_BLUE, ICON_INFO, msg));
}

/// Optional: formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    if color_enabled() {
        println!("{}{}====================== {}\n{}", FG_BLUE, BOLD, msg, RESET);
    } else {
        println!("====================== {}\n", msg);
    }
}
