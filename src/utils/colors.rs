/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Completion color:
/// 100 → green
/// 0 → grey
/// otherwise yellow
pub fn color_for_percent(percent: u8) -> &'static str {
    match percent {
        100 => GREEN,
        0 => GREY,
        _ => YELLOW,
    }
}

pub fn colorize_flag(flagged: bool) -> String {
    if flagged {
        format!("{RED}FLAGGED{RESET}")
    } else {
        format!("{GREY}ok{RESET}")
    }
}

/// Grey out empty time values.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "00h 00m" || value.trim() == "00h 00m 00s" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_running(value: &str, running: bool) -> String {
    if running {
        format!("{GREEN}{value}{RESET}")
    } else {
        value.to_string()
    }
}
