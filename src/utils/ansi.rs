//! ANSI escape handling for width computations.

use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;?]*[A-Za-z]").expect("static ANSI regex"));

/// Remove CSI escape sequences (colours, cursor and erase codes).
pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}
