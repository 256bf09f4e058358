//! Console colouring for encoded text.
//!
//! The encoder always produces the console view. The persisted view is that
//! same text passed through [`strip`], never a second rendering, so the two
//! cannot drift apart.
//!
//! Colouring goes through [`colored`], which honours `NO_COLOR`,
//! `CLICOLOR_FORCE` and terminal detection. When colouring is off both views
//! are identical.

use colored::Colorize;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static ANSI_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("ANSI escape pattern is valid"));

/// Removes every ANSI SGR escape sequence from `text`.
///
/// # Examples
///
/// ```rust
/// use numeric_fixtures::ansi;
///
/// assert_eq!(ansi::strip("\x1b[3;36mtitle\x1b[0m = 1"), "title = 1");
/// ```
pub fn strip(text: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(text, "")
}

/// Number of characters `text` occupies once escapes are removed.
pub fn display_width(text: &str) -> usize {
    strip(text).chars().count()
}

pub fn key(text: &str) -> String {
    text.cyan().italic().to_string()
}

pub fn boolean(text: &str) -> String {
    text.blue().to_string()
}

pub fn number(text: &str) -> String {
    text.bright_green().to_string()
}

pub fn datetime(text: &str) -> String {
    number(text)
}

pub fn string(text: &str) -> String {
    text.yellow().to_string()
}

pub fn comment(text: &str) -> String {
    text.dimmed().to_string()
}

/// `[name]`, as written above a table.
pub fn header(name: &str) -> String {
    let open = "[".magenta().bold();
    let close = "]".magenta().bold();
    format!("{open}{}{close}", name.green().italic())
}

/// `[[name]]`, as written above an entry of an array of tables.
pub fn array_header(name: &str) -> String {
    let open = "[".yellow().bold();
    let close = "]".yellow().bold();
    format!("{open}{}{close}", header(name))
}
