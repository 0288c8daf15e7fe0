//! Common word-delimiter patterns for [`WalkerBuilder::word_delimiter`].
//!
//! [`WalkerBuilder::word_delimiter`]: crate::WalkerBuilder::word_delimiter

/// Carriage return or line feed.
pub const NEWLINE: &str = "[\r\n]";

/// Space or tab.
pub const WHITESPACE: &str = "[ \t]";

/// Space, tab, carriage return or line feed.
pub const NEWLINE_WHITESPACE: &str = "[ \r\n\t]";

/// Look up a preset by its lowercase name (`newline`, `whitespace`,
/// `newline-whitespace`).
pub fn preset(name: &str) -> Option<&'static str> {
    match name {
        "newline" => Some(NEWLINE),
        "whitespace" => Some(WHITESPACE),
        "newline-whitespace" => Some(NEWLINE_WHITESPACE),
        _ => None,
    }
}
