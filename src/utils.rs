//! Utility functions for string processing.

/// Fold a string for case-insensitive comparison.
///
/// Only lowercases. Whitespace and punctuation are kept as typed so that the
/// query is matched as a literal substring, metacharacters included:
/// - "Windows" → "windows"
/// - "MCP (Servers)" → "mcp (servers)"
/// - "  gemini  " → "  gemini  "
pub fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Length of a query as the user perceives it, in Unicode scalar values.
///
/// Byte length would make "é" a two-character query and open the widget early.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
