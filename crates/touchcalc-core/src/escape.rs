//! Escaping of text payloads in expanded records
//!
//! Three characters cannot appear raw inside a `cell:` text field: the field
//! separator `:`, the line separator `\n`, and the escape character `\`
//! itself. They are written as `\c`, `\n` and `\b` respectively.

/// Escape `\`, newline and `:` for use in a `cell:` text field
///
/// Backslashes go first so the backslashes introduced by the other two
/// substitutions are not escaped again.
pub fn escape(text: &str) -> String {
    text.replace('\\', "\\b")
        .replace('\n', "\\n")
        .replace(':', "\\c")
}

/// Undo [`escape`]
///
/// Substitutions run in the reverse order of [`escape`].
pub fn unescape(text: &str) -> String {
    text.replace("\\c", ":")
        .replace("\\n", "\n")
        .replace("\\b", "\\")
}
