use crate::error::MatrixError;
use std::path::{Path, PathBuf};

/// Matrix markdown split into lines, read once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixDocument {
    path: PathBuf,
    lines: Vec<String>,
}

impl MatrixDocument {
    pub fn load(path: &Path) -> Result<Self, MatrixError> {
        if !path.is_file() {
            return Err(MatrixError::MissingDocument(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path).map_err(|e| MatrixError::Io(e.to_string()))?;
        Ok(Self::from_text(path, &raw))
    }

    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: split_lines(text),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Breaks on `\n`, `\r\n`, a bare `\r` and the remaining Unicode line
/// boundaries (`\x0b`, `\x0c`, `\x1c`..`\x1e`, `\u{85}`, `\u{2028}`, `\u{2029}`).
/// A trailing terminator does not produce an empty last line.
fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(text[start..idx].to_owned());
        let mut end = idx + ch.len_utf8();
        if ch == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
            chars.next();
            end += 1;
        }
        start = end;
    }
    if start < text.len() {
        lines.push(text[start..].to_owned());
    }
    lines
}

fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
