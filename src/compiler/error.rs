//! Compile error type

use thiserror::Error;

/// A template that could not be compiled.
///
/// Carries the offending template name and its raw content so the rebuild
/// can log both.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("template '{name}' at {line}:{column}: {message}")]
pub struct CompileError {
    pub name: String,
    pub content: String,
    pub message: String,
    /// 1-based line, 0 when the error is not tied to a position
    pub line: usize,
    /// 1-based column in characters
    pub column: usize,
}

impl CompileError {
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        message: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            message: message.into(),
            line,
            column,
        }
    }

    /// Build an error located at a byte offset of `content`.
    pub(crate) fn at_offset(name: &str, content: &str, offset: usize, message: String) -> Self {
        let (line, column) = line_col(content, offset);
        Self::new(name, content, message, line, column)
    }
}

/// 1-based (line, column) of a byte offset.
pub(crate) fn line_col(content: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(content.len());
    let before = &content[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
