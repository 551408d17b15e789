//! Source positions and raw source buffers.

use std::cmp::Ordering;
use std::ops::Range;
use std::path::Path;

use serde::Serialize;

/// Pure position information in a source file.
///
/// Two locations compare by `(file_path, offset)`. `line` and `col` are the
/// 1-based display coordinates of `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SourceLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    pub offset: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize, offset: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
            offset,
        }
    }
}

impl PartialOrd for SourceLocation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SourceLocation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.file_path
            .cmp(&other.file_path)
            .then(self.offset.cmp(&other.offset))
            .then(self.line.cmp(&other.line))
            .then(self.col.cmp(&other.col))
    }
}

/// The raw text of one source file with a precomputed line index.
///
/// Gives the engine random access to the text lying between a comment and
/// the construct it may document.
#[derive(Debug, Clone)]
pub struct SourceText {
    path: String,
    text: String,
    line_starts: Vec<usize>,
}

impl SourceText {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            path: path.into(),
            text,
            line_starts,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// 1-based line containing the byte at `offset`.
    pub fn line_of(&self, offset: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= offset)
    }

    /// 1-based column of `offset` within its line, counted in bytes.
    pub fn col_of(&self, offset: usize) -> usize {
        let line = self.line_of(offset);
        offset - self.line_starts[line - 1] + 1
    }

    pub fn location(&self, offset: usize) -> SourceLocation {
        SourceLocation::new(
            self.path.clone(),
            self.line_of(offset),
            self.col_of(offset),
            offset,
        )
    }

    /// Text in `range`, or `None` when the range is reversed, out of bounds
    /// or splits a character.
    pub fn slice(&self, range: Range<usize>) -> Option<&str> {
        self.text.get(range)
    }

    /// File name without directories and extension.
    pub fn stem(&self) -> &str {
        Path::new(&self.path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }
}
