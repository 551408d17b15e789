use std::ops::Range;

use serde::Serialize;

/// Syntax a comment was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CommentKind {
    /// `// comment`
    Line,
    /// `/* comment */`
    Block,
}

impl CommentKind {
    pub fn is_block(&self) -> bool {
        matches!(self, CommentKind::Block)
    }
}

/// One comment as collected from a file, delimiters included.
///
/// `start..end` is the byte range of `text` in the file named by `file_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub file_path: String,
    pub start: usize,
    pub end: usize,
    pub kind: CommentKind,
    pub text: String,
}

impl Comment {
    pub fn new(
        file_path: impl Into<String>,
        start: usize,
        kind: CommentKind,
        text: impl Into<String>,
    ) -> Self {
        let text = text.into();
        Self {
            file_path: file_path.into(),
            start,
            end: start + text.len(),
            kind,
            text,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Offset of the last byte of the comment.
    pub fn last_byte(&self) -> usize {
        self.end.saturating_sub(1).max(self.start)
    }

    /// Comment content without its delimiters.
    pub fn body(&self) -> &str {
        match self.kind {
            CommentKind::Line => self.text.strip_prefix("//").unwrap_or(&self.text),
            CommentKind::Block => {
                let inner = self.text.strip_prefix("/*").unwrap_or(&self.text);
                inner.strip_suffix("*/").unwrap_or(inner)
            }
        }
    }
}
