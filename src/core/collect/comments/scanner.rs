//! Lexer-level comment collection for C-family source text.
//!
//! Finds `//` and `/* */` comments while stepping over string and character
//! literals, so a `"//"` inside a literal is not taken for a comment. The
//! CLI never calls it: parsed JavaScript uses [`super::collector`]. It serves
//! library callers holding raw text with hand-built sites, and unit tests.

use crate::core::data::{Comment, CommentKind, SourceText};

pub fn scan_comments(source: &SourceText) -> Vec<Comment> {
    let text = source.text();
    let bytes = text.as_bytes();
    let mut comments = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' | b'`' => {
                i = skip_literal(bytes, i);
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                let end = text[i..].find('\n').map_or(text.len(), |n| i + n);
                let raw = text[i..end].trim_end_matches('\r');
                comments.push(Comment::new(source.path(), i, CommentKind::Line, raw));
                i = end;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let end = text[i + 2..].find("*/").map_or(text.len(), |n| i + 2 + n + 2);
                comments.push(Comment::new(
                    source.path(),
                    i,
                    CommentKind::Block,
                    &text[i..end],
                ));
                i = end;
            }
            _ => i += 1,
        }
    }

    comments
}

/// Offset just past the literal opened at `start`. Unterminated literals
/// run to the end of their line (or of the text for template literals).
fn skip_literal(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' if quote != b'`' => return i,
            c if c == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}
