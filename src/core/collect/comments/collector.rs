//! Comment collector for parsed JavaScript/TypeScript files.
//!
//! swc hands comments out attached to tokens, split into leading and trailing
//! maps. The collector flattens both maps into one list of [`Comment`]s with
//! file-relative byte offsets, the shape the comment registry is built from.
//!
//! swc stores comment text without delimiters, so the raw text is rebuilt
//! from the comment kind:
//!
//! ```text
//! CommentKind::Line,  " note"      ->  "// note"
//! CommentKind::Block, ": a\n b "   ->  "/*: a\n b */"
//! ```

use swc_common::BytePos;
use swc_common::comments::CommentKind as SwcCommentKind;

use crate::core::data::{Comment, CommentKind, SourceText};
use crate::core::parsers::js::ExtractedComments;

/// Collects all comments of one parsed file.
pub struct CommentCollector;

impl CommentCollector {
    /// Flatten swc's comment maps into file-ordered comments.
    ///
    /// # Arguments
    /// * `extracted` - Comments extracted while parsing
    /// * `source` - The file's text, used for the file path
    /// * `start_pos` - Position of the file's first byte in its source map
    pub fn collect(
        extracted: &ExtractedComments,
        source: &SourceText,
        start_pos: BytePos,
    ) -> Vec<Comment> {
        let (leading, trailing) = extracted.borrow_all();
        let mut comments: Vec<Comment> = leading
            .values()
            .chain(trailing.values())
            .flatten()
            .map(|cmt| {
                let start = (cmt.span.lo.0 - start_pos.0) as usize;
                let (kind, raw) = match cmt.kind {
                    SwcCommentKind::Line => (CommentKind::Line, format!("//{}", cmt.text)),
                    SwcCommentKind::Block => (CommentKind::Block, format!("/*{}*/", cmt.text)),
                };
                Comment::new(source.path(), start, kind, raw)
            })
            .collect();

        // A comment can be reachable from both maps; keep one copy.
        comments.sort_by_key(|c| c.start);
        comments.dedup_by_key(|c| c.start);
        comments
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::parsers::js::parse_js_source;

    fn collect(code: &str) -> Vec<(usize, String)> {
        let parsed = parse_js_source(code.to_string(), "test.js").unwrap();
        parsed
            .comments
            .into_iter()
            .map(|c| (c.start, c.text))
            .collect()
    }

    #[test]
    fn test_collects_leading_and_trailing_comments() {
        let code = "//: before\nqsTr(\"a\"); /*: after */\n";
        assert_eq!(
            collect(code),
            vec![
                (0, "//: before".to_string()),
                (22, "/*: after */".to_string()),
            ]
        );
    }

    #[test]
    fn test_offsets_match_source_text() {
        let code = "let x = 1;\n/*! doc\n * more */\nfunction f() {}\n";
        let parsed = parse_js_source(code.to_string(), "test.js").unwrap();
        let comment = &parsed.comments[0];
        assert_eq!(&code[comment.range()], comment.text);
    }

    #[test]
    fn test_no_comments() {
        assert!(collect("const x = 1;").is_empty());
    }
}
