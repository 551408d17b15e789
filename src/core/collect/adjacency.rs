//! Accept/reject rules applied while walking backwards from a site.

use crate::core::data::{Comment, SourceLocation, SourceText};
use crate::core::markers::MarkerTable;

/// Characters that end a statement, close a scope or start a directive.
/// Any of them between a comment and a site means the comment documents
/// something else.
pub const STRUCTURE_TERMINATORS: &[char] = &[';', '}', '#', '@'];

/// Why the backward walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    CrossFile,
    InterveningStructure,
    InterveningMarkerCall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Attribute the comment and keep walking.
    Accept,
    /// Leave the comment out but keep walking.
    Skip,
    /// Leave the comment out and end the walk.
    Stop(StopReason),
}

pub struct AdjacencyValidator<'a> {
    source: &'a SourceText,
    markers: &'a MarkerTable,
}

impl<'a> AdjacencyValidator<'a> {
    pub fn new(source: &'a SourceText, markers: &'a MarkerTable) -> Self {
        Self { source, markers }
    }

    /// Judge `comment` as a candidate for the site at `target`.
    ///
    /// `boundary` is where the unscanned text ends: the start of the comment
    /// accepted just before, or the site itself on the first step.
    pub fn check(&self, comment: &Comment, target: &SourceLocation, boundary: usize) -> Verdict {
        if comment.file_path != target.file_path {
            return Verdict::Stop(StopReason::CrossFile);
        }

        // Comments trailing an earlier argument on the site's own line:
        // `void f(int a /*: x */, QString s = tr("y"))`
        if self.source.line_of(comment.last_byte()) == self.source.line_of(target.offset) {
            return Verdict::Skip;
        }

        let unscanned = self.source.slice(comment.end..boundary).unwrap_or_default();
        if unscanned.contains(STRUCTURE_TERMINATORS) {
            return Verdict::Stop(StopReason::InterveningStructure);
        }
        if self.markers.contains_call(unscanned) {
            return Verdict::Stop(StopReason::InterveningMarkerCall);
        }

        Verdict::Accept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::CommentKind;

    fn check(code: &str, comment_at: usize, comment: &str, target_at: usize) -> Verdict {
        let source = SourceText::new("a.js", code);
        let markers = MarkerTable::default();
        let validator = AdjacencyValidator::new(&source, &markers);
        let comment = Comment::new("a.js", comment_at, CommentKind::Line, comment);
        validator.check(&comment, &source.location(target_at), target_at)
    }

    #[test]
    fn test_accepts_adjacent_comment() {
        let code = "//: hi\nqsTr(\"a\")";
        assert_eq!(check(code, 0, "//: hi", 7), Verdict::Accept);
    }

    #[test]
    fn test_skips_same_line_comment() {
        let code = "/*: x */ qsTr(\"a\")";
        let source = SourceText::new("a.js", code);
        let markers = MarkerTable::default();
        let validator = AdjacencyValidator::new(&source, &markers);
        let comment = Comment::new("a.js", 0, CommentKind::Block, "/*: x */");
        assert_eq!(
            validator.check(&comment, &source.location(9), 9),
            Verdict::Skip
        );
    }

    #[test]
    fn test_stops_on_terminators() {
        for sep in [";", "}", "#define X", "@Annotation"] {
            let code = format!("//: hi\n{sep}\nqsTr(\"a\")");
            let target = code.find("qsTr").unwrap();
            assert_eq!(
                check(&code, 0, "//: hi", target),
                Verdict::Stop(StopReason::InterveningStructure),
                "separator {sep:?}"
            );
        }
    }

    #[test]
    fn test_stops_on_marker_call() {
        let code = "//: hi\nx = qsTr(\"b\"),\nqsTr(\"a\")";
        let target = code.rfind("qsTr").unwrap();
        assert_eq!(
            check(code, 0, "//: hi", target),
            Verdict::Stop(StopReason::InterveningMarkerCall)
        );
    }

    #[test]
    fn test_stops_on_foreign_file() {
        let source = SourceText::new("a.js", "\n\nqsTr(\"a\")");
        let markers = MarkerTable::default();
        let validator = AdjacencyValidator::new(&source, &markers);
        let comment = Comment::new("header.h", 0, CommentKind::Line, "//: x");
        assert_eq!(
            validator.check(&comment, &source.location(2), 2),
            Verdict::Stop(StopReason::CrossFile)
        );
    }
}
