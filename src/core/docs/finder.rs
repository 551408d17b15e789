//! Doc comment lookup for declarations.

use crate::core::collect::CommentRegistry;

/// Index of the doc comment documenting a declaration at `offset`.
///
/// Comments are examined from the end of the file backwards. The search
/// stops at the first comment starting at or before `preceding_end` (the end
/// of the previous structure) or at an already used comment. The first
/// `/*!` or `/**` block lying entirely before `offset` wins; line comments
/// are snippet markers and never match.
pub fn preceding_doc_comment(
    registry: &CommentRegistry,
    offset: usize,
    preceding_end: Option<usize>,
) -> Option<usize> {
    for (index, comment) in registry.iter().enumerate().rev() {
        if preceding_end.is_some_and(|end| comment.start <= end) {
            break;
        }
        if registry.is_consumed(index) {
            break;
        }
        if comment.end <= offset
            && comment.kind.is_block()
            && comment.body().starts_with(['!', '*'])
        {
            return Some(index);
        }
    }
    None
}
