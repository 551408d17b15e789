//! Per-file, position-ordered comment arena.

use crate::core::data::Comment;

/// All comments of one file, ordered by start offset, with a parallel
/// "consumed" bitset indexed the same way.
///
/// The comment list is fixed at construction. Only the consumed flags change
/// while the file's candidate sites are processed; once a comment has been
/// attributed to a site it is never attributed again.
#[derive(Debug, Default)]
pub struct CommentRegistry {
    comments: Vec<Comment>,
    consumed: Vec<bool>,
}

impl CommentRegistry {
    /// Build the registry. Comments sharing a start offset keep their input
    /// order (the sort is stable); nothing is deduplicated.
    pub fn new(mut comments: Vec<Comment>) -> Self {
        comments.sort_by_key(|c| c.start);
        let consumed = vec![false; comments.len()];
        Self { comments, consumed }
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Comment> {
        self.comments.get(index)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Comment> + ExactSizeIterator {
        self.comments.iter()
    }

    /// Index of the first comment whose start is not before `offset`
    /// (`len()` when every comment starts earlier).
    pub fn first_at_or_after(&self, offset: usize) -> usize {
        self.comments.partition_point(|c| c.start < offset)
    }

    pub fn is_consumed(&self, index: usize) -> bool {
        self.consumed.get(index).copied().unwrap_or(false)
    }

    pub fn mark_consumed(&mut self, index: usize) {
        if let Some(flag) = self.consumed.get_mut(index) {
            *flag = true;
        }
    }
}
