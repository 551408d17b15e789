//! Locates the comment block documenting a source location.

use tracing::debug;

use crate::core::collect::adjacency::{AdjacencyValidator, Verdict};
use crate::core::collect::registry::CommentRegistry;
use crate::core::data::{Comment, SourceLocation, SourceText};
use crate::core::markers::MarkerTable;

/// Registry indices attributed to one site, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribution {
    /// Contiguous run of comments preceding the site.
    pub preceding: Vec<usize>,
    /// Comment following the site on its own line, only taken when there is
    /// no preceding run.
    pub trailing: Option<usize>,
}

impl Attribution {
    pub fn is_empty(&self) -> bool {
        self.preceding.is_empty() && self.trailing.is_none()
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.preceding.iter().copied().chain(self.trailing)
    }
}

/// Nearest-preceding-comment search over one file's registry.
pub struct CommentFinder<'a> {
    registry: &'a mut CommentRegistry,
    source: &'a SourceText,
    validator: AdjacencyValidator<'a>,
}

impl<'a> CommentFinder<'a> {
    pub fn new(
        registry: &'a mut CommentRegistry,
        source: &'a SourceText,
        markers: &'a MarkerTable,
    ) -> Self {
        Self {
            registry,
            source,
            validator: AdjacencyValidator::new(source, markers),
        }
    }

    pub fn comment(&self, index: usize) -> Option<&Comment> {
        self.registry.get(index)
    }

    /// Walk backwards from `target`, collecting the run of comments that
    /// documents it. Consumed comments end the walk.
    pub fn preceding(&self, target: &SourceLocation) -> Vec<usize> {
        let first_after = self.registry.first_at_or_after(target.offset);
        if first_after == 0 {
            return Vec::new();
        }

        let mut accepted = Vec::new();
        let mut boundary = target.offset;
        for index in (0..first_after).rev() {
            if self.registry.is_consumed(index) {
                debug!(index, "comment already attributed, stop");
                break;
            }
            let Some(comment) = self.registry.get(index) else {
                break;
            };
            match self.validator.check(comment, target, boundary) {
                Verdict::Accept => {
                    accepted.push(index);
                    boundary = comment.start;
                }
                Verdict::Skip => {
                    debug!(
                        line = target.line,
                        comment = %comment.text,
                        "comment ends on the site's line, skipped"
                    );
                }
                Verdict::Stop(reason) => {
                    debug!(?reason, comment = %comment.text, "comment rejected, stop");
                    break;
                }
            }
        }
        accepted.reverse();
        accepted
    }

    /// The comment right after `target`, if it starts on the same line and
    /// no other site (starting at `next_site`) lies in between.
    pub fn trailing(&self, target: &SourceLocation, next_site: Option<usize>) -> Option<usize> {
        let index = self.registry.first_at_or_after(target.offset);
        let comment = self.registry.get(index)?;
        let attributable = !self.registry.is_consumed(index)
            && comment.file_path == target.file_path
            && self.source.line_of(comment.start) == self.source.line_of(target.offset)
            && next_site.is_none_or(|next| comment.start < next);
        attributable.then_some(index)
    }

    /// Find the comments for `target` and mark them consumed.
    ///
    /// A site gets a single contiguous run: the preceding block if there is
    /// one, otherwise the trailing comment on its line.
    pub fn attribute(&mut self, target: &SourceLocation, next_site: Option<usize>) -> Attribution {
        let preceding = self.preceding(target);
        let trailing = if preceding.is_empty() {
            self.trailing(target, next_site)
        } else {
            None
        };
        let attribution = Attribution {
            preceding,
            trailing,
        };
        for index in attribution.indices() {
            self.registry.mark_consumed(index);
        }
        attribution
    }

    pub fn texts(&self, attribution: &Attribution) -> Vec<&str> {
        attribution
            .indices()
            .filter_map(|index| self.registry.get(index))
            .map(|c| c.text.as_str())
            .collect()
    }
}
