//! Candidate sites handed to the extraction engines by a front-end.

use serde::Serialize;

use crate::core::data::SourceLocation;
use crate::core::markers::MarkerKind;

/// Declaration flavours the documentation front-end distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclarationKind {
    /// Class or object type.
    Type,
    Property,
    Method,
    /// Never a site kind; a method documented with a signal topic.
    Signal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteKind {
    /// A call to a translation marker.
    Call { marker: MarkerKind },
    /// A declaration that may carry documentation.
    Declaration {
        kind: DeclarationKind,
        /// End offset of the structure preceding the declaration. Doc comments
        /// must start after it.
        preceding_end: Option<usize>,
    },
}

/// One construct discovered by a syntax-tree traversal.
///
/// Raw arguments are sliced straight from source; quotes and escapes are
/// still in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSite {
    pub location: SourceLocation,
    pub kind: SiteKind,
    /// Called marker name as written, or the declared name.
    pub name_hint: String,
    pub raw_arguments: Vec<String>,
    /// Context derived from the enclosing scope.
    pub structural_context: String,
}

impl CandidateSite {
    pub fn call(
        location: SourceLocation,
        marker: MarkerKind,
        name_hint: impl Into<String>,
        raw_arguments: Vec<String>,
    ) -> Self {
        Self {
            location,
            kind: SiteKind::Call { marker },
            name_hint: name_hint.into(),
            raw_arguments,
            structural_context: String::new(),
        }
    }

    pub fn declaration(
        location: SourceLocation,
        kind: DeclarationKind,
        name: impl Into<String>,
        preceding_end: Option<usize>,
    ) -> Self {
        Self {
            location,
            kind: SiteKind::Declaration {
                kind,
                preceding_end,
            },
            name_hint: name.into(),
            raw_arguments: Vec::new(),
            structural_context: String::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.structural_context = context.into();
        self
    }

    pub fn argument(&self, slot: Option<usize>) -> Option<&str> {
        slot.and_then(|i| self.raw_arguments.get(i))
            .map(String::as_str)
    }

    pub fn declaration_kind(&self) -> Option<DeclarationKind> {
        match self.kind {
            SiteKind::Declaration { kind, .. } => Some(kind),
            SiteKind::Call { .. } => None,
        }
    }
}
