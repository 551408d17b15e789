use serde::Serialize;

/// Semantic role of a tagged comment line, selected by the character that
/// immediately follows the comment opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TagMarker {
    /// `//:` translator comment, accumulated into `extra_comment`.
    ExtraComment,
    /// `//=` message id metadata; the last one wins.
    IdMetadata,
    /// `//~ key value` free-form metadata.
    Magic,
    /// `//% "text"` source text for id-based messages.
    SourceText,
}

impl TagMarker {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ':' => Some(TagMarker::ExtraComment),
            '=' => Some(TagMarker::IdMetadata),
            '~' => Some(TagMarker::Magic),
            '%' => Some(TagMarker::SourceText),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            TagMarker::ExtraComment => ':',
            TagMarker::IdMetadata => '=',
            TagMarker::Magic => '~',
            TagMarker::SourceText => '%',
        }
    }
}

/// One completed contribution of a tagged comment.
///
/// A line without a recognised marker carries `marker: None` and is ignored
/// when folded into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLine {
    pub marker: Option<TagMarker>,
    pub text: String,
}

impl TagLine {
    pub fn new(marker: TagMarker, text: impl Into<String>) -> Self {
        Self {
            marker: Some(marker),
            text: text.into(),
        }
    }
}
