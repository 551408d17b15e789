//! Tagged-comment parser.
//!
//! Translator comments carry a one-character marker right after the comment
//! opener:
//!
//! ```text
//! //: extra comment for the translator
//! //= message-id-metadata
//! //~ key value
//! //% "source text used with ids"
//! /*: single line block */
//! /*: block that
//!     spans lines */
//! ```
//!
//! The parser is a two-mode state machine over the physical lines of one
//! comment. In single-line mode each line is matched against the line-style,
//! closed-block and open-block forms. An open block with a marker switches to
//! continuation mode, which accumulates trimmed lines until the closer.

use crate::core::data::{TagLine, TagMarker};
use crate::core::parse::literal::{QuoteRequirement, trim_quotes};

enum Mode {
    SingleLine,
    /// Inside an unterminated `/*` block.
    Continuation,
}

/// Line-oriented parser state for one comment.
struct TagParser {
    mode: Mode,
    marker: Option<TagMarker>,
    text: String,
    out: Vec<TagLine>,
}

/// Parse the raw text of one comment into tag contributions.
///
/// Only completed contributions with non-empty text are returned. A
/// contribution whose opener carried no usable marker is returned with
/// `marker: None`.
pub fn parse_comment(raw: &str) -> Vec<TagLine> {
    let mut parser = TagParser {
        mode: Mode::SingleLine,
        marker: None,
        text: String::new(),
        out: Vec::new(),
    };
    for line in raw.split('\n').filter(|l| !l.is_empty()) {
        parser.feed(line.trim());
    }
    parser.out
}

impl TagParser {
    fn feed(&mut self, line: &str) {
        let save = match self.mode {
            Mode::SingleLine => self.single_line(line),
            Mode::Continuation => self.continuation(line),
        };
        if save {
            self.out.push(TagLine {
                marker: self.marker.take(),
                text: std::mem::take(&mut self.text),
            });
        }
    }

    fn single_line(&mut self, line: &str) -> bool {
        if let Some(rest) = line.strip_prefix("//") {
            self.capture(rest)
        } else if line.starts_with("/*") && line.ends_with("*/") && line.len() >= 4 {
            let inner = &line[2..line.len() - 2];
            self.capture(inner)
        } else if let Some(rest) = line.strip_prefix("/*") {
            self.mode = Mode::Continuation;
            let Some(marker) = rest.chars().next().and_then(TagMarker::from_char) else {
                return false;
            };
            self.marker = Some(marker);
            // Bare `/*:` carries no text yet.
            if line.len() > 4 {
                self.capture(rest);
            }
            false
        } else {
            false
        }
    }

    fn continuation(&mut self, line: &str) -> bool {
        let mut line = line.to_string();
        if line.ends_with("*/") {
            self.mode = Mode::SingleLine;
            line = line.replace("*/", "").trim().to_string();
        }
        let source_text = self.marker == Some(TagMarker::SourceText);
        if source_text {
            line = trim_quotes(&line, QuoteRequirement::Left);
        }
        if !line.is_empty() && !self.text.is_empty() && !source_text {
            self.text.push(' ');
        }
        self.text.push_str(&line);
        matches!(self.mode, Mode::SingleLine) && !self.text.is_empty()
    }

    /// Match `<marker><whitespace><text>` after a comment opener.
    ///
    /// Clears the current marker and text first, so a failed match leaves
    /// nothing behind. Returns true when non-empty text was captured.
    fn capture(&mut self, after_opener: &str) -> bool {
        self.marker = None;
        self.text.clear();

        let mut chars = after_opener.chars();
        let Some(marker) = chars.next().and_then(TagMarker::from_char) else {
            return false;
        };
        let rest = chars.as_str();
        if !rest.starts_with(char::is_whitespace) || rest.trim().is_empty() {
            return false;
        }
        self.marker = Some(marker);
        let text = rest.trim();
        self.text = if marker == TagMarker::SourceText {
            trim_quotes(text, QuoteRequirement::Left)
        } else {
            text.to_string()
        };
        !self.text.is_empty()
    }
}
