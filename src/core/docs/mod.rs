//! Documentation front-end.
//!
//! Declarations are documented by the nearest unused `/*!` or `/**` block
//! comment before them. The comment's commands are applied to the
//! declaration and may declare further properties on their own.

pub mod body;
pub mod engine;
pub mod finder;
pub mod record;

pub use body::{DocBody, MetaCommand, Topic, TopicKind, TopicLanguage, parse_doc_body};
pub use engine::{DocError, DocExtractor, DocOutcome};
pub use finder::preceding_doc_comment;
pub use record::{DocRecord, DocStatus};
