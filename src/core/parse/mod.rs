//! Text-level parsers: translator tags, string literals, documented
//! signatures and property arguments.

pub mod literal;
pub mod property;
pub mod signature;
pub mod tags;

pub use literal::{QuoteRequirement, has_quote, literal_from_source, trim_quotes};
pub use property::{PropertyArg, PropertyArgError, split_property_arg};
pub use signature::{Parameter, Signature, SignatureError, parse_signature};
pub use tags::parse_comment;
