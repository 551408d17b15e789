//! JavaScript/TypeScript front-end.
//!
//! - `js`: parses a file with swc and collects its comment stream
//! - `sites`: finds marker calls and documentable declarations in the AST

pub mod js;
pub mod sites;

pub use js::{ParsedJs, parse_js_source};
pub use sites::{FileSites, SiteCollector};
