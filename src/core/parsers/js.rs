use std::collections::HashMap;
use std::path::Path;

use anyhow::{Result, anyhow};
use swc_common::sync::Lrc;
use swc_common::{
    BytePos, FileName, Globals, SourceMap,
    comments::{Comment as SwcComment, SingleThreadedComments},
};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

use crate::core::collect::CommentCollector;
use crate::core::data::{Comment, SourceText};

/// Map of byte positions to comments.
pub type CommentMap = HashMap<BytePos, Vec<SwcComment>>;

/// Comments copied out of swc's `SingleThreadedComments` while parsing.
#[derive(Debug, Clone)]
pub struct ExtractedComments {
    pub leading: CommentMap,
    pub trailing: CommentMap,
}

impl ExtractedComments {
    /// Must be called before `SingleThreadedComments` is dropped.
    pub fn from_swc(comments: &SingleThreadedComments) -> Self {
        let (leading, trailing) = comments.borrow_all();
        Self {
            leading: leading.iter().map(|(k, v)| (*k, v.clone())).collect(),
            trailing: trailing.iter().map(|(k, v)| (*k, v.clone())).collect(),
        }
    }

    pub fn borrow_all(&self) -> (&CommentMap, &CommentMap) {
        (&self.leading, &self.trailing)
    }
}

/// A parsed JavaScript/TypeScript file.
pub struct ParsedJs {
    pub module: Module,
    pub source: SourceText,
    /// All comments, ordered by start offset.
    pub comments: Vec<Comment>,
    /// Position of the file's first byte in its source map.
    pub start_pos: BytePos,
}

/// Pick the swc syntax from the file extension. Anything that is not
/// TypeScript is parsed as JavaScript with JSX enabled.
fn syntax_for(file_path: &str) -> Syntax {
    let extension = Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    match extension {
        "ts" | "mts" | "cts" => Syntax::Typescript(TsSyntax {
            decorators: true,
            ..Default::default()
        }),
        "tsx" => Syntax::Typescript(TsSyntax {
            tsx: true,
            decorators: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            decorators: true,
            ..Default::default()
        }),
    }
}

/// Parse a source string into an AST and its comment stream.
pub fn parse_js_source(code: String, file_path: &str) -> Result<ParsedJs> {
    use swc_common::GLOBALS;

    let source = SourceText::new(file_path, code.clone());

    GLOBALS.set(&Globals::new(), || {
        let source_map: Lrc<SourceMap> = Default::default();
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(
            syntax_for(file_path),
            StringInput::from(&*source_file),
            Some(&comments),
        );

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;

        let extracted = ExtractedComments::from_swc(&comments);
        let comments = CommentCollector::collect(&extracted, &source, source_file.start_pos);

        Ok(ParsedJs {
            module,
            source,
            comments,
            start_pos: source_file.start_pos,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_each_dialect() {
        let cases = [
            ("a.js", "const el = <div>{qsTr(\"x\")}</div>;"),
            ("a.ts", "const n: number = 1;"),
            ("a.tsx", "const el = <b>{n as number}</b>;"),
            ("a.mjs", "export default function f() {}"),
        ];
        for (path, code) in cases {
            assert!(parse_js_source(code.to_string(), path).is_ok(), "{path}");
        }
    }

    #[test]
    fn test_parse_error() {
        let result = parse_js_source("function (".to_string(), "bad.js");
        assert!(result.is_err());
    }

    #[test]
    fn test_source_text_is_kept() {
        let parsed = parse_js_source("let a = 1; // one".to_string(), "a.js").unwrap();
        assert_eq!(parsed.source.text(), "let a = 1; // one");
        assert_eq!(parsed.source.path(), "a.js");
        assert_eq!(parsed.comments.len(), 1);
    }
}
