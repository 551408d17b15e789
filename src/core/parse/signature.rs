//! Signature mini-parser for documented methods and signals.
//!
//! Parses fragments such as `void foo(int a = (1,2), QString b)` or
//! `Item::rotate(real angle)` into a name, qualifiers, an optional return
//! type and an ordered parameter list. Only the grammar needed for these
//! fragments is supported:
//!
//! ```text
//! signature := [type] (ident "::")* ident "(" [param ("," param)*] ")"
//! param     := type [ident] ["[" ... "]"] ["=" default]
//! type      := ["const"] base ("::" base)* ("&" | "*" | "^" | "const")*
//! base      := modifier* [int | char | double] | ident ["<" ... ">"] | "..."
//! ```

use serde::Serialize;
use thiserror::Error;

/// One parameter of a parsed signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    /// Source text between `=` and the end of the parameter, verbatim.
    pub default_value: String,
}

impl Parameter {
    pub fn new(
        ty: impl Into<String>,
        name: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            default_value: default_value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    pub return_type: String,
    /// Scope names before the function name, outermost first.
    pub qualifiers: Vec<String>,
    pub name: String,
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("invalid return type in signature `{0}`")]
    ReturnType(String),
    #[error("missing function name in signature `{0}`")]
    MissingName(String),
    #[error("expected `(` in signature `{0}`")]
    MissingParameters(String),
    #[error("invalid parameter {index} in signature `{signature}`")]
    Parameter { signature: String, index: usize },
    #[error("unterminated parameter list in signature `{0}`")]
    Unterminated(String),
}

const MODIFIERS: &[&str] = &["signed", "unsigned", "short", "long"];
const MODIFIED_BASES: &[&str] = &["int", "char", "double"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Word,
    Number,
    /// `::`
    Scope,
    /// `...`
    Ellipsis,
    Punct(char),
    End,
}

#[derive(Debug, Clone, Copy)]
struct Token {
    kind: TokenKind,
    start: usize,
    end: usize,
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || !b.is_ascii()
}

fn tokenize(text: &str) -> Vec<Token> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        let start = i;
        let kind = if c.is_ascii_whitespace() {
            i += 1;
            continue;
        } else if is_word_byte(c) && !c.is_ascii_digit() {
            while i < bytes.len() && is_word_byte(bytes[i]) {
                i += 1;
            }
            TokenKind::Word
        } else if c.is_ascii_digit() {
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'.') {
                i += 1;
            }
            TokenKind::Number
        } else if text[i..].starts_with("::") {
            i += 2;
            TokenKind::Scope
        } else if text[i..].starts_with("...") {
            i += 3;
            TokenKind::Ellipsis
        } else {
            i += 1;
            TokenKind::Punct(c as char)
        };
        tokens.push(Token {
            kind,
            start,
            end: i,
        });
    }
    tokens.push(Token {
        kind: TokenKind::End,
        start: text.len(),
        end: text.len(),
    });
    tokens
}

/// Parse a documented signature.
pub fn parse_signature(signature: &str) -> Result<Signature, SignatureError> {
    SignatureParser::new(signature.trim()).parse()
}

struct SignatureParser<'a> {
    text: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

/// Type text under construction. Adjacent words are separated by a space,
/// punctuation is glued on.
#[derive(Default)]
struct TypeText(String);

impl TypeText {
    fn push(&mut self, lexeme: &str) {
        let word_end = self.0.ends_with(|c: char| c.is_alphanumeric() || c == '_');
        let word_start = lexeme.starts_with(|c: char| c.is_alphanumeric() || c == '_');
        if word_end && word_start {
            self.0.push(' ');
        }
        self.0.push_str(lexeme);
    }
}

impl<'a> SignatureParser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            tokens: tokenize(text),
            pos: 0,
        }
    }

    fn token(&self) -> Token {
        self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn lexeme(&self) -> &'a str {
        let text = self.text;
        let token = self.token();
        &text[token.start..token.end]
    }

    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn is(&self, kind: TokenKind) -> bool {
        self.token().kind == kind
    }

    fn is_word(&self, words: &[&str]) -> bool {
        self.is(TokenKind::Word) && words.contains(&self.lexeme())
    }

    /// Consume the current token if it has `kind`.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.is(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Append the current token to `ty` and move on.
    fn take_into(&mut self, ty: &mut TypeText) {
        ty.push(self.lexeme());
        self.advance();
    }

    fn parse(mut self) -> Result<Signature, SignatureError> {
        let mut signature = Signature::default();

        let first_blank = self.text.find(' ');
        let left_paren = self.text.find('(');
        if let (Some(blank), Some(paren)) = (first_blank, left_paren)
            && blank > 0
            && paren > blank + 1
        {
            let mut return_type = TypeText::default();
            if self.type_and_name(&mut return_type, false).is_none() {
                return Err(SignatureError::ReturnType(self.text.to_string()));
            }
            signature.return_type = return_type.0;
        }

        let mut names = Vec::new();
        while self.is(TokenKind::Word) {
            names.push(self.lexeme().to_string());
            self.advance();
            if !self.eat(TokenKind::Scope) {
                break;
            }
        }
        signature.name = match names.pop() {
            Some(name) if !self.is(TokenKind::Scope) => name,
            _ => return Err(SignatureError::MissingName(self.text.to_string())),
        };
        signature.qualifiers = names;

        if !self.eat(TokenKind::Punct('(')) {
            return Err(SignatureError::MissingParameters(self.text.to_string()));
        }
        if !self.is(TokenKind::Punct(')')) {
            loop {
                let parameter = self.parameter().ok_or_else(|| SignatureError::Parameter {
                    signature: self.text.to_string(),
                    index: signature.parameters.len(),
                })?;
                signature.parameters.push(parameter);
                if !self.eat(TokenKind::Punct(',')) {
                    break;
                }
            }
        }
        if !self.eat(TokenKind::Punct(')')) {
            return Err(SignatureError::Unterminated(self.text.to_string()));
        }
        Ok(signature)
    }

    /// Match a type and, when `want_name`, an optional variable name.
    ///
    /// Returns `None` when no type could be matched, otherwise the (possibly
    /// empty) name.
    fn type_and_name(&mut self, ty: &mut TypeText, want_name: bool) -> Option<String> {
        if self.is_word(&["const"]) {
            self.take_into(ty);
        }
        loop {
            let mut virgin = true;
            while self.is_word(MODIFIERS) {
                self.take_into(ty);
                virgin = false;
            }
            if virgin {
                if self.is(TokenKind::Word) && !self.is_word(&["const"]) {
                    self.take_into(ty);
                    if self.is(TokenKind::Punct('<')) {
                        self.template_arguments(ty);
                    }
                } else if self.is(TokenKind::Ellipsis) {
                    self.take_into(ty);
                } else {
                    return None;
                }
            } else if self.is_word(MODIFIED_BASES) {
                self.take_into(ty);
            }

            if self.is(TokenKind::Scope) {
                self.take_into(ty);
            } else {
                break;
            }
        }

        while matches!(
            self.token().kind,
            TokenKind::Punct('&') | TokenKind::Punct('*') | TokenKind::Punct('^')
        ) || self.is_word(&["const"])
        {
            self.take_into(ty);
        }

        let mut name = String::new();
        if want_name && self.is(TokenKind::Word) {
            name = self.lexeme().to_string();
            self.advance();
        }

        if self.is(TokenKind::Punct('[')) {
            let mut depth = 0usize;
            while !self.is(TokenKind::End) {
                match self.token().kind {
                    TokenKind::Punct('[') => depth += 1,
                    TokenKind::Punct(']') => depth = depth.saturating_sub(1),
                    _ => {}
                }
                self.take_into(ty);
                if depth == 0 && !self.is(TokenKind::Punct('[')) {
                    break;
                }
            }
        }
        Some(name)
    }

    /// Consume a balanced `<...>` group into `ty`.
    fn template_arguments(&mut self, ty: &mut TypeText) {
        let mut depth = 0usize;
        while !self.is(TokenKind::End) {
            match self.token().kind {
                TokenKind::Punct('<') => depth += 1,
                TokenKind::Punct('>') => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.take_into(ty);
            if depth == 0 {
                break;
            }
        }
    }

    fn parameter(&mut self) -> Option<Parameter> {
        let mut ty = TypeText::default();
        let mut name = self.type_and_name(&mut ty, true)?;
        let mut ty = ty.0;
        if name.is_empty() {
            name = std::mem::take(&mut ty);
        }

        let mut default_value = String::new();
        if self.eat(TokenKind::Punct('=')) {
            let start = self.token().start;
            let mut depth = 0usize;
            loop {
                match self.token().kind {
                    TokenKind::End => break,
                    TokenKind::Punct(',') if depth == 0 => break,
                    TokenKind::Punct(')') if depth == 0 => break,
                    TokenKind::Punct('(') => depth += 1,
                    TokenKind::Punct(')') => depth -= 1,
                    _ => {}
                }
                self.advance();
            }
            default_value = self.text[start..self.token().start].trim().to_string();
        }
        Some(Parameter::new(ty, name, default_value))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_nested_parentheses_in_default_value() {
        let sig = parse_signature("void foo(int a = (1,2), QString b)").unwrap();
        assert_eq!(sig.return_type, "void");
        assert_eq!(sig.name, "foo");
        assert_eq!(
            sig.parameters,
            vec![
                Parameter::new("int", "a", "(1,2)"),
                Parameter::new("QString", "b", ""),
            ]
        );
    }

    #[test]
    fn test_no_return_type_and_no_parameters() {
        let sig = parse_signature("clicked()").unwrap();
        assert_eq!(sig.return_type, "");
        assert_eq!(sig.name, "clicked");
        assert!(sig.parameters.is_empty());
    }

    #[test]
    fn test_qualified_name() {
        let sig = parse_signature("Item::Attached::rotate(real angle)").unwrap();
        assert_eq!(sig.qualifiers, vec!["Item".to_string(), "Attached".to_string()]);
        assert_eq!(sig.name, "rotate");
        assert_eq!(sig.parameters, vec![Parameter::new("real", "angle", "")]);
    }

    #[test]
    fn test_untyped_parameter_takes_name_from_type() {
        let sig = parse_signature("select(index, mode)").unwrap();
        assert_eq!(
            sig.parameters,
            vec![Parameter::new("", "index", ""), Parameter::new("", "mode", "")]
        );
    }

    #[test]
    fn test_compound_types() {
        let sig = parse_signature(
            "const QString &title(unsigned int n, const QList<int> *list, char buf[16])",
        )
        .unwrap();
        assert_eq!(sig.return_type, "const QString&");
        assert_eq!(
            sig.parameters,
            vec![
                Parameter::new("unsigned int", "n", ""),
                Parameter::new("const QList<int>*", "list", ""),
                Parameter::new("char[16]", "buf", ""),
            ]
        );
    }

    #[test]
    fn test_default_values_are_verbatim() {
        let sig =
            parse_signature("void move(point p = Qt.point(0, 0), bool animate = true)").unwrap();
        assert_eq!(sig.parameters[0].default_value, "Qt.point(0, 0)");
        assert_eq!(sig.parameters[1].default_value, "true");
    }

    #[test]
    fn test_failures() {
        assert_eq!(
            parse_signature("void foo"),
            Err(SignatureError::MissingParameters("void foo".to_string()))
        );
        assert_eq!(
            parse_signature("(int a)"),
            Err(SignatureError::MissingName("(int a)".to_string()))
        );
        assert_eq!(
            parse_signature("foo(int a"),
            Err(SignatureError::Unterminated("foo(int a".to_string()))
        );
        assert_eq!(
            parse_signature("foo(int a, )"),
            Err(SignatureError::Parameter {
                signature: "foo(int a, )".to_string(),
                index: 1,
            })
        );
    }
}
