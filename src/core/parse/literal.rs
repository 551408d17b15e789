//! Literal normalization.
//!
//! Two paths recover text from quoted source:
//!
//! - [`trim_quotes`]: translator comment payloads (`//% "text"`), where each
//!   quote can independently be mandatory or optional.
//! - [`literal_from_source`]: call arguments sliced straight from source,
//!   which may carry an encoding prefix (`u8`, `L`, `u`, `U`) or be a raw
//!   string literal (`R"delim(...)delim"`).

/// Which quotes must be present for [`trim_quotes`] to return text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteRequirement {
    None,
    Left,
    Right,
    LeftAndRight,
}

impl QuoteRequirement {
    fn left(self) -> bool {
        matches!(self, QuoteRequirement::Left | QuoteRequirement::LeftAndRight)
    }

    fn right(self) -> bool {
        matches!(self, QuoteRequirement::Right | QuoteRequirement::LeftAndRight)
    }
}

/// Longest delimiter a raw string literal may declare.
const RAW_DELIMITER_MAX: usize = 16;

/// Strip surrounding double quotes.
///
/// Returns an empty string when a mandatory quote is missing. Optional quotes
/// are removed when present, so `"unbalanced` still yields `unbalanced`
/// under [`QuoteRequirement::Left`].
pub fn trim_quotes(text: &str, requirement: QuoteRequirement) -> String {
    let mut s = text.trim();
    match s.strip_prefix('"') {
        Some(rest) => s = rest,
        None if requirement.left() => return String::new(),
        None => {}
    }
    match s.strip_suffix('"') {
        Some(rest) => s = rest,
        None if requirement.right() => return String::new(),
        None => {}
    }
    s.to_string()
}

/// True if `text` contains a string delimiter of any supported dialect.
pub fn has_quote(text: &str) -> bool {
    text.contains(['"', '\'', '`'])
}

/// Recover the characters of a string literal taken from source.
///
/// Escapes are kept as written. Input that holds no recognizable literal is
/// returned trimmed but otherwise unchanged.
pub fn literal_from_source(token: &str) -> String {
    let trimmed = token.trim();
    if let Some(inner) = js_quoted(trimmed) {
        return inner.to_string();
    }
    let Some(quote) = trimmed.find('"') else {
        return trimmed.to_string();
    };
    if quote == 0 {
        return trim_quotes(trimmed, QuoteRequirement::LeftAndRight);
    }

    let extracted = if trimmed[..quote].ends_with('R') {
        raw_string_body(&trimmed[quote + 1..])
    } else if has_encoding_prefix(&trimmed[..quote]) {
        escaped_string_body(&trimmed[quote + 1..])
    } else {
        None
    };
    extracted.unwrap_or(trimmed).to_string()
}

/// Inner text of a `'single'` or `` `template` `` quoted literal.
fn js_quoted(text: &str) -> Option<&str> {
    ['\'', '`'].into_iter().find_map(|q| {
        text.strip_prefix(q).and_then(|rest| rest.strip_suffix(q))
    })
}

/// `before_quote` ends with `u8`, `L`, `u` or `U` standing as its own word.
fn has_encoding_prefix(before_quote: &str) -> bool {
    let word_start = |prefix: &str| {
        before_quote
            .strip_suffix(prefix)
            .is_some_and(|head| !head.ends_with(|c: char| c.is_alphanumeric() || c == '_'))
    };
    ["u8", "L", "u", "U"].into_iter().any(word_start)
}

/// Body of `delim(...)delim"`, the part of a raw literal after its quote.
fn raw_string_body(after_quote: &str) -> Option<&str> {
    let open = after_quote.find('(')?;
    let delimiter = &after_quote[..open];
    if delimiter.len() > RAW_DELIMITER_MAX || delimiter.contains([')', '\\', ' ']) {
        return None;
    }
    let rest = &after_quote[open + 1..];
    let closer = format!("){delimiter}\"");
    let end = rest.rfind(&closer)?;
    Some(&rest[..end])
}

/// Characters up to the first unescaped `"`.
fn escaped_string_body(after_quote: &str) -> Option<&str> {
    let mut chars = after_quote.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '"' => return Some(&after_quote[..i]),
            _ => {}
        }
    }
    None
}
