//! Space- and comma-separated token lists

/// Split on runs of whitespace. Empty input gives an empty list.
pub fn parse_space_separated(value: &str) -> Vec<String> {
    value
        .split(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C'))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split on commas, trimming each token.
///
/// Empty tokens between commas are kept (`"a,,b"` has three tokens), a
/// trailing empty token is not (`"a,"` has one).
pub fn parse_comma_separated(value: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut parts = value.split(',').peekable();

    while let Some(part) = parts.next() {
        let token = part.trim();
        let last = parts.peek().is_none();
        if !token.is_empty() || !last {
            tokens.push(token.to_string());
        }
    }

    tokens
}

/// Split on commas first, then split the rejoined result on whitespace, so
/// both delimiters can be mixed in one list.
pub fn parse_comma_or_space_separated(value: &str) -> Vec<String> {
    parse_space_separated(&parse_comma_separated(value).join(" "))
}
