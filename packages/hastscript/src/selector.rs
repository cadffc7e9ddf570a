//! Simple selector parsing (`tag#id.class.class`)

use logos::Logos;

/// Tokens of a simple selector. Characters outside these tokens are
/// skipped.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
enum SelectorToken<'src> {
    #[regex(r"\.[a-zA-Z0-9\x7F-\u{10FFFF}_:-]+", |lex| &lex.slice()[1..])]
    Class(&'src str),

    #[regex(r"#[a-zA-Z0-9\x7F-\u{10FFFF}_:-]+", |lex| &lex.slice()[1..])]
    Id(&'src str),

    #[regex(r"[a-zA-Z0-9\x7F-\u{10FFFF}_:-]+", |lex| lex.slice())]
    Name(&'src str),
}

/// Parsed selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Lower-cased tag name (the default when the selector has none)
    pub tag_name: String,
    pub id: Option<String>,
    pub class_names: Vec<String>,
}

/// Parse `selector` into a tag name, id and class list.
///
/// The last tag name and the last id win; classes accumulate in order. An
/// empty selector gives `default_tag_name`.
pub fn parse_selector(selector: &str, default_tag_name: &str) -> Selector {
    let mut tag_name = None;
    let mut id = None;
    let mut class_names = Vec::new();

    for token in SelectorToken::lexer(selector).flatten() {
        match token {
            SelectorToken::Name(name) => tag_name = Some(name),
            SelectorToken::Id(value) => id = Some(value.to_string()),
            SelectorToken::Class(value) => class_names.push(value.to_string()),
        }
    }

    Selector {
        tag_name: tag_name.unwrap_or(default_tag_name).to_lowercase(),
        id,
        class_names,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selector_uses_default() {
        let selector = parse_selector("", "div");
        assert_eq!(selector.tag_name, "div");
        assert_eq!(selector.id, None);
        assert!(selector.class_names.is_empty());
    }

    #[test]
    fn test_full_selector() {
        let selector = parse_selector("a#top.alpha.bravo", "div");
        assert_eq!(selector.tag_name, "a");
        assert_eq!(selector.id.as_deref(), Some("top"));
        assert_eq!(selector.class_names, vec!["alpha", "bravo"]);
    }

    #[test]
    fn test_last_id_wins() {
        assert_eq!(parse_selector("#a#b", "div").id.as_deref(), Some("b"));
    }

    #[test]
    fn test_only_classes_keep_default_tag() {
        for input in [".x", ".x.y", "#i.x", ".x#i"] {
            assert_eq!(parse_selector(input, "g").tag_name, "g", "{}", input);
        }
    }

    #[test]
    fn test_tag_name_is_lower_cased() {
        assert_eq!(parse_selector("DIV", "div").tag_name, "div");
        assert_eq!(parse_selector("feFuncA", "g").tag_name, "fefunca");
    }

    #[test]
    fn test_malformed_fragments_are_ignored() {
        let selector = parse_selector("p .a ##b [x]", "div");
        assert_eq!(selector.tag_name, "x");
        assert_eq!(selector.id.as_deref(), Some("b"));
        assert_eq!(selector.class_names, vec!["a"]);
    }

    #[test]
    fn test_non_ascii_names() {
        let selector = parse_selector("über.naïve", "div");
        assert_eq!(selector.tag_name, "über");
        assert_eq!(selector.class_names, vec!["naïve"]);
    }
}
