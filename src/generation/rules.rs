//! Validation rules for names and parent paths

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::{Result, ScaffoldError};
use crate::core::utils::to_upper_camel_case;

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex is valid"));

/// Strict and reserved keywords of the 2024 edition
const RUST_KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Whether `segment` can name a module, a directory and a file at once
pub fn is_identifier(segment: &str) -> bool {
    IDENTIFIER_RE.is_match(segment) && !is_keyword(segment)
}

pub fn is_keyword(segment: &str) -> bool {
    RUST_KEYWORDS.contains(&segment)
}

/// Whether `name` also yields a type name prefix such as `ListUsers`
fn has_type_name(name: &str) -> bool {
    !to_upper_camel_case(name).is_empty()
}

/// Validates the list of target names
pub fn validate_names(names: &[String]) -> Result<()> {
    if names.is_empty() {
        return Err(ScaffoldError::MissingNames);
    }

    if let Some(bad) = names
        .iter()
        .find(|name| !is_identifier(name) || !has_type_name(name))
    {
        return Err(ScaffoldError::InvalidName(bad.clone()));
    }

    Ok(())
}

/// Splits and validates a slash separated parent path
pub fn parse_parent_segments(path: &str) -> Result<Vec<String>> {
    let invalid = |reason: &str| ScaffoldError::InvalidParent {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    if path.starts_with('/') {
        return Err(invalid("must be relative"));
    }

    let mut segments = Vec::new();
    for segment in path.split('/') {
        if segment.is_empty() {
            return Err(invalid("contains an empty segment"));
        }
        if is_keyword(segment) {
            return Err(invalid(&format!("segment '{segment}' is a Rust keyword")));
        }
        if !is_identifier(segment) {
            return Err(invalid(&format!(
                "segment '{segment}' must match [A-Za-z_][A-Za-z0-9_]*"
            )));
        }
        segments.push(segment.to_string());
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("widget"));
        assert!(is_identifier("list_users"));
        assert!(is_identifier("ListUsers"));
        assert!(is_identifier("_hidden"));
        assert!(is_identifier("v2"));

        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("my-cmd"));
        assert!(!is_identifier("my cmd"));
        assert!(!is_identifier(".."));
        assert!(!is_identifier("a/b"));
        assert!(!is_identifier("type"));
        assert!(!is_identifier("mod"));
        assert!(!is_identifier("self"));
        assert!(!is_identifier("Self"));
        assert!(is_identifier("types"));
        assert!(is_identifier("Type"));
    }

    #[test]
    fn test_validate_names() {
        assert!(validate_names(&names(&["alpha", "beta"])).is_ok());
        assert!(matches!(
            validate_names(&[]),
            Err(ScaffoldError::MissingNames)
        ));
        match validate_names(&names(&["alpha", "../escape"])) {
            Err(ScaffoldError::InvalidName(name)) => assert_eq!(name, "../escape"),
            other => panic!("expected InvalidName, got {other:?}"),
        }
    }

    #[test]
    fn test_names_need_a_keyword_free_type_name() {
        for bad in ["type", "mod", "_", "__"] {
            match validate_names(&names(&[bad])) {
                Err(ScaffoldError::InvalidName(name)) => assert_eq!(name, bad),
                other => panic!("expected InvalidName for {bad}, got {other:?}"),
            }
        }
        assert!(validate_names(&names(&["_hidden", "userID"])).is_ok());
    }

    #[test]
    fn test_parse_parent_segments() {
        assert_eq!(parse_parent_segments("foo").unwrap(), vec!["foo"]);
        assert_eq!(parse_parent_segments("foo/bar").unwrap(), vec!["foo", "bar"]);

        assert!(parse_parent_segments("/foo").is_err());
        assert!(parse_parent_segments("foo//bar").is_err());
        assert!(parse_parent_segments("foo/").is_err());
        assert!(parse_parent_segments("foo/../bar").is_err());
        assert!(parse_parent_segments("foo/b-ar").is_err());

        let err = parse_parent_segments("foo/mod").unwrap_err();
        assert!(err.to_string().contains("keyword"));
    }

    #[test]
    fn test_parent_error_names_the_path() {
        let err = parse_parent_segments("foo/..").unwrap_err();
        assert!(err.to_string().contains("foo/.."));
        assert!(err.to_string().contains("'..'"));
    }
}
