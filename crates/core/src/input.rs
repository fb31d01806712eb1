//! Classification of raw command-line tokens.
//!
//! A first token containing `=` is an assignment (`key='value'`), anything
//! else is a lookup key followed by positional arguments.

use crate::error::{Error, Result};

const ASSIGNMENT_SEPARATOR: char = '=';
const VALUE_QUOTE: char = '\'';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Create an anchor.
    Assignment { key: String, value: String },
    /// Resolve an anchor with the given positional arguments.
    Lookup { key: String, args: Vec<String> },
}

/// Splits `key='value'` on the first `=`.
///
/// The value has surrounding single quotes removed first, then surrounding
/// whitespace.
///
/// # Errors
///
/// Returns [`Error::Format`] when there is no `=` or the key is empty.
///
/// # Examples
///
/// ```
/// use anchor_core::input::parse_assignment;
///
/// let (key, value) = parse_assignment("name='hello world'")?;
/// assert_eq!(key, "name");
/// assert_eq!(value, "hello world");
/// # Ok::<(), anchor_core::error::Error>(())
/// ```
pub fn parse_assignment(token: &str) -> Result<(String, String)> {
    let Some((key, raw_value)) = token.split_once(ASSIGNMENT_SEPARATOR) else {
        return Err(Error::Format(token.to_string()));
    };

    if key.is_empty() {
        return Err(Error::Format(token.to_string()));
    }

    let value = raw_value.trim_matches(VALUE_QUOTE).trim();

    Ok((key.to_string(), value.to_string()))
}

/// Classifies the tokens of a root invocation.
///
/// # Errors
///
/// Returns [`Error::Format`] when there are no tokens, when the assignment is
/// malformed, or when an assignment is followed by more tokens.
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Input> {
    let Some((first, rest)) = tokens.split_first() else {
        return Err(Error::Format(String::new()));
    };
    let first = first.as_ref();

    if first.contains(ASSIGNMENT_SEPARATOR) {
        if !rest.is_empty() {
            let joined: Vec<&str> = tokens.iter().map(|token| token.as_ref()).collect();
            return Err(Error::Format(joined.join(" ")));
        }

        let (key, value) = parse_assignment(first)?;
        return Ok(Input::Assignment { key, value });
    }

    Ok(Input::Lookup {
        key: first.to_string(),
        args: rest.iter().map(|arg| arg.as_ref().to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_assignment() {
        let input = parse(&["name='hello world'"]).unwrap();
        assert_eq!(
            input,
            Input::Assignment {
                key: "name".to_string(),
                value: "hello world".to_string()
            }
        );
    }

    #[test]
    fn test_plain_assignment() {
        let input = parse(&["name=value"]).unwrap();
        assert_eq!(
            input,
            Input::Assignment {
                key: "name".to_string(),
                value: "value".to_string()
            }
        );
    }

    #[test]
    fn test_lookup_without_arguments() {
        let input = parse(&["lookup"]).unwrap();
        assert_eq!(
            input,
            Input::Lookup {
                key: "lookup".to_string(),
                args: vec![]
            }
        );
    }

    #[test]
    fn test_lookup_keeps_arguments_unchanged() {
        let input = parse(&["gh", "rust-lang", " spaced ", "a=b"]).unwrap();
        assert_eq!(
            input,
            Input::Lookup {
                key: "gh".to_string(),
                args: vec![
                    "rust-lang".to_string(),
                    " spaced ".to_string(),
                    "a=b".to_string()
                ]
            }
        );
    }

    #[test]
    fn test_split_on_first_equals_only() {
        let (key, value) = parse_assignment("query=a=b&c=d").unwrap();
        assert_eq!(key, "query");
        assert_eq!(value, "a=b&c=d");
    }

    #[test]
    fn test_quotes_are_stripped_before_whitespace() {
        // Whitespace inside the quotes is trimmed after the quotes go
        let (_, value) = parse_assignment("k=' padded '").unwrap();
        assert_eq!(value, "padded");

        // Whitespace outside the quotes shields them from being stripped
        let (_, value) = parse_assignment("k= 'kept' ").unwrap();
        assert_eq!(value, "'kept'");
    }

    #[test]
    fn test_empty_value_is_allowed() {
        let (key, value) = parse_assignment("empty=''").unwrap();
        assert_eq!(key, "empty");
        assert_eq!(value, "");
    }

    #[test]
    fn test_empty_key_is_format_error() {
        let error = parse(&["='value'"]).unwrap_err();
        assert!(matches!(error, Error::Format(token) if token == "='value'"));
    }

    #[test]
    fn test_assignment_without_equals_is_format_error() {
        let error = parse_assignment("no-separator").unwrap_err();
        assert!(matches!(error, Error::Format(_)));
    }

    #[test]
    fn test_assignment_with_extra_tokens_is_format_error() {
        let error = parse(&["name=hello", "world"]).unwrap_err();
        assert!(matches!(error, Error::Format(token) if token == "name=hello world"));
    }

    #[test]
    fn test_no_tokens_is_format_error() {
        let tokens: [&str; 0] = [];
        assert!(matches!(parse(&tokens), Err(Error::Format(_))));
    }
}
