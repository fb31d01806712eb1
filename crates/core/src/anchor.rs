use std::fmt::{Display, Formatter};

/// A stored key/value pair.
///
/// `id` is assigned by the store on creation and carries no meaning outside
/// of it. `value` is a template that may contain `$1`, `$2`, ... placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Anchor {
    pub id: i64,
    pub key: String,
    pub value: String,
}

impl Anchor {
    /// Builds an anchor that has not been stored yet.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: 0,
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Display for Anchor {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}={:?}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_identity() {
        let anchor = Anchor::new("gh", "https://github.com/$1");
        assert_eq!(anchor.id, 0);
        assert_eq!(anchor.key, "gh");
        assert_eq!(anchor.value, "https://github.com/$1");
    }

    #[test]
    fn test_display_quotes_value() {
        let anchor = Anchor::new("docs", "https://docs.rs");
        assert_eq!(format!("{anchor}"), "docs=\"https://docs.rs\"");
    }
}
