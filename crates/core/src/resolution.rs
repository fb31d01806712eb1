//! Anchor resolution.
//!
//! Turns a stored template plus an ordered list of arguments into the final
//! string. The number of arguments must match the number of `$` characters in
//! the template; any mismatch is rejected before substitution starts.
//!
//! Substitution works on placeholder spans found in a single left-to-right
//! scan, so `$10` is always read as index ten and never as `$1` followed by a
//! literal `0`. Text coming from arguments is never scanned again.

use std::ops::Range;

use log::debug;

use crate::error::{Error, Result};
use crate::store::AnchorStore;

const PLACEHOLDER_SIGIL: char = '$';

/// A `$` found in a template together with the digits that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Byte range of the `$` and its digits within the template.
    pub span: Range<usize>,
    /// 1-based argument index, `None` when the digits are missing, start
    /// with `0` or do not fit in a `usize`.
    pub index: Option<usize>,
}

/// Number of arguments a template requires: the raw count of `$` characters.
#[must_use]
pub fn arity(template: &str) -> usize {
    template.matches(PLACEHOLDER_SIGIL).count()
}

fn parse_index(digits: &str) -> Option<usize> {
    if digits.is_empty() || digits.starts_with('0') {
        return None;
    }

    digits.parse::<usize>().ok()
}

/// Finds every `$` in the template, in order of appearance.
///
/// One entry is produced per `$`, so `placeholders(t).len() == arity(t)`.
#[must_use]
pub fn placeholders(template: &str) -> Vec<Placeholder> {
    let mut found = Vec::new();
    let mut position = 0;

    while let Some(offset) = template[position..].find(PLACEHOLDER_SIGIL) {
        let start = position + offset;
        let digits_start = start + PLACEHOLDER_SIGIL.len_utf8();
        let digits_end = template[digits_start..]
            .find(|c: char| !c.is_ascii_digit())
            .map_or(template.len(), |end| digits_start + end);

        found.push(Placeholder {
            span: start..digits_end,
            index: parse_index(&template[digits_start..digits_end]),
        });

        position = digits_end;
    }

    found
}

/// Resolves `template` with `args`.
///
/// # Errors
///
/// Returns [`Error::Arity`] when the number of `$` characters in the template
/// differs from the number of arguments. Nothing is substituted in that case.
///
/// Placeholders whose index is out of range are left untouched.
///
/// # Examples
///
/// ```
/// use anchor_core::resolution::resolve;
///
/// let url = resolve("gh", "https://github.com/$1/$2", &["rust-lang", "rust"])?;
/// assert_eq!(url, "https://github.com/rust-lang/rust");
/// # Ok::<(), anchor_core::error::Error>(())
/// ```
pub fn resolve<S: AsRef<str>>(key: &str, template: &str, args: &[S]) -> Result<String> {
    let expected = arity(template);

    if expected != args.len() {
        return Err(Error::arity(key, template, expected, args.len()));
    }

    let mut resolved = String::with_capacity(template.len());
    let mut cursor = 0;

    for placeholder in placeholders(template) {
        let Some(argument) = placeholder
            .index
            .and_then(|index| args.get(index - 1))
        else {
            continue;
        };

        resolved.push_str(&template[cursor..placeholder.span.start]);
        resolved.push_str(argument.as_ref());
        cursor = placeholder.span.end;
    }

    resolved.push_str(&template[cursor..]);

    debug!("Resolved `{key}` with {} argument(s): {resolved:?}", args.len());

    Ok(resolved)
}

/// Reads the anchor stored under `key` and resolves its value with `args`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if there is no such anchor, or
/// [`Error::Arity`] if the argument count is wrong.
pub fn resolve_anchor<T: AnchorStore + ?Sized, S: AsRef<str>>(
    store: &T,
    key: &str,
    args: &[S],
) -> Result<String> {
    let anchor = store.read(key)?;
    resolve(&anchor.key, &anchor.value, args)
}
