//! Positional placeholder substitution.
//!
//! Templates carry a single placeholder token, [`PLACEHOLDER`]. Values are
//! consumed in document order: the first occurrence receives the first value,
//! the second occurrence the second value, and so on. Resolution is a single
//! left-to-right pass over the template, so text introduced by a value is
//! never rescanned for placeholders.

use crate::domain::error::DomainError;

/// The placeholder marker used by every Messenger template.
pub const PLACEHOLDER: &str = "$0";

/// Number of placeholder occurrences in `text`.
pub fn count_placeholders(text: &str) -> usize {
    text.matches(PLACEHOLDER).count()
}

/// Replace the first `values.len()` placeholders of `text` with `values`, in
/// order. Placeholders beyond the supplied values are left as-is.
///
/// Fails with [`DomainError::PlaceholderExhausted`] when the template has
/// fewer placeholders than values.
pub fn fill_placeholders<S: AsRef<str>>(
    template: &str,
    text: &str,
    values: &[S],
) -> Result<String, DomainError> {
    let found = count_placeholders(text);
    if found < values.len() {
        return Err(DomainError::PlaceholderExhausted {
            template: template.to_string(),
            expected: values.len(),
            found,
        });
    }

    let extra: usize = values.iter().map(|v| v.as_ref().len()).sum();
    let mut out = String::with_capacity(text.len() + extra);
    let mut rest = text;

    for value in values {
        // Presence guaranteed by the count above.
        let Some(at) = rest.find(PLACEHOLDER) else {
            break;
        };
        out.push_str(&rest[..at]);
        out.push_str(value.as_ref());
        rest = &rest[at + PLACEHOLDER.len()..];
    }
    out.push_str(rest);

    Ok(out)
}
