//! snake_case to camelCase key conversion
//!
//! Applied only to object keys, never to string values.

use std::borrow::Cow;

/// Convert a snake_case key to camelCase
///
/// Each underscore followed by an ASCII lowercase letter is removed and that
/// letter upper-cased; everything else passes through unchanged. Keys without
/// underscores are returned borrowed.
///
/// # Examples
///
/// ```
/// use jsonveil::anonymization::casing::to_camel_case;
///
/// assert_eq!(to_camel_case("user_id"), "userId");
/// assert_eq!(to_camel_case("simple"), "simple");
/// ```
pub fn to_camel_case(key: &str) -> Cow<'_, str> {
    if !key.contains('_') {
        return Cow::Borrowed(key);
    }

    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            match chars.peek() {
                Some(next) if next.is_ascii_lowercase() => {
                    let next = chars.next().unwrap_or(c);
                    out.push(next.to_ascii_uppercase());
                }
                _ => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}
