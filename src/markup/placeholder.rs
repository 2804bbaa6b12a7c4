//! Substitution of `<!-- placeholder: VALUE -->` regions.

use super::patterns::PLACEHOLDER;
use regex::Captures;

/// Replace every placeholder region with the value named in its opening marker.
///
/// The enclosed body is discarded. The value is inserted as-is, so a `$` in
/// the value is never read as a capture reference.
pub fn resolve(text: &str) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| caps[1].to_string())
        .into_owned()
}
