//! Removal of `<!-- ignore -->` regions.

use super::patterns::IGNORE;

/// Delete every ignore region from `text`.
///
/// Each opening marker pairs with the nearest following closing marker, so
/// two adjacent regions are removed independently and the text between them
/// survives. Unbalanced markers are left in place.
pub fn strip(text: &str) -> String {
    IGNORE.replace_all(text, "").into_owned()
}
