//! Re-insertion of extracted templates as `<script type='text/html'>` tags.

use super::extract::TemplateRegion;
use super::patterns::{INSERTION_MARKER, TEMPLATE};
use regex::NoExpand;

/// Separator placed between composed tags at the insertion marker.
pub const TAG_SEPARATOR: &str = "\n\t\t\t";

/// Build the script tag for one region.
///
/// Returns an empty string when `region` does not re-match the template
/// pattern.
pub fn compose_tag(region: &TemplateRegion) -> String {
    match TEMPLATE.captures(&region.raw) {
        Some(caps) => format!(
            "<script type='text/html' id='{}'>{}</script>",
            &caps[1], &caps[2]
        ),
        None => String::new(),
    }
}

/// Compose every region and join the tags with [`TAG_SEPARATOR`].
pub fn compose_tags(regions: &[TemplateRegion]) -> String {
    regions
        .iter()
        .map(compose_tag)
        .collect::<Vec<_>>()
        .join(TAG_SEPARATOR)
}

/// Splice the composed tags into the first `<!-- templates -->` marker of
/// `stripped_text`.
///
/// Without a marker the tags are dropped and `stripped_text` is returned
/// unchanged.
pub fn compose(stripped_text: &str, regions: &[TemplateRegion]) -> String {
    let tags = compose_tags(regions);
    INSERTION_MARKER
        .replace(stripped_text, NoExpand(tags.as_str()))
        .into_owned()
}

/// Whether `text` contains an insertion marker.
pub fn has_insertion_marker(text: &str) -> bool {
    INSERTION_MARKER.is_match(text)
}
