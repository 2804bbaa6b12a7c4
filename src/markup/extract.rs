//! Extraction of `<!-- template:ID -->` regions from the main document flow.
//!
//! Extraction is two passes over the same compiled pattern: [`find_all`]
//! collects the raw regions, [`remove_all`] deletes them. Both passes see the
//! same input and the same pattern, so they agree on the match set.

use super::patterns::TEMPLATE;
use std::ops::Range;

/// One raw template region, delimiters included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRegion {
    /// The matched text, from `<!--` of the opening marker to `-->` of the closing one.
    pub raw: String,
    /// Byte range of `raw` in the text it was found in.
    pub span: Range<usize>,
}

impl TemplateRegion {
    /// The template id, recovered by re-matching the raw text.
    pub fn id(&self) -> Option<&str> {
        TEMPLATE
            .captures(&self.raw)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Result of template extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The input with every template region removed.
    pub stripped_text: String,
    /// Template regions in document order.
    pub regions: Vec<TemplateRegion>,
}

/// Collect every template region in document order.
pub fn find_all(text: &str) -> Vec<TemplateRegion> {
    TEMPLATE
        .find_iter(text)
        .map(|m| TemplateRegion {
            raw: m.as_str().to_string(),
            span: m.range(),
        })
        .collect()
}

/// Delete every template region.
pub fn remove_all(text: &str) -> String {
    TEMPLATE.replace_all(text, "").into_owned()
}

/// Split `text` into its template-free remainder and the ordered list of
/// template regions.
pub fn extract(text: &str) -> Extraction {
    let regions = find_all(text);
    if regions.is_empty() {
        return Extraction {
            stripped_text: text.to_string(),
            regions,
        };
    }

    Extraction {
        stripped_text: remove_all(text),
        regions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_region() {
        let html = "<ul></ul><!-- template:item --><li>x</li><!-- /template --><footer/>";
        let extraction = extract(html);

        assert_eq!(extraction.stripped_text, "<ul></ul><footer/>");
        assert_eq!(extraction.regions.len(), 1);
        assert_eq!(
            extraction.regions[0].raw,
            "<!-- template:item --><li>x</li><!-- /template -->"
        );
        assert_eq!(extraction.regions[0].span, 9..59);
        assert_eq!(extraction.regions[0].id(), Some("item"));
    }

    #[test]
    fn test_extract_preserves_document_order() {
        let html = "<!-- template:b -->2<!-- /template -->|<!-- template:a -->1<!-- /template -->";
        let extraction = extract(html);

        let ids: Vec<_> = extraction.regions.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![Some("b"), Some("a")]);
        assert_eq!(extraction.stripped_text, "|");
    }

    #[test]
    fn test_extract_pairs_nearest_closing_marker() {
        let html =
            "<!-- template:a -->A<!-- /template -->mid<!-- template:b -->B<!-- /template -->";
        let extraction = extract(html);

        assert_eq!(extraction.regions.len(), 2);
        assert_eq!(extraction.stripped_text, "mid");
    }

    #[test]
    fn test_extract_compact_markers_pair_nearest_closing_marker() {
        let html = "<!--template:a-->x<!--/template--><!--template:b-->y<!--/template-->";
        let extraction = extract(html);

        let ids: Vec<_> = extraction.regions.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![Some("a"), Some("b")]);
        assert_eq!(extraction.regions[0].raw, "<!--template:a-->x<!--/template-->");
        assert_eq!(extraction.stripped_text, "");
    }

    #[test]
    fn test_extract_without_regions_returns_input() {
        let html = "<div><!-- templates --></div>";
        let extraction = extract(html);

        assert!(extraction.regions.is_empty());
        assert_eq!(extraction.stripped_text, html);
    }

    #[test]
    fn test_find_all_and_remove_all_agree() {
        let html = "x<!-- template:a -->1<!-- /template -->y<!-- TEMPLATE:b -->2<!-- /Template -->z";
        let regions = find_all(html);
        let stripped = remove_all(html);

        let removed: usize = regions.iter().map(|r| r.raw.len()).sum();
        assert_eq!(stripped.len() + removed, html.len());
        assert_eq!(stripped, "xyz");
        for region in &regions {
            assert_eq!(&html[region.span.clone()], region.raw);
        }
    }

    #[test]
    fn test_extract_leaves_unclosed_template_marker() {
        let html = "<!-- template:a --><p>never closed</p>";
        let extraction = extract(html);

        assert!(extraction.regions.is_empty());
        assert_eq!(extraction.stripped_text, html);
    }

    #[test]
    fn test_region_id_on_foreign_text_is_none() {
        let region = TemplateRegion {
            raw: "<p>not a template</p>".to_string(),
            span: 0..21,
        };
        assert_eq!(region.id(), None);
    }
}
