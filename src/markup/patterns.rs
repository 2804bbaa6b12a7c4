//! Marker patterns shared by every pipeline stage.
//!
//! Each marker kind has one raw pattern string and one compiled, immutable
//! `Regex`. `Regex` carries no match-position state, so the same instance
//! serves both the "every match" scans (`find_iter`, `replace_all`) and the
//! single-match re-parse (`captures`).
//!
//! All patterns are case-insensitive and pair each opening marker with the
//! *nearest* closing marker (`[\s\S]*?`).

use regex::Regex;
use std::sync::LazyLock;

/// `<!-- ignore -->...<!-- /ignore -->`
pub const IGNORE_PATTERN: &str = r"(?i)<!--\s*ignore\s*-->[\s\S]*?<!--\s*/ignore\s*-->";

/// `<!-- placeholder: VALUE -->...<!-- /placeholder -->`, group 1 is VALUE.
pub const PLACEHOLDER_PATTERN: &str =
    r"(?i)<!--\s*placeholder\s*:\s*([\s\S]*?)\s*-->[\s\S]*?<!--\s*/placeholder\s*-->";

/// `<!-- template:ID -->BODY<!-- /template -->`, group 1 is ID, group 2 is BODY.
///
/// ID is the shortest non-whitespace run before `-->`, so compact markers
/// such as `<!--template:a-->` end at their own `-->`.
pub const TEMPLATE_PATTERN: &str =
    r"(?i)<!--\s*template\s*:\s*(\S+?)\s*-->([\s\S]*?)<!--\s*/template\s*-->";

/// `<!-- templates -->`
pub const INSERTION_MARKER_PATTERN: &str = r"(?i)<!--\s*templates\s*-->";

/// Any single opening or closing marker of a paired kind.
///
/// Used after the pipeline has run to find markers that never found a partner.
pub const PAIRED_MARKER_PATTERN: &str =
    r"(?i)<!--\s*(/?)\s*(ignore|placeholder|template)\b(?:\s*:[^>]*?)?\s*-->";

pub static IGNORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IGNORE_PATTERN).expect("Invalid ignore regex"));

pub static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).expect("Invalid placeholder regex"));

pub static TEMPLATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TEMPLATE_PATTERN).expect("Invalid template regex"));

pub static INSERTION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(INSERTION_MARKER_PATTERN).expect("Invalid insertion marker regex")
});

pub static PAIRED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PAIRED_MARKER_PATTERN).expect("Invalid paired marker regex"));
