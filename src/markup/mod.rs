//! HTML comment markup rewriting.
//!
//! A document passes through four stages, each a pure `&str -> String`
//! function:
//!
//! 1. [`ignore::strip`] deletes `<!-- ignore -->...<!-- /ignore -->` regions
//! 2. [`placeholder::resolve`] replaces `<!-- placeholder: VALUE -->...<!-- /placeholder -->` with `VALUE`
//! 3. [`extract::extract`] pulls `<!-- template:ID -->BODY<!-- /template -->` regions out of the flow
//! 4. [`compose::compose`] turns each region into `<script type='text/html' id='ID'>BODY</script>`
//!    and splices the tags into `<!-- templates -->`
//!
//! Every stage is total: markers that do not pair up are left in the text.
//! Nested markers of the same kind are not supported; an opening marker
//! always pairs with the nearest closing one.

pub mod compose;
pub mod diagnostics;
pub mod extract;
pub mod ignore;
pub mod patterns;
pub mod pipeline;
pub mod placeholder;

// Re-export public API
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use extract::{Extraction, TemplateRegion};
pub use pipeline::{TransformReport, transform, transform_with_report};
