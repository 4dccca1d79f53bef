//! Markup extraction from icon component files.
//!
//! Two file shapes are understood:
//!
//! - [`CompiledComponentExtractor`]: bundler output of the shared icon package
//!   (`jsx("path", { d: "..." })` object literals).
//! - [`SourceComponentExtractor`]: hand-written `.tsx` components embedding an
//!   `<svg>...</svg>` literal.
//!
//! Both are pattern matchers over a small, known grammar subset, not parsers.
//! They sit behind [`MarkupExtractor`] so the catalog never depends on how a
//! fragment was obtained.

use enum_dispatch::enum_dispatch;

mod compiled;
mod source;

pub use compiled::CompiledComponentExtractor;
pub use source::SourceComponentExtractor;

/// Fill substituted for theme variables and unset values.
pub const DEFAULT_FILL: &str = "#333";

/// Fill expressions that mean "not set" in compiled output.
pub const UNSET_FILLS: &[&str] = &["void 0", "undefined", "fill", "null", ""];

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// One file offered to an extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Identity used when the content declares no export name
    /// (entry directory name for compiled icons, file stem for sources).
    pub fallback_name: String,
    pub content: String,
}

impl CandidateFile {
    pub fn new(fallback_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            fallback_name: fallback_name.into(),
            content: content.into(),
        }
    }
}

/// Turns raw component text into a normalized SVG fragment.
#[enum_dispatch]
pub trait MarkupExtractor {
    /// Returns the standalone `<svg>` markup, or `None` when the text is not an icon.
    fn extract(&self, content: &str) -> Option<String>;

    /// Logical name of the icon defined by `file`.
    fn resolve_name(&self, file: &CandidateFile) -> String;
}

/// The extraction strategies an icon source can be read with.
#[enum_dispatch(MarkupExtractor)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    Compiled(CompiledComponentExtractor),
    Source(SourceComponentExtractor),
}

/// Normalize a fill value: theme variables and unset sentinels become [`DEFAULT_FILL`].
pub fn normalize_fill(value: &str) -> &str {
    let value = value.trim();
    if value.contains("var(") || UNSET_FILLS.contains(&value) {
        DEFAULT_FILL
    } else {
        value
    }
}
