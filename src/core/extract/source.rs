use std::sync::LazyLock;

use regex::Regex;

use super::{CandidateFile, DEFAULT_FILL, MarkupExtractor};
use crate::core::resolve::source_export_name;

static SVG_PAIR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(<svg\b[^>]*>)(.*?)(</svg>)").unwrap());
/// `{...props}` and friends.
static SPREAD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\{\s*\.\.\.[\w.]+\s*\}").unwrap());
/// `attr={expr}`, including one level of nested braces (`style={{ ... }}`).
static DYNAMIC_ATTR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[\w:-]+=\{(?:\{[^{}]*\}|[^{}])*\}").unwrap());
static WIDTH_ATTR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\swidth="(\d+)""#).unwrap());
static HEIGHT_ATTR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\sheight="(\d+)""#).unwrap());
static VAR_FILL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"fill="[^"]*var\([^"]*""#).unwrap());

/// Extracts the `<svg>` literal embedded in a hand-written `.tsx` icon component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceComponentExtractor;

impl MarkupExtractor for SourceComponentExtractor {
    fn extract(&self, content: &str) -> Option<String> {
        let caps = SVG_PAIR_REGEX.captures(content)?;

        let mut open = strip_expressions(&caps[1]);
        let inner = strip_expressions(&caps[2]).replace("<>", "").replace("</>", "");

        if !open.contains("viewBox") {
            let width = WIDTH_ATTR_REGEX.captures(&open).map(|c| c[1].to_string());
            let height = HEIGHT_ATTR_REGEX.captures(&open).map(|c| c[1].to_string());
            if let (Some(width), Some(height)) = (width, height) {
                open.pop();
                open.push_str(&format!(r#" viewBox="0 0 {} {}">"#, width, height));
            }
        }

        let svg = format!("{}{}{}", open, inner, &caps[3]);
        let default_fill = format!(r#"fill="{}""#, DEFAULT_FILL);
        let svg = VAR_FILL_REGEX.replace_all(&svg, default_fill.as_str());
        Some(svg.replace(r#"fill="""#, &default_fill))
    }

    fn resolve_name(&self, file: &CandidateFile) -> String {
        source_export_name(&file.content)
            .unwrap_or(&file.fallback_name)
            .to_string()
    }
}

/// Drop JSX-only syntax: spreads, `attr={expr}` values, and `className`.
fn strip_expressions(markup: &str) -> String {
    let markup = SPREAD_REGEX.replace_all(markup, "");
    let markup = DYNAMIC_ATTR_REGEX.replace_all(&markup, "");
    markup.replace("className=", "class=")
}
