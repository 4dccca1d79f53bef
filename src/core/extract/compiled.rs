use std::sync::LazyLock;

use regex::Regex;

use super::{CandidateFile, DEFAULT_FILL, MarkupExtractor, SVG_NAMESPACE, normalize_fill};
use crate::core::resolve::compiled_export_name;

/// Width/height used when the component only declares a viewBox.
const DEFAULT_SIZE: &str = "24";

/// How far before a path's `d:` to look for a `fillRule` marker.
const FILL_RULE_LOOKBEHIND: usize = 200;

static WIDTH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"width:\s*["'](\d+)["']"#).unwrap());
static HEIGHT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"height:\s*["'](\d+)["']"#).unwrap());
static VIEWBOX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"viewBox:\s*["']([^"']+)["']"#).unwrap());
static PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bd:\s*["']([^"']+)["']"#).unwrap());
static CIRCLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"jsx\("circle",\s*(\{[^}]*\})"#).unwrap());
static CX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bcx:\s*["']([^"']+)["']"#).unwrap());
static CY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bcy:\s*["']([^"']+)["']"#).unwrap());
static R_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\br:\s*["']([^"']+)["']"#).unwrap());
static FILL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bfill:\s*("[^"]*"|'[^']*'|[^,}]+?)\s*[,}]"#).unwrap()
});

/// Extracts icons from compiled React components such as
///
/// ```text
/// const IconAdd = (props) => jsx("svg", { width: "24", height: "24",
///   viewBox: "0 0 24 24", children: jsx("path", { d: "M12 5v14", fill: "var(--c)" }) });
/// export { IconAdd };
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompiledComponentExtractor;

impl MarkupExtractor for CompiledComponentExtractor {
    fn extract(&self, content: &str) -> Option<String> {
        let viewbox = capture(&VIEWBOX_REGEX, content)?;
        let width = capture(&WIDTH_REGEX, content).unwrap_or(DEFAULT_SIZE);
        let height = capture(&HEIGHT_REGEX, content).unwrap_or(DEFAULT_SIZE);

        let mut elements: Vec<(usize, String)> = Vec::new();

        for caps in PATH_REGEX.captures_iter(content) {
            let Some(whole) = caps.get(0) else { continue };
            let object = enclosing_object(content, whole.start(), whole.end());
            let fill = object_fill(&content[object.0..object.1]);

            let window_start =
                floor_char_boundary(content, whole.start().saturating_sub(FILL_RULE_LOOKBEHIND));
            let fill_rule = if content[window_start..object.1].contains("fillRule") {
                r#" fill-rule="evenodd" clip-rule="evenodd""#
            } else {
                ""
            };

            elements.push((
                whole.start(),
                format!(r#"<path d="{}" fill="{}"{}/>"#, &caps[1], fill, fill_rule),
            ));
        }

        for caps in CIRCLE_REGEX.captures_iter(content) {
            let (Some(whole), Some(object)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let object = object.as_str();
            let (Some(cx), Some(cy), Some(r)) = (
                capture(&CX_REGEX, object),
                capture(&CY_REGEX, object),
                capture(&R_REGEX, object),
            ) else {
                continue;
            };
            elements.push((
                whole.start(),
                format!(
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                    cx,
                    cy,
                    r,
                    object_fill(object)
                ),
            ));
        }

        if elements.is_empty() {
            return None;
        }
        elements.sort_by_key(|(offset, _)| *offset);

        let body: String = elements.into_iter().map(|(_, tag)| tag).collect();
        Some(format!(
            r#"<svg width="{}" height="{}" viewBox="{}" fill="none" xmlns="{}">{}</svg>"#,
            width, height, viewbox, SVG_NAMESPACE, body
        ))
    }

    fn resolve_name(&self, file: &CandidateFile) -> String {
        compiled_export_name(&file.content)
            .unwrap_or(&file.fallback_name)
            .to_string()
    }
}

fn capture<'a>(regex: &Regex, content: &'a str) -> Option<&'a str> {
    regex
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Byte range of the `{ ... }` object literal around `start..end`.
///
/// Falls back to the match itself when no braces surround it.
fn enclosing_object(content: &str, start: usize, end: usize) -> (usize, usize) {
    let open = content[..start].rfind('{').unwrap_or(start);
    let close = content[end..]
        .find('}')
        .map(|offset| end + offset + 1)
        .unwrap_or(content.len());
    (open, close)
}

/// Fill declared in an object literal, normalized.
///
/// Only quoted literals are honoured; anything else is an expression that
/// can't be evaluated statically.
fn object_fill(object: &str) -> &str {
    let Some(raw) = capture(&FILL_REGEX, object) else {
        return DEFAULT_FILL;
    };
    let raw = raw.trim();
    let quoted = raw.len() >= 2
        && ((raw.starts_with('"') && raw.ends_with('"'))
            || (raw.starts_with('\'') && raw.ends_with('\'')));
    if quoted {
        normalize_fill(&raw[1..raw.len() - 1])
    } else {
        DEFAULT_FILL
    }
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
