use std::sync::LazyLock;

use regex::Regex;

/// Separator between path strings in a fingerprint. Never part of path data.
pub const FINGERPRINT_SEPARATOR: char = '|';

/// Paths this short or shorter are treated as noise.
const MIN_PATH_LEN: usize = 5;

static PATH_DATA_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"d="([^"]+)""#).unwrap());
/// `clip0_14621_994`-style ids picked up from `id="..."` attributes.
static CLIP_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^clip\d").unwrap());

/// Order-independent summary of an icon's geometry: its normalized path data, sorted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature {
    paths: Vec<String>,
}

impl Signature {
    /// Signature of an SVG fragment. Fill, stroke and element order are ignored.
    pub fn of(markup: &str) -> Self {
        let mut paths: Vec<String> = PATH_DATA_REGEX
            .captures_iter(markup)
            .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
            .filter(|d| !CLIP_ID_REGEX.is_match(d))
            .filter(|d| d.len() > MIN_PATH_LEN)
            .map(|d| d.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect();
        paths.sort();
        Self { paths }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Single-string form used for exact and approximate comparison.
    pub fn fingerprint(&self) -> String {
        self.paths.join(&FINGERPRINT_SEPARATOR.to_string())
    }
}
