//! Per-application icon usage.
//!
//! Usage is a plain substring test: an icon counts as used when its name
//! appears anywhere in a script file, identifier boundaries not considered.
//! `Add` is therefore "used" by a file that only mentions `AddressForm`.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use regex::Regex;

use super::icon::{IconCatalog, LegacyClassUsage};

/// Script extensions scanned for icon names.
pub const SCRIPT_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Extensions scanned for legacy icon classes (scripts plus stylesheets).
pub const LEGACY_CLASS_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "scss", "css"];

/// A source file of one application, already read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    fn has_extension(&self, extensions: &[&str]) -> bool {
        has_extension(&self.path, extensions)
    }
}

pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.contains(&ext))
}

/// All source files of one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSources {
    pub app: String,
    pub files: Vec<SourceFile>,
}

/// Names from `names` that appear in any script file of `files`.
pub fn find_used_icons<'a>(
    names: impl IntoIterator<Item = &'a str>,
    files: &[SourceFile],
) -> BTreeSet<String> {
    let scripts: Vec<&SourceFile> = files
        .iter()
        .filter(|file| file.has_extension(SCRIPT_EXTENSIONS))
        .collect();

    names
        .into_iter()
        .filter(|name| scripts.iter().any(|file| file.content.contains(name)))
        .map(str::to_string)
        .collect()
}

/// Recognizes legacy icon-font class references.
///
/// Two forms are matched, both yielding `<prefix>-<name>`:
/// `pi pi-check` / `pi-pi-check` and `iconClass = "pi-check"`.
#[derive(Debug, Clone)]
pub struct LegacyClassScanner {
    prefix: String,
    pattern: Regex,
}

impl LegacyClassScanner {
    pub fn new(prefix: &str) -> Result<Self, regex::Error> {
        let p = regex::escape(prefix);
        let pattern = Regex::new(&format!(
            r#"{p}[- ]{p}-([a-z0-9-]+)|iconClass\s*=\s*['"]{p}-([a-z0-9-]+)['"]"#
        ))?;
        Ok(Self {
            prefix: prefix.to_string(),
            pattern,
        })
    }

    /// Class names referenced anywhere in `files`.
    pub fn scan(&self, files: &[SourceFile]) -> BTreeSet<String> {
        files
            .iter()
            .filter(|file| file.has_extension(LEGACY_CLASS_EXTENSIONS))
            .flat_map(|file| self.pattern.captures_iter(&file.content))
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| format!("{}-{}", self.prefix, m.as_str()))
            .collect()
    }
}

/// Mark catalog icons with the applications using them, and collect legacy
/// classes per application. Applications without legacy classes are omitted.
pub fn cross_reference(
    catalog: &mut IconCatalog,
    apps: &[AppSources],
    legacy: &LegacyClassScanner,
) -> LegacyClassUsage {
    let mut legacy_usage = LegacyClassUsage::new();

    for app in apps {
        let used = find_used_icons(catalog.names(), &app.files);
        for name in &used {
            catalog.mark_used(name, &app.app);
        }

        let classes = legacy.scan(&app.files);
        if !classes.is_empty() {
            legacy_usage.insert(app.app.clone(), classes);
        }
    }

    legacy_usage
}
