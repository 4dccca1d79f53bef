//! Filesystem side of the pipeline: turns the configured directory layout into
//! icon sources and per-app source files.
//!
//! Every failure here is local. Missing directories contribute nothing,
//! unreadable or non-UTF-8 files are skipped (and reported in verbose mode).

use std::{
    fs,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use super::{
    catalog::IconSource,
    extract::{CandidateFile, CompiledComponentExtractor, SourceComponentExtractor},
    icon::Provenance,
    usage::{AppSources, LEGACY_CLASS_EXTENSIONS, SourceFile, has_extension},
};
use crate::config::Config;

/// Result of scanning application source trees.
#[derive(Debug, Default)]
pub struct AppScanResult {
    /// Apps whose source tree exists, in config order.
    pub apps: Vec<AppSources>,
    /// Apps whose source tree was not found.
    pub missing: Vec<String>,
    /// Files that could not be read or decoded.
    pub skipped_count: usize,
}

/// Scanner rooted at the workspace directory holding all app repositories.
pub struct FileScanner<'a> {
    config: &'a Config,
    workspace_root: PathBuf,
    verbose: bool,
}

impl<'a> FileScanner<'a> {
    pub fn new(config: &'a Config, workspace_root: impl Into<PathBuf>, verbose: bool) -> Self {
        Self {
            config,
            workspace_root: workspace_root.into(),
            verbose,
        }
    }

    fn app_root(&self, app: &str) -> PathBuf {
        self.workspace_root.join(app)
    }

    /// One shared-package source per app that carries a copy of the package,
    /// in app order.
    ///
    /// Each entry directory contributes its first `.js` file (source maps
    /// excluded), with the directory name as fallback identity.
    pub fn package_sources(&self) -> Vec<IconSource> {
        let mut sources = Vec::new();

        for app in &self.config.apps {
            let icons_dir = self.app_root(&app.name).join(&self.config.package_icons_dir);
            if !icons_dir.is_dir() {
                self.warn(format!(
                    "{}: no {} copy at {}",
                    app.name,
                    self.config.package_label,
                    icons_dir.display()
                ));
                continue;
            }

            let files = sorted_dir_entries(&icons_dir)
                .into_iter()
                .filter(|entry| entry.is_dir())
                .filter_map(|entry| {
                    let script = sorted_dir_entries(&entry).into_iter().find(|file| {
                        file.is_file()
                            && has_extension(file, &["js"])
                            && !file_name(file).contains(".map")
                    })?;
                    let content = self.read(&script)?;
                    Some(CandidateFile::new(file_name(&entry), content))
                })
                .collect();

            sources.push(
                IconSource::new(
                    format!("{} ({})", self.config.package_label, app.name),
                    Provenance::SharedPackage,
                    CompiledComponentExtractor,
                )
                .with_files(files),
            );
        }

        sources
    }

    /// One custom-component source per app and configured icon directory.
    pub fn custom_sources(&self) -> Vec<IconSource> {
        let mut sources = Vec::new();

        for app in &self.config.apps {
            for dir in &app.custom_icon_dirs {
                let svg_dir = self.app_root(&app.name).join(dir);
                if !svg_dir.is_dir() {
                    self.warn(format!(
                        "{}: custom icon directory not found: {}",
                        app.name,
                        svg_dir.display()
                    ));
                    continue;
                }

                let files = walk_files(&svg_dir, |path| has_extension(path, &["tsx"]))
                    .into_iter()
                    .filter_map(|path| {
                        let content = self.read(&path)?;
                        let stem = path.file_stem()?.to_string_lossy().into_owned();
                        Some(CandidateFile::new(stem, content))
                    })
                    .collect();

                sources.push(
                    IconSource::new(
                        format!("{}/{}", app.name, dir),
                        Provenance::custom(&app.name),
                        SourceComponentExtractor,
                    )
                    .with_files(files),
                );
            }
        }

        sources
    }

    /// Source files of every app, for usage and legacy-class scanning.
    pub fn app_sources(&self) -> AppScanResult {
        let ignores = self.config.ignore_patterns();
        let mut result = AppScanResult::default();

        for app in &self.config.apps {
            let src_dir = self.app_root(&app.name).join(&app.source_dir);
            if !src_dir.is_dir() {
                result.missing.push(app.name.clone());
                continue;
            }

            let mut files = Vec::new();
            for path in walk_files(&src_dir, |path| {
                has_extension(path, LEGACY_CLASS_EXTENSIONS) && !is_ignored(path, &ignores)
            }) {
                match self.read(&path) {
                    Some(content) => files.push(SourceFile::new(path, content)),
                    None => result.skipped_count += 1,
                }
            }

            result.apps.push(AppSources {
                app: app.name.clone(),
                files,
            });
        }

        result
    }

    fn read(&self, path: &Path) -> Option<String> {
        match fs::read(path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(content) => Some(content),
                Err(_) => {
                    self.warn(format!("Skipping non-UTF-8 file: {}", path.display()));
                    None
                }
            },
            Err(e) => {
                self.warn(format!("Cannot read {}: {}", path.display(), e));
                None
            }
        }
    }

    fn warn(&self, message: String) {
        if self.verbose {
            eprintln!("{} {}", "warning:".bold().yellow(), message);
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Direct children of `dir`, sorted by name. Unreadable directories yield nothing.
fn sorted_dir_entries(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut paths: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();
    paths.sort();
    paths
}

/// Files under `dir` accepted by `keep`, in sorted path order.
fn walk_files(dir: &Path, keep: impl Fn(&Path) -> bool) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .flatten()
        .filter(|entry| entry.file_type().is_file() && keep(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}

fn is_ignored(path: &Path, ignores: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    ignores.iter().any(|pattern| pattern.matches(&path_str))
}
