use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::{
    config::Config,
    core::{
        catalog::{IconSource, SourceStats, build_catalog},
        file_scanner::FileScanner,
        icon::{IconCatalog, LegacyClassUsage},
        redundancy::{RedundancyReport, find_redundant_icons},
        usage::{AppSources, LegacyClassScanner, cross_reference},
    },
};

/// Everything the renderer and the terminal summary need from one run.
#[derive(Debug, Default)]
pub struct GalleryReport {
    pub catalog: IconCatalog,
    /// Legacy icon-font classes per app; apps without any are absent.
    pub legacy_classes: LegacyClassUsage,
    pub redundancy: RedundancyReport,
    /// Contribution of each icon source, in priority order.
    pub sources: Vec<SourceStats>,
    /// Apps whose source tree was scanned, in config order.
    pub scanned_apps: Vec<String>,
    /// Apps whose source tree was not found.
    pub missing_apps: Vec<String>,
    /// Source files skipped because they could not be read.
    pub skipped_files: usize,
}

impl GalleryReport {
    /// Distinct legacy classes across all apps, sorted.
    pub fn all_legacy_classes(&self) -> Vec<&str> {
        let mut classes: Vec<&str> = self
            .legacy_classes
            .values()
            .flatten()
            .map(String::as_str)
            .collect();
        classes.sort_unstable();
        classes.dedup();
        classes
    }

    /// Apps using the legacy class `class`, in `apps` order.
    pub fn legacy_class_users<'a>(&self, class: &str, apps: &[&'a str]) -> Vec<&'a str> {
        apps.iter()
            .copied()
            .filter(|app| {
                self.legacy_classes
                    .get(*app)
                    .is_some_and(|classes| classes.contains(class))
            })
            .collect()
    }

    /// SVG icons plus distinct legacy classes.
    pub fn total_icons(&self) -> usize {
        self.catalog.len() + self.all_legacy_classes().len()
    }
}

/// Orchestrates one gallery run.
///
/// The pipeline is strictly ordered:
/// 1. shared-package sources (every app's copy, app order)
/// 2. custom-component sources
/// 3. catalog build (first writer wins)
/// 4. usage and legacy-class cross-reference
/// 5. redundancy detection
pub struct GalleryContext<'a> {
    pub config: &'a Config,
    /// Directory holding every app repository.
    pub workspace_root: PathBuf,
    pub verbose: bool,
}

impl<'a> GalleryContext<'a> {
    pub fn new(config: &'a Config, workspace_root: impl Into<PathBuf>, verbose: bool) -> Self {
        Self {
            config,
            workspace_root: workspace_root.into(),
            verbose,
        }
    }

    pub fn run(&self) -> Result<GalleryReport> {
        let scanner = FileScanner::new(self.config, &self.workspace_root, self.verbose);

        let mut sources = scanner.package_sources();
        sources.extend(scanner.custom_sources());

        let app_scan = scanner.app_sources();
        analyze(
            self.config,
            &sources,
            &app_scan.apps,
            app_scan.missing,
            app_scan.skipped_count,
        )
    }
}

/// Pure part of the pipeline over already-read inputs.
pub fn analyze(
    config: &Config,
    sources: &[IconSource],
    apps: &[AppSources],
    missing_apps: Vec<String>,
    skipped_files: usize,
) -> Result<GalleryReport> {
    let (mut catalog, source_stats) = build_catalog(sources);

    let legacy = LegacyClassScanner::new(&config.legacy_class_prefix).with_context(|| {
        format!(
            "Invalid legacy class prefix: \"{}\"",
            config.legacy_class_prefix
        )
    })?;
    let legacy_classes = cross_reference(&mut catalog, apps, &legacy);

    let redundancy = find_redundant_icons(&catalog);

    Ok(GalleryReport {
        catalog,
        legacy_classes,
        redundancy,
        sources: source_stats,
        scanned_apps: apps.iter().map(|app| app.app.clone()).collect(),
        missing_apps,
        skipped_files,
    })
}
