//! Catalog assembly from ordered icon sources.
//!
//! Sources are consumed strictly in the order given. A name is claimed by the
//! first source that yields markup for it; later sources with the same name are
//! dropped without comparing content. Callers put shared-package sources (one
//! per application copy of the package) before custom-component sources.

use std::collections::HashSet;

use super::{
    extract::{CandidateFile, Extractor, MarkupExtractor},
    icon::{Icon, IconCatalog, Provenance},
};

/// One provider of candidate icon files, read with a single extractor.
#[derive(Debug, Clone)]
pub struct IconSource {
    /// Human label, e.g. the directory the files came from.
    pub label: String,
    pub provenance: Provenance,
    pub extractor: Extractor,
    pub files: Vec<CandidateFile>,
}

impl IconSource {
    pub fn new(
        label: impl Into<String>,
        provenance: Provenance,
        extractor: impl Into<Extractor>,
    ) -> Self {
        Self {
            label: label.into(),
            provenance,
            extractor: extractor.into(),
            files: Vec::new(),
        }
    }

    pub fn with_files(mut self, files: Vec<CandidateFile>) -> Self {
        self.files = files;
        self
    }
}

/// What one source contributed to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStats {
    pub label: String,
    pub provenance: Provenance,
    /// Files offered by the source.
    pub candidates: usize,
    /// Icons inserted into the catalog.
    pub added: usize,
    /// Names already claimed by an earlier source.
    pub shadowed: usize,
    /// Files that did not yield markup.
    pub rejected: usize,
}

/// Build a catalog from `sources`, earlier sources taking priority.
pub fn build_catalog(sources: &[IconSource]) -> (IconCatalog, Vec<SourceStats>) {
    let mut catalog = IconCatalog::new();
    let stats = sources
        .iter()
        .map(|source| add_source(&mut catalog, source))
        .collect();
    (catalog, stats)
}

fn add_source(catalog: &mut IconCatalog, source: &IconSource) -> SourceStats {
    let mut stats = SourceStats {
        label: source.label.clone(),
        provenance: source.provenance.clone(),
        candidates: source.files.len(),
        added: 0,
        shadowed: 0,
        rejected: 0,
    };

    let mut files: Vec<&CandidateFile> = source.files.iter().collect();
    files.sort_by(|a, b| a.fallback_name.cmp(&b.fallback_name));

    // Names seen in this source, so a second file with the same export is
    // counted as shadowed rather than as an icon of its own.
    let mut seen: HashSet<String> = HashSet::new();

    for file in files {
        let name = source.extractor.resolve_name(file);
        if catalog.contains(&name) || seen.contains(&name) {
            stats.shadowed += 1;
            continue;
        }
        match source.extractor.extract(&file.content) {
            Some(markup) => {
                seen.insert(name.clone());
                catalog.insert_if_absent(Icon::new(name, markup, source.provenance.clone()));
                stats.added += 1;
            }
            None => stats.rejected += 1,
        }
    }

    stats
}
