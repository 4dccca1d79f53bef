//! Redundant icon detection.
//!
//! Icons are compared by [`Signature`]: the sorted, whitespace-normalized path
//! data of their markup. Identical fingerprints form exact-duplicate groups;
//! remaining pairs are scored with [`similarity::ratio`] and reported as near
//! duplicates at or above [`NEAR_DUPLICATE_THRESHOLD`].
//!
//! Icons without any usable path data take no part in either analysis.

use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;

use super::icon::IconCatalog;

mod signature;
pub mod similarity;

pub use signature::{FINGERPRINT_SEPARATOR, Signature};

/// Minimum similarity for a pair to be reported as a near duplicate.
pub const NEAR_DUPLICATE_THRESHOLD: f64 = 0.80;

/// Pairs whose fingerprint lengths differ more than this ratio are not scored.
pub const MIN_LENGTH_RATIO: f64 = 0.4;

/// Two icons with similar, but not identical, geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct NearDuplicate {
    pub first: String,
    pub second: String,
    /// Similarity rounded to three decimals.
    pub similarity: f64,
}

impl NearDuplicate {
    /// Similarity as a whole percentage, truncated.
    pub fn percent(&self) -> u32 {
        (self.similarity * 100.0) as u32
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RedundancyReport {
    /// Groups of two or more icons with identical fingerprints, names sorted.
    pub exact_groups: Vec<Vec<String>>,
    /// Pairs sorted by descending similarity.
    pub near_duplicates: Vec<NearDuplicate>,
}

impl RedundancyReport {
    /// Total number of icons that belong to an exact group.
    pub fn exact_icon_count(&self) -> usize {
        self.exact_groups.iter().map(Vec::len).sum()
    }

    /// Exact groups plus near pairs.
    pub fn finding_count(&self) -> usize {
        self.exact_groups.len() + self.near_duplicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.finding_count() == 0
    }
}

/// Partition the catalog into exact-duplicate groups and near-duplicate pairs.
pub fn find_redundant_icons(catalog: &IconCatalog) -> RedundancyReport {
    // name -> fingerprint, names ascending (catalog order)
    let fingerprints: Vec<(&str, String)> = catalog
        .iter()
        .filter_map(|icon| {
            let signature = Signature::of(icon.markup());
            (!signature.is_empty()).then(|| (icon.name(), signature.fingerprint()))
        })
        .collect();

    let exact_groups = exact_groups(&fingerprints);

    let group_of: HashMap<&str, usize> = exact_groups
        .iter()
        .enumerate()
        .flat_map(|(index, group)| group.iter().map(move |name| (name.as_str(), index)))
        .collect();

    let mut near_duplicates: Vec<NearDuplicate> = (0..fingerprints.len())
        .into_par_iter()
        .flat_map_iter(|i| {
            let (name_a, fp_a) = &fingerprints[i];
            let group_of = &group_of;
            fingerprints[i + 1..].iter().filter_map(move |(name_b, fp_b)| {
                let same_group = matches!(
                    (group_of.get(name_a), group_of.get(name_b)),
                    (Some(a), Some(b)) if a == b
                );
                if same_group {
                    return None;
                }
                compare(fp_a, fp_b).map(|similarity| NearDuplicate {
                    first: name_a.to_string(),
                    second: name_b.to_string(),
                    similarity: round3(similarity),
                })
            })
        })
        .collect();

    // Stable: ties keep name order.
    near_duplicates.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    RedundancyReport {
        exact_groups,
        near_duplicates,
    }
}

/// Group names by identical fingerprint, in order of each group's first member.
fn exact_groups(fingerprints: &[(&str, String)]) -> Vec<Vec<String>> {
    let mut order: Vec<&str> = Vec::new();
    let mut by_fingerprint: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for (name, fingerprint) in fingerprints {
        let members = by_fingerprint.entry(fingerprint.as_str()).or_insert_with(|| {
            order.push(fingerprint.as_str());
            Vec::new()
        });
        members.push(name.to_string());
    }

    order
        .into_iter()
        .filter_map(|fingerprint| by_fingerprint.remove(fingerprint))
        .filter(|members| members.len() > 1)
        .map(|mut members| {
            members.sort();
            members
        })
        .collect()
}

/// Similarity of two fingerprints if it reaches the threshold.
fn compare(a: &str, b: &str) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    let (short, long) = if a.len() <= b.len() {
        (a.len(), b.len())
    } else {
        (b.len(), a.len())
    };
    if (short as f64) / (long as f64) < MIN_LENGTH_RATIO {
        return None;
    }

    let similarity = similarity::ratio(a, b);
    (similarity >= NEAR_DUPLICATE_THRESHOLD).then_some(similarity)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
