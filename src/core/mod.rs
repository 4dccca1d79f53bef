//! Icon analysis pipeline.
//!
//! ```text
//! file_scanner ──> extract/resolve ──> catalog ──┬──> usage
//!                                                └──> redundancy
//! ```
//!
//! [`context::GalleryContext`] runs the stages in order and collects the
//! results into a [`context::GalleryReport`].

pub mod catalog;
pub mod context;
pub mod extract;
pub mod file_scanner;
pub mod icon;
pub mod redundancy;
pub mod resolve;
pub mod usage;

pub use catalog::{IconSource, SourceStats, build_catalog};
pub use context::{GalleryContext, GalleryReport};
pub use icon::{Icon, IconCatalog, LegacyClassUsage, Provenance};
pub use redundancy::{NearDuplicate, RedundancyReport, find_redundant_icons};
