//! Icon Gallery - SVG icon inventory for a fleet of React apps
//!
//! Icon Gallery is a CLI tool and library that collects the SVG icons of a set
//! of frontend applications (from a shared compiled icon package and from each
//! app's own `.tsx` icon components), records which app uses which icon,
//! finds exact and near-duplicate icons, and renders everything as a single
//! static HTML page.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, terminal report, publishing)
//! - `config`: Configuration file loading and parsing
//! - `core`: Analysis pipeline (scanning, extraction, catalog, usage, redundancy)
//! - `render`: HTML gallery rendering

pub mod cli;
pub mod config;
pub mod core;
pub mod render;
