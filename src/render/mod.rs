//! Self-contained HTML gallery report.
//!
//! The document has two tabs: the gallery itself (SVG icons and legacy
//! classes, searchable and filterable per app) and the redundancy analysis.
//! Styles and scripts are embedded so the file can be opened or published
//! on its own. The page is an askama template; icon markup is inserted
//! verbatim and every other piece of text is escaped by the template.

use anyhow::{Context, Result};
use askama::Template;

use crate::{
    config::Config,
    core::{GalleryReport, Icon, Provenance, redundancy::NEAR_DUPLICATE_THRESHOLD},
};

const GALLERY_CSS: &str = include_str!("gallery.css");
const GALLERY_JS: &str = include_str!("gallery.js");

/// Render the full report. The output depends only on the arguments.
pub fn render_gallery(report: &GalleryReport, config: &Config, date: &str) -> Result<String> {
    GalleryPage::new(report, config, date)
        .render()
        .context("Failed to render gallery")
}

#[derive(Template)]
#[template(path = "gallery.html")]
struct GalleryPage<'a> {
    title: &'a str,
    legacy_stylesheet: &'a str,
    css: &'static str,
    js: &'static str,
    date: &'a str,
    total: usize,
    findings: usize,
    threshold: u32,
    package_label: &'a str,
    legacy_prefix: &'a str,
    core_badge: &'static str,
    custom_badge: &'static str,
    legacy_badge: &'static str,
    apps: Vec<AppStat<'a>>,
    icons: Vec<IconCard<'a>>,
    legacy: Vec<IconCard<'a>>,
    exact_groups: Vec<DupGroup<'a>>,
    exact_icon_count: usize,
    near_groups: Vec<DupGroup<'a>>,
}

struct AppStat<'a> {
    name: &'a str,
    color: String,
    used: usize,
}

struct AppTag<'a> {
    name: &'a str,
    color: String,
}

/// One card in either grid. `markup` is empty for legacy classes.
struct IconCard<'a> {
    name: &'a str,
    /// Lowercased name, matched by the search box.
    key: String,
    source: String,
    users: Vec<&'a str>,
    used_label: String,
    markup: &'a str,
    badge: &'static str,
    tags: Vec<AppTag<'a>>,
}

struct DupGroup<'a> {
    kind: &'static str,
    tag: String,
    label: String,
    cards: Vec<DupCard<'a>>,
}

struct DupCard<'a> {
    name: &'a str,
    markup: &'a str,
    badge: &'static str,
    apps: String,
}

impl<'a> GalleryPage<'a> {
    fn new(report: &'a GalleryReport, config: &'a Config, date: &'a str) -> Self {
        let app_names: Vec<&'a str> = config.apps.iter().map(|app| app.name.as_str()).collect();
        let tags = |users: &[&'a str]| -> Vec<AppTag<'a>> {
            users
                .iter()
                .map(|&name| AppTag {
                    name,
                    color: config.app_color(name),
                })
                .collect()
        };

        let mut catalog: Vec<&'a Icon> = report.catalog.iter().collect();
        catalog.sort_by_cached_key(|icon| icon.name().to_lowercase());

        let icons = catalog
            .into_iter()
            .map(|icon| {
                let users = users_of(&app_names, icon);
                let used_label = if users.is_empty() {
                    "Not directly imported".to_string()
                } else {
                    format!("Used by: {}", users.join(", "))
                };
                IconCard {
                    name: icon.name(),
                    key: icon.name().to_lowercase(),
                    source: icon.provenance().to_string(),
                    used_label,
                    markup: icon.markup(),
                    badge: source_badge(icon.provenance()),
                    tags: tags(&users),
                    users,
                }
            })
            .collect();

        let legacy = report
            .all_legacy_classes()
            .into_iter()
            .map(|class| {
                let users = report.legacy_class_users(class, &app_names);
                IconCard {
                    name: class,
                    key: class.to_lowercase(),
                    source: Provenance::CssClass.to_string(),
                    used_label: format!("Used by: {}", users.join(", ")),
                    markup: "",
                    badge: source_badge(&Provenance::CssClass),
                    tags: tags(&users),
                    users,
                }
            })
            .collect();

        let dup_cards = |names: &[&'a str]| -> Vec<DupCard<'a>> {
            names
                .iter()
                .filter_map(|name| report.catalog.get(name))
                .map(|icon| {
                    let users = users_of(&app_names, icon);
                    DupCard {
                        name: icon.name(),
                        markup: icon.markup(),
                        badge: source_badge(icon.provenance()),
                        apps: if users.is_empty() {
                            "unused".to_string()
                        } else {
                            users.join(", ")
                        },
                    }
                })
                .collect()
        };

        let redundancy = &report.redundancy;
        let exact_groups = redundancy
            .exact_groups
            .iter()
            .map(|group| {
                let names: Vec<&str> = group.iter().map(String::as_str).collect();
                DupGroup {
                    kind: "exact",
                    tag: "EXACT".to_string(),
                    label: format!("{} identical icons", group.len()),
                    cards: dup_cards(&names),
                }
            })
            .collect();
        let near_groups = redundancy
            .near_duplicates
            .iter()
            .map(|pair| DupGroup {
                kind: "near",
                tag: format!("~{}%", pair.percent()),
                label: "Near duplicate".to_string(),
                cards: dup_cards(&[pair.first.as_str(), pair.second.as_str()]),
            })
            .collect();

        Self {
            title: &config.title,
            legacy_stylesheet: &config.legacy_stylesheet,
            css: GALLERY_CSS,
            js: GALLERY_JS,
            date,
            total: report.total_icons(),
            findings: redundancy.finding_count(),
            threshold: (NEAR_DUPLICATE_THRESHOLD * 100.0).round() as u32,
            package_label: &config.package_label,
            legacy_prefix: &config.legacy_class_prefix,
            core_badge: source_badge(&Provenance::SharedPackage),
            custom_badge: source_badge(&Provenance::custom("")),
            legacy_badge: source_badge(&Provenance::CssClass),
            apps: app_names
                .iter()
                .map(|&name| AppStat {
                    name,
                    color: config.app_color(name),
                    used: report.catalog.used_count(name),
                })
                .collect(),
            icons,
            legacy,
            exact_groups,
            exact_icon_count: redundancy.exact_icon_count(),
            near_groups,
        }
    }
}

/// Apps using `icon`, in config order.
fn users_of<'a>(apps: &[&'a str], icon: &Icon) -> Vec<&'a str> {
    apps.iter()
        .copied()
        .filter(|app| icon.is_used_by(app))
        .collect()
}

fn source_badge(provenance: &Provenance) -> &'static str {
    match provenance {
        Provenance::SharedPackage => "<span class=\"source-badge source-core\">core</span>",
        Provenance::CustomComponent { .. } => {
            "<span class=\"source-badge source-custom\">custom</span>"
        }
        Provenance::CssClass => "<span class=\"source-badge source-legacy\">legacy</span>",
    }
}
