//! Terminal summary of a gallery run.
//!
//! Separate from core logic so the pipeline can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::core::{GalleryReport, redundancy::NEAR_DUPLICATE_THRESHOLD};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the run summary to stdout.
pub fn print_summary(report: &GalleryReport, config: &Config, output: &Path) {
    report_to(report, config, output, &mut io::stdout().lock());
}

/// Print the run summary to a custom writer.
pub fn report_to<W: Write>(report: &GalleryReport, config: &Config, output: &Path, writer: &mut W) {
    print_sources(report, writer);
    print_usage(report, config, writer);
    print_redundancy(report, writer);

    let legacy_total = report.all_legacy_classes().len();
    let _ = writeln!(
        writer,
        "\n{} Written to {}",
        SUCCESS_MARK.green(),
        output.display().to_string().bold()
    );
    let _ = writeln!(
        writer,
        "Summary: {} SVG icons + {} legacy classes = {} total",
        report.catalog.len(),
        legacy_total,
        report.total_icons()
    );
}

fn print_sources<W: Write>(report: &GalleryReport, writer: &mut W) {
    let _ = writeln!(writer, "{}", "Icon sources:".bold());
    if report.sources.is_empty() {
        let _ = writeln!(writer, "  {}", "no icon sources found".yellow());
        return;
    }

    let label_width = report
        .sources
        .iter()
        .map(|source| UnicodeWidthStr::width(source.label.as_str()))
        .max()
        .unwrap_or(0);

    for source in &report.sources {
        let mut details = Vec::new();
        if source.shadowed > 0 {
            details.push(format!("{} already loaded", source.shadowed));
        }
        if source.rejected > 0 {
            details.push(format!("{} not icons", source.rejected));
        }
        let details = if details.is_empty() {
            String::new()
        } else {
            format!(" ({})", details.join(", ")).dimmed().to_string()
        };

        let _ = writeln!(
            writer,
            "  {}  {:>4} icons{}",
            pad(&source.label, label_width),
            source.added,
            details
        );
    }
}

fn print_usage<W: Write>(report: &GalleryReport, config: &Config, writer: &mut W) {
    let _ = writeln!(writer, "{}", "Usage:".bold());

    for app in &config.apps {
        let name = app.name.as_str();
        if report.missing_apps.iter().any(|missing| missing == name) {
            let _ = writeln!(
                writer,
                "  {}: {}",
                name,
                "skipped (directory not found)".yellow()
            );
            continue;
        }

        let legacy = report
            .legacy_classes
            .get(name)
            .map_or(0, |classes| classes.len());
        let _ = writeln!(
            writer,
            "  {}: {} icons, {} legacy classes",
            name,
            report.catalog.used_count(name),
            legacy
        );
    }

    if report.skipped_files > 0 {
        let _ = writeln!(
            writer,
            "  {}",
            format!("{} unreadable files skipped", report.skipped_files).yellow()
        );
    }
}

fn print_redundancy<W: Write>(report: &GalleryReport, writer: &mut W) {
    let redundancy = &report.redundancy;
    let _ = writeln!(writer, "{}", "Redundancy:".bold());

    let _ = writeln!(
        writer,
        "  Exact duplicate groups: {}",
        redundancy.exact_groups.len()
    );
    for group in &redundancy.exact_groups {
        let _ = writeln!(writer, "    {}", group.join(", "));
    }

    let _ = writeln!(
        writer,
        "  Near duplicate pairs (>{}% similar): {}",
        (NEAR_DUPLICATE_THRESHOLD * 100.0).round() as u32,
        redundancy.near_duplicates.len()
    );
    let name_width = redundancy
        .near_duplicates
        .iter()
        .map(|pair| UnicodeWidthStr::width(pair.first.as_str()))
        .max()
        .unwrap_or(0);
    for pair in &redundancy.near_duplicates {
        let _ = writeln!(
            writer,
            "    {} <-> {}  ({}%)",
            pad(&pair.first, name_width),
            pair.second,
            pair.percent()
        );
    }
}

/// Right-pad `text` to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::AppConfig;
    use crate::core::{
        Icon, IconCatalog, NearDuplicate, Provenance, RedundancyReport, SourceStats,
    };

    fn strip_ansi(s: &str) -> String {
        let mut result = String::new();
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    fn render(report: &GalleryReport, config: &Config) -> String {
        let mut output = Vec::new();
        report_to(report, config, Path::new("out/index.html"), &mut output);
        strip_ansi(&String::from_utf8(output).unwrap())
    }

    fn stats(label: &str, added: usize, shadowed: usize, rejected: usize) -> SourceStats {
        SourceStats {
            label: label.to_string(),
            provenance: Provenance::SharedPackage,
            candidates: added + shadowed + rejected,
            added,
            shadowed,
            rejected,
        }
    }

    #[test]
    fn test_empty_run() {
        let output = render(&GalleryReport::default(), &Config::default());

        assert!(output.contains("no icon sources found"));
        assert!(output.contains("Exact duplicate groups: 0"));
        assert!(output.contains("Near duplicate pairs (>80% similar): 0"));
        assert!(output.contains("Written to out/index.html"));
        assert!(output.contains("Summary: 0 SVG icons + 0 legacy classes = 0 total"));
    }

    #[test]
    fn test_full_run() {
        let mut catalog = IconCatalog::new();
        catalog.insert_if_absent(Icon::new("IconAdd", "<svg/>", Provenance::SharedPackage));
        catalog.mark_used("IconAdd", "web");

        let mut report = GalleryReport {
            catalog,
            sources: vec![stats("ui-core (web)", 1, 0, 0), stats("web/src/svgs", 0, 1, 2)],
            missing_apps: vec!["mobile".to_string()],
            skipped_files: 3,
            redundancy: RedundancyReport {
                exact_groups: vec![vec!["A".to_string(), "B".to_string()]],
                near_duplicates: vec![NearDuplicate {
                    first: "Home".to_string(),
                    second: "HomeAlt".to_string(),
                    similarity: 0.964,
                }],
            },
            ..Default::default()
        };
        report
            .legacy_classes
            .insert("web".to_string(), BTreeSet::from(["pi-home".to_string()]));

        let config = Config {
            apps: vec![AppConfig::new("web"), AppConfig::new("mobile")],
            ..Default::default()
        };

        let output = render(&report, &config);

        assert!(output.contains("  ui-core (web)     1 icons\n"));
        assert!(output.contains("  web/src/svgs      0 icons (1 already loaded, 2 not icons)"));
        assert!(output.contains("  web: 1 icons, 1 legacy classes"));
        assert!(output.contains("  mobile: skipped (directory not found)"));
        assert!(output.contains("3 unreadable files skipped"));
        assert!(output.contains("    A, B\n"));
        assert!(output.contains("    Home <-> HomeAlt  (96%)"));
        assert!(output.contains("Summary: 1 SVG icons + 1 legacy classes = 2 total"));
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("图标", 6), "图标  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }
}
