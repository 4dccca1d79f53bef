//! Publishing the written report: git commit/push and opening it in a browser.

use std::{
    path::Path,
    process::{Command, Stdio},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::report::SUCCESS_MARK;

/// Commit `report` and push it, if git reports changes to it.
///
/// Git runs in the report's directory, so the report must live inside a
/// repository with an upstream configured.
pub fn push(report: &Path, date: &str) -> Result<()> {
    let (dir, file) = split_report_path(report)?;

    let diff = git(dir, &["diff", "--stat", "--", file])?;
    if diff.trim().is_empty() {
        println!("No changes to commit.");
        return Ok(());
    }

    git(dir, &["add", "--", file])?;
    git(dir, &["commit", "-m", &commit_message(date)])?;
    git(dir, &["push"])?;

    println!("{} {}", SUCCESS_MARK.green(), "Pushed report".green());
    Ok(())
}

pub fn commit_message(date: &str) -> String {
    format!("Update icon gallery ({})", date)
}

/// Open `report` with the system browser.
pub fn open_in_browser(report: &Path) -> Result<()> {
    let path = report
        .canonicalize()
        .with_context(|| format!("Cannot resolve {}", report.display()))?;
    let url = format!("file://{}", path.display());
    webbrowser::open(&url).with_context(|| format!("Failed to open browser for {}", url))?;
    Ok(())
}

fn split_report_path(report: &Path) -> Result<(&Path, &str)> {
    let file = report
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Invalid report path: {}", report.display()))?;
    let dir = match report.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((dir, file))
}

/// Run git in `dir`, returning stdout. A non-zero exit is an error carrying git's stderr.
fn git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("Failed to run git {}", args.join(" ")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("git {} failed: {}", args.join(" "), stderr.trim());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
