use std::{env, fs, path::Path};

use anyhow::{Context, Ok, Result};
use chrono::Local;
use colored::Colorize;

use super::super::{
    args::GenerateCommand,
    exit_status::ExitStatus,
    publish::{open_in_browser, push},
    report::print_summary,
};
use crate::{
    config::{CONFIG_FILE_NAME, ConfigLoadResult, load_config},
    core::GalleryContext,
    render::render_gallery,
};

pub fn generate(cmd: GenerateCommand) -> Result<ExitStatus> {
    let verbose = cmd.common.verbose;
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let ConfigLoadResult {
        config,
        base_dir,
        from_file,
    } = load_config(&cwd)?;

    if !from_file && verbose {
        eprintln!(
            "{} no {} found, using defaults",
            "warning:".bold().yellow(),
            CONFIG_FILE_NAME
        );
    }

    let workspace_root = cmd
        .root
        .unwrap_or_else(|| base_dir.join(&config.workspace_root));
    let output = cmd.output.unwrap_or_else(|| base_dir.join(&config.output));

    let report = GalleryContext::new(&config, &workspace_root, verbose).run()?;

    let date = Local::now().format("%Y-%m-%d").to_string();
    let html = render_gallery(&report, &config, &date)?;
    write_report(&output, &html)?;

    print_summary(&report, &config, &output);

    if cmd.push {
        push(&output, &date)?;
    }
    if cmd.open {
        open_in_browser(&output)?;
    }

    Ok(ExitStatus::Success)
}

fn write_report(output: &Path, html: &str) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(output, html)
        .with_context(|| format!("Failed to write report: {}", output.display()))?;
    Ok(())
}

