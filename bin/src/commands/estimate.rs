//! Estimate command implementation.
//!
//! This module profiles the selected inputs, estimates memory against the
//! configured cap, and prints the pre-run summary.

use crate::commands::SettingsOverrides;
use crate::display::{Format, render_breakdown, render_settings, render_summary};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use preflight_lib::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Duration;
use walkdir::WalkDir;

/// Estimate memory for the given paths and print the recommendation.
pub(crate) async fn estimate(
    store: &SettingsStore,
    paths: Vec<PathBuf>,
    overrides: &SettingsOverrides,
    format: Format,
    breakdown: bool,
    concurrency: usize,
    quiet: bool,
) -> Result<()> {
    let settings = overrides.apply(store.load()?)?;
    let files = collect_files(&paths);
    tracing::info!(files = files.len(), ?settings, "estimating");

    let spinner = (!quiet && format == Format::Text).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("valid template"),
        );
        pb.set_message(format!("Profiling {} files...", files.len()));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let mut session = Session::new(settings, Vec::new());
    let snapshot = session
        .update_selected_files_concurrent(files, concurrency)
        .await
        .clone();

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    match format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&snapshot)
                .context("Failed to serialize estimate")?;
            println!("{json}");
        }
        Format::Text => {
            print!("{}", render_summary(&snapshot));
            if breakdown {
                let input =
                    MemoryEstimateInput::from_settings(&snapshot.profile, &snapshot.settings);
                let terms = MemoryEstimator::new().breakdown(&input);
                println!("\nSettings:");
                print!("{}", render_settings(&snapshot.settings));
                println!();
                print!("{}", render_breakdown(&snapshot.profile, &terms));
            }
        }
    }

    Ok(())
}

/// Expands directories into the files beneath them.
///
/// Non-directory paths are kept as given, even if they do not exist; the
/// profiler classifies unreadable files on its own. Symlinks inside a
/// directory are not followed.
pub(crate) fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk_dir(path, &mut files);
        } else {
            files.push(path.clone());
        }
    }
    files
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) {
    for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "skipping unreadable entry");
            }
        }
    }
}
