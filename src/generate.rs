//! The build-time generation pass.
//!
//! Reads the content-collection export, builds the activity grids, and
//! writes the data file templates read. `check` runs the same loading
//! pass without writing, for CI.

use crate::{
    config::GridConfig,
    content::{CorpusStats, load_corpus},
    grid::generate_activity_data,
    log,
};
use anyhow::{Context, Result, bail};
use std::fs;

/// Counts from one generate pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    pub years: usize,
    pub posts: usize,
    pub skipped: usize,
}

/// Build activity data and write it to the configured output path.
pub fn run_generate(config: &GridConfig) -> Result<GenerateSummary> {
    log!("generate"; "reading entries from {}", config.input.entries.display());
    let (corpus, stats) = load_corpus(&config.input.entries)?;

    let grids = generate_activity_data(&corpus, config.grid.layout);
    let json = serde_json::to_string_pretty(&grids).context("Failed to serialize activity data")?;

    let output = &config.output.activity;
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(output, json)
        .with_context(|| format!("Failed to write activity data: {}", output.display()))?;

    let summary = GenerateSummary {
        years: grids.len(),
        posts: stats.kept,
        skipped: stats.skipped,
    };
    log!(
        "generate";
        "wrote {} ({} years, {} posts, {} entries skipped)",
        output.display(),
        summary.years,
        summary.posts,
        summary.skipped
    );

    Ok(summary)
}

/// Run the loading pass without writing; with `strict`, skipped entries
/// fail the command.
pub fn run_check(config: &GridConfig, strict: bool) -> Result<CorpusStats> {
    log!("check"; "reading entries from {}", config.input.entries.display());
    let (corpus, stats) = load_corpus(&config.input.entries)?;

    let years = crate::grid::years_with_posts(&corpus);
    log!(
        "check";
        "{} of {} entries usable across {} years, {} skipped",
        stats.kept,
        stats.total,
        years.len(),
        stats.skipped
    );

    if strict && stats.skipped > 0 {
        bail!("{} entries were skipped (strict mode)", stats.skipped);
    }

    Ok(stats)
}
