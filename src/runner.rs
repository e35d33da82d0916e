// src/runner.rs
//! The whole batch, start to finish:
//! discover → load → score → select → enrich (selected only) → assemble → render → write.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::{
    config::options::{AppOptions, InputOptions},
    core::scoring::score_all,
    enrich::{Catalog, Enricher, HttpCatalog},
    error::{Error, Result},
    file,
    progress::Progress,
    report::{html::{render, RenderMeta}, Selection},
    store::{self, Loaded},
};

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub input: PathBuf,
    pub report: PathBuf,
    pub details: Option<PathBuf>,
    pub games: usize,
    pub skipped: usize,
    pub enriched: usize,
    pub unenriched: usize,
}

/// Explicit path if it exists, else the latest dated snapshot.
pub fn resolve_input(input: &InputOptions) -> Result<PathBuf> {
    match &input.path {
        Some(p) if p.is_file() => Ok(p.clone()),
        Some(p) => Err(Error::NoInputAvailable(p.clone())),
        None => store::latest_csv(&input.search_dir),
    }
}

/// Top-level runner with the real HTTP catalog (unless lookups are disabled).
pub fn run(opts: &AppOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    opts.validate()?;
    let input = resolve_input(&opts.input)?;

    if opts.catalog.enabled {
        let mut enricher = Enricher::new(HttpCatalog::new(&opts.catalog)?);
        run_with(opts, &input, Some(&mut enricher), progress)
    } else {
        run_with::<HttpCatalog>(opts, &input, None, progress)
    }
}

/// Same pipeline over any catalog. The enricher (and its cache) outlives the run,
/// so a second run over the same input reuses every lookup.
pub fn run_with<C: Catalog>(
    opts: &AppOptions,
    input: &Path,
    enricher: Option<&mut Enricher<C>>,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let Loaded { mut games, skipped } = store::load_games(input)?;
    if games.is_empty() {
        warn!(path = %input.display(), "no valid rows; the report will be empty");
    }

    score_all(&mut games, &opts.scoring);

    let selection = Selection::select(&games, opts.report.page_size, opts.report.min_year);
    let ids = selection.enrichment_ids(&games);

    let detail_rows = match enricher {
        Some(enricher) => enricher.enrich(&mut games, &ids, progress),
        None => {
            info!("catalog lookups disabled");
            Vec::new()
        }
    };
    let unenriched = games
        .iter()
        .filter(|g| ids.contains(&g.id) && !g.is_enriched())
        .count();

    let report = selection.report(&games);
    let meta = RenderMeta { snapshot: store::snapshot_label(input), z: opts.scoring.z };
    file::write_report(&opts.report.output, &render(&report, &meta))?;
    info!(path = %opts.report.output.display(), "wrote report");

    let details = match opts.report.details_path(input) {
        Some(path) => file::write_details(&path, &detail_rows)?.then_some(path),
        None => None,
    };
    if let Some(path) = &details {
        info!(path = %path.display(), rows = detail_rows.len(), "wrote details");
    }

    Ok(RunSummary {
        input: input.to_path_buf(),
        report: opts.report.output.clone(),
        details,
        games: games.len(),
        skipped,
        enriched: detail_rows.len(),
        unenriched,
    })
}
