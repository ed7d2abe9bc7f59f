//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use report_repair_cli::output::write_to_file;
use report_repair_cli::presenter::CliPresenter;
use report_repair_core::input::read_report;
use report_repair_core::registry::finders_for_part;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let report = read_report(&config.input)?;
    info!(entries = report.len(), "report loaded");

    let finders = finders_for_part(&config.part)?;
    let presenter = CliPresenter::new(config.verbose, config.quiet);

    let mut last_product = None;
    for finder in &finders {
        let start = Instant::now();
        let product = finder
            .solve(&report, config.target)
            .with_context(|| format!("{} search failed", finder.name()))?;
        presenter.present_solution(finder.name(), config.target, product, start.elapsed());
        last_product = Some(product);
    }

    if let Some(path) = &config.output {
        if let Some(product) = last_product {
            write_to_file(path, product)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
    }

    Ok(())
}
