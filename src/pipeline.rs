use anyhow::Context;
use std::fs;
use tracing::info;

use crate::{
    aggregate::{self, CHART_TOP_INDUSTRIES, TOP_COMPANIES},
    chart, clean,
    config::{
        RunConfig, COMPANY_CHART_FILE, COMPANY_SUMMARY_FILE, INDUSTRY_CHART_FILE,
        INDUSTRY_SUMMARY_FILE, MONTHLY_CHART_FILE, MONTHLY_SUMMARY_FILE,
    },
    error::PipelineError,
    export, fetch,
};

/// Counts reported after a successful run.
#[derive(Debug)]
pub struct RunSummary {
    pub rows_retained: usize,
    pub months: usize,
    pub companies: usize,
    pub industries: usize,
}

/// Run the whole report: fetch, clean, aggregate, then render charts and
/// write spreadsheet summaries under the configured output directory.
pub fn run(config: &RunConfig) -> Result<RunSummary, PipelineError> {
    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating {}", config.output_dir.display()))
        .map_err(PipelineError::Output)?;

    let csv_text = fetch::fetch_csv(&config.input_location).map_err(PipelineError::Fetch)?;
    let records = clean::parse_and_clean(&csv_text).map_err(PipelineError::Parse)?;

    let monthly = aggregate::monthly_totals(&records);
    let companies = aggregate::company_totals(&records);
    let industries = aggregate::industry_totals(&records);
    info!(
        months = monthly.len(),
        companies = companies.len(),
        industries = industries.len(),
        "aggregated"
    );

    // Display-truncated views. Companies use the same top-10 slice for both
    // chart and export; industries chart the top 15 but export the full set.
    let top_companies = &companies[..companies.len().min(TOP_COMPANIES)];
    let top_industries = &industries[..industries.len().min(CHART_TOP_INDUSTRIES)];

    chart::monthly_trend_chart(&config.output_path(MONTHLY_CHART_FILE), &monthly)
        .map_err(PipelineError::Output)?;
    chart::company_bar_chart(&config.output_path(COMPANY_CHART_FILE), top_companies)
        .map_err(PipelineError::Output)?;
    chart::industry_bar_chart(&config.output_path(INDUSTRY_CHART_FILE), top_industries)
        .map_err(PipelineError::Output)?;

    export::write_monthly_summary(&config.output_path(MONTHLY_SUMMARY_FILE), &monthly)
        .map_err(PipelineError::Output)?;
    export::write_group_summary(
        &config.output_path(COMPANY_SUMMARY_FILE),
        "Company",
        top_companies,
    )
    .map_err(PipelineError::Output)?;
    export::write_group_summary(
        &config.output_path(INDUSTRY_SUMMARY_FILE),
        "Industry",
        &industries,
    )
    .map_err(PipelineError::Output)?;

    Ok(RunSummary {
        rows_retained: records.len(),
        months: monthly.len(),
        companies: companies.len(),
        industries: industries.len(),
    })
}
