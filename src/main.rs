use anyhow::Result;
use layoffstats::{config::RunConfig, pipeline};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) configure the run ────────────────────────────────────────
    let config = RunConfig::default();
    info!(
        input = %config.input_location,
        output = %config.output_dir.display(),
        "running layoff report"
    );

    // ─── 3) fetch → clean → aggregate → chart + export ───────────────
    let summary = pipeline::run(&config)?;

    info!(
        rows = summary.rows_retained,
        months = summary.months,
        companies = summary.companies,
        industries = summary.industries,
        output = %config.output_dir.display(),
        "all charts and summary files generated"
    );
    Ok(())
}
