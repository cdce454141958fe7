use thiserror::Error;

/// The three ways a run can die. Every stage failure is folded into one of
/// these by `pipeline::run`; none of them is recoverable.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The CSV resource could not be fetched or read.
    #[error("failed to fetch input data: {0:#}")]
    Fetch(anyhow::Error),

    /// The CSV was malformed or a date value could not be parsed.
    #[error("failed to parse input data: {0:#}")]
    Parse(anyhow::Error),

    /// A chart or spreadsheet could not be written.
    #[error("failed to write output: {0:#}")]
    Output(anyhow::Error),
}
