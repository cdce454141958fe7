use std::path::{Path, PathBuf};

/// Published dataset of tech layoffs reported between 2020 and 2025.
pub const DEFAULT_INPUT_URL: &str =
    "https://raw.githubusercontent.com/gsaipriyank/tech_layoffs_til_2025/refs/heads/main/tech_layoffs_til_2025.csv";

pub const MONTHLY_CHART_FILE: &str = "monthly_total_layoffs.png";
pub const COMPANY_CHART_FILE: &str = "top_10_companies_total_layoffs.png";
pub const INDUSTRY_CHART_FILE: &str = "industry_total_layoffs.png";
pub const MONTHLY_SUMMARY_FILE: &str = "monthly_summary.xlsx";
pub const COMPANY_SUMMARY_FILE: &str = "top_companies_summary.xlsx";
pub const INDUSTRY_SUMMARY_FILE: &str = "industry_summary.xlsx";

/// Everything a single run needs to know: where the CSV lives and where the
/// charts and summaries go. Built once in `main` and passed down; no stage
/// reads configuration from anywhere else.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// An `http(s)://` URL or a local filesystem path to the source CSV.
    pub input_location: String,
    /// Directory all output files are written under. Created if absent.
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_location: DEFAULT_INPUT_URL.to_string(),
            output_dir: PathBuf::from("Output"),
        }
    }
}

impl RunConfig {
    pub fn new(input_location: impl Into<String>, output_dir: impl AsRef<Path>) -> Self {
        Self {
            input_location: input_location.into(),
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
