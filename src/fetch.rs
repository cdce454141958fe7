use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::fs;
use tracing::info;
use url::Url;

/// Fetch the source CSV as text. `location` is either an `http(s)://` URL
/// or a local filesystem path; an unreachable resource is fatal to the run.
pub fn fetch_csv(location: &str) -> Result<String> {
    if location.starts_with("http://") || location.starts_with("https://") {
        let url = Url::parse(location).with_context(|| format!("parsing input URL {location}"))?;
        info!(url = %url, "downloading source CSV");
        Client::new()
            .get(url.as_str())
            .send()
            .with_context(|| format!("GET {}", url))?
            .error_for_status()
            .with_context(|| format!("error status from {}", url))?
            .text()
            .with_context(|| format!("reading body from {}", url))
    } else {
        info!(path = %location, "reading source CSV");
        fs::read_to_string(location).with_context(|| format!("reading {location}"))
    }
}
