use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, NaiveDate};
use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::info;

/// Serde view of one source row. Only the four columns we care about are
/// named; everything else in the file is ignored. All fields are optional
/// because the dataset has holes.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Company")]
    company: Option<String>,
    #[serde(rename = "Date_layoffs")]
    date_layoffs: Option<String>,
    #[serde(rename = "Laid_Off")]
    laid_off: Option<f64>,
    #[serde(rename = "Industry")]
    industry: Option<String>,
}

/// One cleaned layoff event. Every field except `industry` is guaranteed
/// present; text fields are trimmed and title-cased.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoffRecord {
    pub company: String,
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub laid_off: u64,
    pub industry: Option<String>,
}

/// Date formats seen in the source data.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

fn parse_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    // Tolerate a trailing time component, e.g. "2023-05-10 00:00:00".
    let date_part = raw.split_whitespace().next().unwrap_or(raw);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
        .ok_or_else(|| anyhow!("unparsable date value {raw:?}"))
}

/// Title-case in the sense the source data was normalized with: a letter
/// that follows a non-letter is uppercased, every other letter lowercased.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_alpha = false;
    for c in raw.trim().chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Parse the CSV text and clean it: rows missing Company, Date_layoffs or
/// Laid_Off are dropped whole; surviving rows get a parsed date, derived
/// month/year, and normalized text. A malformed CSV or an unparsable date
/// on a surviving row is fatal.
pub fn parse_and_clean(csv_text: &str) -> Result<Vec<LayoffRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for (i, row) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = row.with_context(|| format!("malformed CSV record {}", i + 1))?;

        let (company, date_raw, laid_off) = match (raw.company, raw.date_layoffs, raw.laid_off) {
            (Some(c), Some(d), Some(n)) if !c.trim().is_empty() && !d.trim().is_empty() => {
                (c, d, n)
            }
            _ => {
                dropped += 1;
                continue;
            }
        };

        let date = parse_date(&date_raw).with_context(|| format!("record {}", i + 1))?;
        records.push(LayoffRecord {
            company: title_case(&company),
            date,
            year: date.year(),
            month: date.month(),
            laid_off: laid_off.max(0.0).round() as u64,
            industry: raw
                .industry
                .as_deref()
                .map(title_case)
                .filter(|s| !s.is_empty()),
        });
    }

    info!(
        retained = records.len(),
        dropped, "cleaned layoff records"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Company,Location,Date_layoffs,Laid_Off,Industry\n";

    #[test]
    fn title_cases_and_trims() {
        assert_eq!(title_case("acme corp"), "Acme Corp");
        assert_eq!(title_case("  tech "), "Tech");
        assert_eq!(title_case("E-COMMERCE"), "E-Commerce");
        assert_eq!(title_case("other"), "Other");
    }

    #[test]
    fn scenario_single_row() {
        let csv = format!("{HEADER}acme corp,NYC,2023-05-10,100,tech \n");
        let records = parse_and_clean(&csv).unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.company, "Acme Corp");
        assert_eq!(r.industry.as_deref(), Some("Tech"));
        assert_eq!((r.year, r.month, r.laid_off), (2023, 5, 100));
    }

    #[test]
    fn drops_rows_missing_required_fields() {
        let csv = format!(
            "{HEADER}\
             acme,NYC,2023-05-10,,tech\n\
             ,NYC,2023-05-10,50,tech\n\
             beta,NYC,,50,tech\n\
             gamma,NYC,2023-06-01,50,\n"
        );
        let records = parse_and_clean(&csv).unwrap();
        // Only gamma survives; its missing industry is tolerated.
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].company, "Gamma");
        assert_eq!(records[0].industry, None);
    }

    #[test]
    fn unparsable_date_is_fatal() {
        let csv = format!("{HEADER}acme,NYC,not-a-date,100,tech\n");
        assert!(parse_and_clean(&csv).is_err());
    }

    #[test]
    fn empty_input_yields_no_records() {
        let records = parse_and_clean(HEADER).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "Company,Date_layoffs,Laid_Off,Industry,Stage,Country\n\
                   acme,2024-01-02,10,tech,Post-IPO,USA\n";
        let records = parse_and_clean(csv).unwrap();
        assert_eq!(records.len(), 1);
    }
}
