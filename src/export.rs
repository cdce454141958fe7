use anyhow::{Context, Result};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook};
use std::path::Path;
use tracing::info;

use crate::aggregate::{GroupTotal, MonthlyTotal};

/// Pinned workbook creation timestamp so identical runs produce
/// byte-identical files.
fn workbook() -> Result<Workbook> {
    let created = ExcelDateTime::from_ymd(2020, 1, 1).context("building workbook timestamp")?;
    let props = DocProperties::new().set_creation_datetime(&created);
    let mut wb = Workbook::new();
    wb.set_properties(&props);
    Ok(wb)
}

fn save(mut wb: Workbook, path: &Path) -> Result<()> {
    wb.save(path)
        .with_context(|| format!("saving {}", path.display()))?;
    info!(path = %path.display(), "wrote summary");
    Ok(())
}

/// Write the monthly aggregate: columns Year, Month, Laid_Off.
pub fn write_monthly_summary(path: &Path, monthly: &[MonthlyTotal]) -> Result<()> {
    let mut wb = workbook()?;
    let sheet = wb.add_worksheet();
    sheet.write_string(0, 0, "Year")?;
    sheet.write_string(0, 1, "Month")?;
    sheet.write_string(0, 2, "Laid_Off")?;
    for (i, m) in monthly.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_number(row, 0, m.year as f64)?;
        sheet.write_number(row, 1, m.month as f64)?;
        sheet.write_number(row, 2, m.laid_off as f64)?;
    }
    save(wb, path)
}

/// Write a keyed aggregate: one key column (Company or Industry) and the
/// summed Laid_Off column.
pub fn write_group_summary(path: &Path, key_header: &str, totals: &[GroupTotal]) -> Result<()> {
    let mut wb = workbook()?;
    let sheet = wb.add_worksheet();
    sheet.write_string(0, 0, key_header)?;
    sheet.write_string(0, 1, "Laid_Off")?;
    for (i, t) in totals.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, t.name.as_str())?;
        sheet.write_number(row, 1, t.laid_off as f64)?;
    }
    save(wb, path)
}
