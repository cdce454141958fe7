use anyhow::{Context, Result};
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::aggregate::{GroupTotal, MonthlyTotal};

const WIDE: (u32, u32) = (1000, 500);
const TALL: (u32, u32) = (1000, 600);

fn headroom(max: u64) -> u64 {
    max + max / 10 + 1
}

/// Line chart of monthly totals, one series per year, months 1-12 on the
/// x-axis. Overwrites `path`. An empty aggregate produces a blank image.
pub fn monthly_trend_chart(path: &Path, monthly: &[MonthlyTotal]) -> Result<()> {
    let root = BitMapBackend::new(path, WIDE).into_drawing_area();
    root.fill(&WHITE)?;

    if monthly.is_empty() {
        root.present()?;
        return Ok(());
    }

    let mut by_year: BTreeMap<i32, Vec<(u32, u64)>> = BTreeMap::new();
    for m in monthly {
        by_year.entry(m.year).or_default().push((m.month, m.laid_off));
    }
    let y_max = headroom(monthly.iter().map(|m| m.laid_off).max().unwrap_or(0));

    let mut chart = ChartBuilder::on(&root)
        .caption("Monthly Total Employees Laid Off", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(1u32..13u32, 0u64..y_max)?;

    chart
        .configure_mesh()
        .x_labels(12)
        .x_desc("Month")
        .y_desc("Total Employees Laid Off")
        .draw()?;

    for (idx, (year, points)) in by_year.iter().enumerate() {
        let color = Palette99::pick(idx).mix(0.9);
        chart
            .draw_series(
                LineSeries::new(points.iter().copied(), color.stroke_width(2)).point_size(3),
            )?
            .label(year.to_string())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present().context("writing monthly trend chart")?;
    info!(path = %path.display(), "wrote chart");
    Ok(())
}

/// Vertical bar chart of company totals (already truncated by the caller).
pub fn company_bar_chart(path: &Path, companies: &[GroupTotal]) -> Result<()> {
    let root = BitMapBackend::new(path, WIDE).into_drawing_area();
    root.fill(&WHITE)?;

    if companies.is_empty() {
        root.present()?;
        return Ok(());
    }

    let names: Vec<String> = companies.iter().map(|c| c.name.clone()).collect();
    let y_max = headroom(companies.iter().map(|c| c.laid_off).max().unwrap_or(0));

    let mut chart = ChartBuilder::on(&root)
        .caption("Top 10 Companies by Total Layoffs", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d((0..companies.len()).into_segmented(), 0u64..y_max)?;

    chart
        .configure_mesh()
        .x_labels(companies.len())
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                names.get(*i).cloned().unwrap_or_default()
            }
            _ => String::new(),
        })
        .x_desc("Company")
        .y_desc("Total Employees Laid Off")
        .draw()?;

    chart.draw_series(companies.iter().enumerate().map(|(i, c)| {
        Rectangle::new(
            [
                (SegmentValue::Exact(i), 0u64),
                (SegmentValue::Exact(i + 1), c.laid_off),
            ],
            BLUE.filled(),
        )
    }))?;

    root.present().context("writing company bar chart")?;
    info!(path = %path.display(), "wrote chart");
    Ok(())
}

/// Horizontal bar chart of industry totals (already truncated by the caller).
pub fn industry_bar_chart(path: &Path, industries: &[GroupTotal]) -> Result<()> {
    let root = BitMapBackend::new(path, TALL).into_drawing_area();
    root.fill(&WHITE)?;

    if industries.is_empty() {
        root.present()?;
        return Ok(());
    }

    let names: Vec<String> = industries.iter().map(|c| c.name.clone()).collect();
    let x_max = headroom(industries.iter().map(|c| c.laid_off).max().unwrap_or(0));

    let mut chart = ChartBuilder::on(&root)
        .caption("Top 15 Industries by Total Layoffs", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(140)
        .build_cartesian_2d(0u64..x_max, (0..industries.len()).into_segmented())?;

    chart
        .configure_mesh()
        .y_labels(industries.len())
        .y_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                names.get(*i).cloned().unwrap_or_default()
            }
            _ => String::new(),
        })
        .x_desc("Total Employees Laid Off")
        .draw()?;

    chart.draw_series(industries.iter().enumerate().map(|(i, c)| {
        Rectangle::new(
            [
                (0u64, SegmentValue::Exact(i)),
                (c.laid_off, SegmentValue::Exact(i + 1)),
            ],
            BLUE.filled(),
        )
    }))?;

    root.present().context("writing industry bar chart")?;
    info!(path = %path.display(), "wrote chart");
    Ok(())
}
