use std::collections::{BTreeMap, HashMap};

use crate::clean::LayoffRecord;

/// Companies shown in the bar chart and exported to the company summary.
pub const TOP_COMPANIES: usize = 10;
/// Industries shown in the horizontal bar chart; the export keeps the full set.
pub const CHART_TOP_INDUSTRIES: usize = 15;

/// Summed layoffs for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub year: i32,
    pub month: u32,
    pub laid_off: u64,
}

/// Summed layoffs for one company or one industry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTotal {
    pub name: String,
    pub laid_off: u64,
}

/// Sum of Laid_Off per (Year, Month), ascending by key.
pub fn monthly_totals(records: &[LayoffRecord]) -> Vec<MonthlyTotal> {
    let mut sums: BTreeMap<(i32, u32), u64> = BTreeMap::new();
    for r in records {
        *sums.entry((r.year, r.month)).or_insert(0) += r.laid_off;
    }
    sums.into_iter()
        .map(|((year, month), laid_off)| MonthlyTotal {
            year,
            month,
            laid_off,
        })
        .collect()
}

/// Sum per key, descending by total. Equal totals keep the order the keys
/// first appeared in the cleaned table (the accumulation order is
/// first-seen and the sort is stable).
fn group_totals<'a, I>(keys: I) -> Vec<GroupTotal>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let mut order: Vec<GroupTotal> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for (name, laid_off) in keys {
        match index.get(name) {
            Some(&i) => order[i].laid_off += laid_off,
            None => {
                index.insert(name.to_string(), order.len());
                order.push(GroupTotal {
                    name: name.to_string(),
                    laid_off,
                });
            }
        }
    }
    order.sort_by(|a, b| b.laid_off.cmp(&a.laid_off));
    order
}

/// Sum of Laid_Off per company, descending.
pub fn company_totals(records: &[LayoffRecord]) -> Vec<GroupTotal> {
    group_totals(records.iter().map(|r| (r.company.as_str(), r.laid_off)))
}

/// Sum of Laid_Off per industry, descending. Rows with no industry are
/// excluded here but still count toward the other aggregates.
pub fn industry_totals(records: &[LayoffRecord]) -> Vec<GroupTotal> {
    group_totals(
        records
            .iter()
            .filter_map(|r| r.industry.as_deref().map(|ind| (ind, r.laid_off))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(company: &str, ymd: (i32, u32, u32), laid_off: u64, industry: &str) -> LayoffRecord {
        let date = NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap();
        LayoffRecord {
            company: company.to_string(),
            date,
            year: ymd.0,
            month: ymd.1,
            laid_off,
            industry: if industry.is_empty() {
                None
            } else {
                Some(industry.to_string())
            },
        }
    }

    #[test]
    fn monthly_sums_match_table_total() {
        let records = vec![
            record("A", (2023, 1, 5), 10, "Tech"),
            record("B", (2023, 1, 20), 20, "Retail"),
            record("A", (2023, 2, 1), 5, "Tech"),
            record("C", (2022, 12, 31), 7, "Tech"),
        ];
        let monthly = monthly_totals(&records);
        let table_total: u64 = records.iter().map(|r| r.laid_off).sum();
        let monthly_total: u64 = monthly.iter().map(|m| m.laid_off).sum();
        assert_eq!(monthly_total, table_total);
        // Ascending (Year, Month) order.
        assert_eq!(
            monthly
                .iter()
                .map(|m| (m.year, m.month))
                .collect::<Vec<_>>(),
            vec![(2022, 12), (2023, 1), (2023, 2)]
        );
        assert_eq!(monthly[1].laid_off, 30);
    }

    #[test]
    fn company_totals_sorted_descending() {
        let records = vec![
            record("Small", (2023, 1, 1), 5, "Tech"),
            record("Big", (2023, 1, 1), 100, "Tech"),
            record("Big", (2023, 2, 1), 50, "Tech"),
            record("Mid", (2023, 1, 1), 60, "Tech"),
        ];
        let totals = company_totals(&records);
        assert_eq!(totals[0].name, "Big");
        assert_eq!(totals[0].laid_off, 150);
        let values: Vec<u64> = totals.iter().map(|t| t.laid_off).collect();
        let mut sorted = values.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(values, sorted);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let records = vec![
            record("Zeta", (2023, 1, 1), 40, "Tech"),
            record("Alpha", (2023, 1, 2), 40, "Tech"),
        ];
        let totals = company_totals(&records);
        assert_eq!(totals[0].name, "Zeta");
        assert_eq!(totals[1].name, "Alpha");
    }

    #[test]
    fn null_industry_excluded_from_industry_totals_only() {
        let records = vec![
            record("A", (2023, 1, 1), 10, "Tech"),
            record("B", (2023, 1, 1), 20, ""),
        ];
        let industries = industry_totals(&records);
        assert_eq!(industries.len(), 1);
        assert_eq!(industries[0].laid_off, 10);
        assert_eq!(company_totals(&records).len(), 2);
        assert_eq!(monthly_totals(&records)[0].laid_off, 30);
    }

    #[test]
    fn empty_input_yields_empty_aggregates() {
        assert!(monthly_totals(&[]).is_empty());
        assert!(company_totals(&[]).is_empty());
        assert!(industry_totals(&[]).is_empty());
    }
}
