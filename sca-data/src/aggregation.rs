use sca_ee::record::SnowRecord;
use sca_utils::dates;
use serde::Serialize;
use std::collections::BTreeMap;

/// Default bin count for the distribution histogram.
pub const HISTOGRAM_BINS: usize = 30;

/// Average snow cover for one calendar month across all years, feeding the
/// seasonal bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyMean {
    pub month: u32,
    pub month_name: &'static str,
    pub mean: f64,
}

/// One row of the annual summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualSummary {
    pub year: i32,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub count: usize,
}

/// One bar of the distribution histogram: [start, end) except the last
/// bin, which includes its upper edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Mean snow cover per calendar month, ordered January to December.
/// Months with no observations are omitted.
pub fn monthly_means(records: &[SnowRecord]) -> Vec<MonthlyMean> {
    let mut by_month: BTreeMap<u32, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = by_month.entry(record.month).or_insert((0.0, 0));
        entry.0 += record.snow_cover_percent;
        entry.1 += 1;
    }
    by_month
        .into_iter()
        .map(|(month, (sum, n))| MonthlyMean {
            month,
            month_name: dates::month_name(month),
            mean: sum / n as f64,
        })
        .collect()
}

/// Per-year mean/max/min/count, ordered by year.
pub fn annual_summary(records: &[SnowRecord]) -> Vec<AnnualSummary> {
    let mut by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for record in records {
        by_year
            .entry(record.year)
            .or_default()
            .push(record.snow_cover_percent);
    }
    by_year
        .into_iter()
        .map(|(year, vals)| AnnualSummary {
            year,
            mean: vals.iter().sum::<f64>() / vals.len() as f64,
            max: vals.iter().copied().fold(f64::MIN, f64::max),
            min: vals.iter().copied().fold(f64::MAX, f64::min),
            count: vals.len(),
        })
        .collect()
}

/// Equal-width histogram over the observed value range.
///
/// A degenerate range (all values equal) yields a single bin holding
/// everything. Empty input yields no bins.
pub fn histogram(records: &[SnowRecord], bins: usize) -> Vec<HistogramBin> {
    if records.is_empty() || bins == 0 {
        return Vec::new();
    }
    let values: Vec<f64> = records.iter().map(|r| r.snow_cover_percent).collect();
    let min = values.iter().copied().fold(f64::MAX, f64::min);
    let max = values.iter().copied().fold(f64::MIN, f64::max);

    if max == min {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for value in &values {
        let mut index = ((value - min) / width) as usize;
        // the maximum lands in the last bin
        if index >= bins {
            index = bins - 1;
        }
        counts[index] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: min + width * i as f64,
            end: min + width * (i + 1) as f64,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: (i32, u32, u32), percent: f64) -> SnowRecord {
        let d = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        SnowRecord {
            date: d,
            snow_cover_percent: percent,
            year: date.0,
            month: date.1,
            swe_estimate: None,
            doy: None,
        }
    }

    #[test]
    fn test_monthly_means() {
        let records = vec![
            record((2022, 1, 1), 80.0),
            record((2023, 1, 1), 60.0),
            record((2022, 7, 1), 10.0),
        ];
        let means = monthly_means(&records);
        assert_eq!(means.len(), 2);
        assert_eq!(means[0].month, 1);
        assert_eq!(means[0].month_name, "Jan");
        assert!((means[0].mean - 70.0).abs() < 1e-9);
        assert_eq!(means[1].month_name, "Jul");
    }

    #[test]
    fn test_annual_summary() {
        let records = vec![
            record((2022, 1, 1), 80.0),
            record((2022, 2, 1), 40.0),
            record((2023, 1, 1), 60.0),
        ];
        let summary = annual_summary(&records);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].year, 2022);
        assert_eq!(summary[0].count, 2);
        assert_eq!(summary[0].max, 80.0);
        assert_eq!(summary[0].min, 40.0);
        assert!((summary[0].mean - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_histogram_counts_everything() {
        let records: Vec<SnowRecord> = (0..100)
            .map(|i| record((2022, 1, 1), i as f64))
            .collect();
        let bins = histogram(&records, HISTOGRAM_BINS);
        assert_eq!(bins.len(), HISTOGRAM_BINS);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 100);
        // the maximum value falls into the final bin
        assert!(bins.last().unwrap().count >= 1);
    }

    #[test]
    fn test_histogram_degenerate_range() {
        let records = vec![record((2022, 1, 1), 50.0), record((2022, 1, 2), 50.0)];
        let bins = histogram(&records, 30);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 2);
    }

    #[test]
    fn test_histogram_empty() {
        assert!(histogram(&[], 30).is_empty());
    }
}
