use chrono::NaiveDate;
use sca_ee::record::SnowRecord;
use sca_utils::{dates, numeric};
use serde::Serialize;
use std::collections::BTreeMap;

/// Snow cover above this percentage counts as a "high snow" day for the
/// persistence analysis.
pub const HIGH_SNOW_THRESHOLD: f64 = 50.0;

/// The summary statistics block shown as metric cards and exported with
/// every report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub std: f64,
    pub count: usize,
    /// Images the platform processed, before null-metric rows were dropped.
    pub images_processed: usize,
}

impl AnalysisSummary {
    /// Compute the summary block. Returns None for an empty table.
    pub fn from_records(records: &[SnowRecord], images_processed: usize) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        let values: Vec<f64> = records.iter().map(|r| r.snow_cover_percent).collect();
        Some(AnalysisSummary {
            mean: mean(&values),
            max: values.iter().copied().fold(f64::MIN, f64::max),
            min: values.iter().copied().fold(f64::MAX, f64::min),
            std: sample_std(&values),
            count: values.len(),
            images_processed,
        })
    }
}

/// Mean, spread, and quartiles of the snow cover series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicStats {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub q25: f64,
    pub q75: f64,
}

/// Per-month statistics across all years in the series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStats {
    pub month: u32,
    pub mean: f64,
    pub std: f64,
    pub count: usize,
}

/// Per-calendar-year statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualStats {
    pub year: i32,
    pub mean: f64,
    pub std: f64,
    pub count: usize,
}

/// Days with snow cover above [`HIGH_SNOW_THRESHOLD`] relative to the
/// whole series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Persistence {
    pub high_snow_days: usize,
    pub total_days: usize,
    pub persistence_ratio: f64,
}

/// Date, day-of-year, and value of the series maximum. The first
/// occurrence wins on ties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeakTiming {
    pub peak_date: NaiveDate,
    pub peak_doy: i32,
    pub peak_value: f64,
}

/// The advanced statistics panel: quartiles, seasonal and annual
/// breakdowns, snow persistence, and peak timing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvancedStatistics {
    pub basic: BasicStats,
    pub seasonal: Vec<MonthlyStats>,
    pub annual: Vec<AnnualStats>,
    pub persistence: Persistence,
    pub peak_timing: PeakTiming,
}

impl AdvancedStatistics {
    /// Compute the advanced panel. Returns None for an empty table.
    pub fn from_records(records: &[SnowRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        let values: Vec<f64> = records.iter().map(|r| r.snow_cover_percent).collect();
        let mut sorted = values.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let basic = BasicStats {
            mean: mean(&values),
            median: numeric::quantile_sorted(&sorted, 0.5)?,
            std: sample_std(&values),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            q25: numeric::quantile_sorted(&sorted, 0.25)?,
            q75: numeric::quantile_sorted(&sorted, 0.75)?,
        };

        let mut by_month: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
        let mut by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
        for record in records {
            by_month
                .entry(record.month)
                .or_default()
                .push(record.snow_cover_percent);
            by_year
                .entry(record.year)
                .or_default()
                .push(record.snow_cover_percent);
        }
        let seasonal = by_month
            .into_iter()
            .map(|(month, vals)| MonthlyStats {
                month,
                mean: mean(&vals),
                std: sample_std(&vals),
                count: vals.len(),
            })
            .collect();
        let annual = by_year
            .into_iter()
            .map(|(year, vals)| AnnualStats {
                year,
                mean: mean(&vals),
                std: sample_std(&vals),
                count: vals.len(),
            })
            .collect();

        let high_snow_days = values
            .iter()
            .filter(|v| **v > HIGH_SNOW_THRESHOLD)
            .count();
        let persistence = Persistence {
            high_snow_days,
            total_days: values.len(),
            persistence_ratio: high_snow_days as f64 / values.len() as f64,
        };

        let peak = records
            .iter()
            .reduce(|best, r| {
                if r.snow_cover_percent > best.snow_cover_percent {
                    r
                } else {
                    best
                }
            })?;
        let peak_timing = PeakTiming {
            peak_date: peak.date,
            peak_doy: peak.doy.unwrap_or_else(|| dates::day_of_year(&peak.date)),
            peak_value: peak.snow_cover_percent,
        };

        Some(AdvancedStatistics {
            basic,
            seasonal,
            annual,
            persistence,
            peak_timing,
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator). Zero for a single
/// observation, so exports never carry non-finite values.
fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}
