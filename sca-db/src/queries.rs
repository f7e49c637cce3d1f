//! Typed query methods for slicing the loaded analysis run.
//!
//! All queries return typed structs from [`crate::models`] that can be
//! serialized to JSON for the D3.js chart bridge. Dates are compact
//! `YYYYMMDD` strings throughout, matching the primary key format.

use crate::models::{AnnualSummaryRow, DateSnowSwe, DateValue, MonthlyMeanRow};
use crate::Database;
use rusqlite::params;

impl Database {
    /// Watershed names for the dropdown, sorted.
    pub fn query_watersheds(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT name FROM watersheds ORDER BY name")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// Snow cover time series within a date range, ordered chronologically.
    pub fn query_time_series(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> anyhow::Result<Vec<DateValue>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT date, snow_percent FROM snow_records
             WHERE date >= ?1 AND date <= ?2
             ORDER BY date",
        )?;
        let rows = stmt
            .query_map(params![start_date, end_date], |row| {
                Ok(DateValue {
                    date: row.get(0)?,
                    value: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_time_series returned {} records", rows.len());
        Ok(rows)
    }

    /// Full rows (snow % + SWE) within a date range, for the dual-axis
    /// point analysis chart.
    pub fn query_records(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> anyhow::Result<Vec<DateSnowSwe>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT date, snow_percent, swe FROM snow_records
             WHERE date >= ?1 AND date <= ?2
             ORDER BY date",
        )?;
        let rows = stmt
            .query_map(params![start_date, end_date], |row| {
                Ok(DateSnowSwe {
                    date: row.get(0)?,
                    snow_percent: row.get(1)?,
                    swe: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_records returned {} records", rows.len());
        Ok(rows)
    }

    /// Mean snow cover per calendar month over the whole run, ordered by
    /// month. Feeds the seasonal bar chart.
    pub fn query_monthly_means(&self) -> anyhow::Result<Vec<MonthlyMeanRow>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT month, AVG(snow_percent) FROM snow_records
             GROUP BY month
             ORDER BY month",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(MonthlyMeanRow {
                    month: row.get::<_, i64>(0)? as u32,
                    mean: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Per-year mean/max/min/count over the whole run, ordered by year.
    /// Feeds the annual summary table.
    pub fn query_annual_summary(&self) -> anyhow::Result<Vec<AnnualSummaryRow>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT year, AVG(snow_percent), MAX(snow_percent), MIN(snow_percent), COUNT(*)
             FROM snow_records
             GROUP BY year
             ORDER BY year",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(AnnualSummaryRow {
                    year: row.get::<_, i64>(0)? as i32,
                    mean: row.get(1)?,
                    max: row.get(2)?,
                    min: row.get(3)?,
                    count: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Earliest and latest record dates of the loaded run, as compact
    /// strings. Both empty when no run is loaded.
    pub fn query_record_date_range(&self) -> anyhow::Result<(String, String)> {
        let conn = self.conn.borrow();
        let (min, max): (Option<String>, Option<String>) = conn.query_row(
            "SELECT MIN(date), MAX(date) FROM snow_records",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok((min.unwrap_or_default(), max.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use chrono::NaiveDate;
    use sca_ee::record::SnowRecord;

    fn record(date: (i32, u32, u32), percent: f64, swe: Option<f64>) -> SnowRecord {
        let d = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        SnowRecord {
            date: d,
            snow_cover_percent: percent,
            year: date.0,
            month: date.1,
            swe_estimate: swe,
            doy: None,
        }
    }

    fn loaded_db() -> Database {
        let db = Database::new().unwrap();
        db.load_records(&[
            record((2022, 1, 1), 80.0, Some(40.0)),
            record((2022, 1, 15), 90.0, Some(45.0)),
            record((2022, 7, 1), 10.0, Some(5.0)),
            record((2023, 1, 1), 60.0, Some(30.0)),
        ])
        .unwrap();
        db
    }

    #[test]
    fn test_time_series_range_and_order() {
        let db = loaded_db();
        let rows = db.query_time_series("20220101", "20221231").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].date, "20220101");
        assert_eq!(rows[2].date, "20220701");

        let narrowed = db.query_time_series("20220110", "20220131").unwrap();
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].value, 90.0);
    }

    #[test]
    fn test_monthly_means() {
        let db = loaded_db();
        let rows = db.query_monthly_means().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].month, 1);
        assert!((rows[0].mean - (80.0 + 90.0 + 60.0) / 3.0).abs() < 1e-9);
        assert_eq!(rows[1].month, 7);
    }

    #[test]
    fn test_annual_summary() {
        let db = loaded_db();
        let rows = db.query_annual_summary().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, 2022);
        assert_eq!(rows[0].count, 3);
        assert_eq!(rows[0].max, 90.0);
        assert_eq!(rows[0].min, 10.0);
        assert_eq!(rows[1].year, 2023);
    }

    #[test]
    fn test_record_date_range() {
        let db = loaded_db();
        let (min, max) = db.query_record_date_range().unwrap();
        assert_eq!(min, "20220101");
        assert_eq!(max, "20230101");
    }

    #[test]
    fn test_records_carry_swe() {
        let db = loaded_db();
        let rows = db.query_records("20220101", "20230101").unwrap();
        assert_eq!(rows[0].swe, Some(40.0));
    }
}
