//! Loaders for populating the in-memory analysis database.
//!
//! Records arrive either as reshaped [`SnowRecord`]s straight from a
//! platform response, or as CSV text in the export format
//! (`date,snow_cover_percent,year,month[,swe_estimate,doy]`, dates
//! `YYYY-MM-DD`, with headers).

use crate::Database;
use rusqlite::params;
use sca_ee::record::SnowRecord;

impl Database {
    /// Load watershed names for the selection dropdown.
    pub fn load_watersheds(&self, names: &[String]) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        for name in names {
            conn.execute(
                "INSERT OR REPLACE INTO watersheds (name) VALUES (?1)",
                params![name],
            )?;
        }
        log::info!("loader: loaded {} watersheds", names.len());
        Ok(())
    }

    /// Replace the loaded run with the given records.
    pub fn load_records(&self, records: &[SnowRecord]) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        conn.execute("DELETE FROM snow_records", [])?;
        for record in records {
            conn.execute(
                "INSERT OR REPLACE INTO snow_records (date, snow_percent, swe, year, month, doy)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    record.date.format("%Y%m%d").to_string(),
                    record.snow_cover_percent,
                    record.swe_estimate,
                    record.year,
                    record.month,
                    record.doy,
                ],
            )?;
        }
        log::info!("loader: loaded {} snow records", records.len());
        Ok(())
    }

    /// Load records from CSV text in the export format.
    ///
    /// Rows with unparseable dates or values are skipped.
    pub fn load_records_csv(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        conn.execute("DELETE FROM snow_records", [])?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let date = r.get(0).unwrap_or("").trim().replace('-', "");
            let percent: f64 = match r.get(1).unwrap_or("").trim().parse() {
                Ok(v) => v,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            if date.len() != 8 {
                skipped += 1;
                continue;
            }
            let year: i64 = r.get(2).unwrap_or("0").trim().parse().unwrap_or(0);
            let month: i64 = r.get(3).unwrap_or("0").trim().parse().unwrap_or(0);
            let swe: Option<f64> = r.get(4).and_then(|s| s.trim().parse().ok());
            let doy: Option<i64> = r.get(5).and_then(|s| s.trim().parse().ok());

            conn.execute(
                "INSERT OR REPLACE INTO snow_records (date, snow_percent, swe, year, month, doy)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![date, percent, swe, year, month, doy],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} records from CSV, skipped {}", count, skipped);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use chrono::NaiveDate;
    use sca_ee::record::SnowRecord;

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
    fn test_load_records_replaces_run() {
        let db = Database::new().unwrap();
        db.load_records(&[record((2022, 1, 1), 80.0), record((2022, 1, 2), 70.0)])
            .unwrap();
        let rows = db.query_records("20220101", "20221231").unwrap();
        assert_eq!(rows.len(), 2);

        db.load_records(&[record((2023, 1, 1), 60.0)]).unwrap();
        let rows = db.query_records("20220101", "20231231").unwrap();
        assert_eq!(rows.len(), 1, "loading a new run clears the old one");
    }

    #[test]
    fn test_load_records_csv() {
        let db = Database::new().unwrap();
        let csv_data = "\
date,snow_cover_percent,year,month,swe_estimate,doy
2022-01-01,84.2,2022,1,42.1,1
2022-01-02,,2022,1,,
2022-01-03,79.5,2022,1,39.7,3
";
        db.load_records_csv(csv_data).unwrap();
        let rows = db.query_records("20220101", "20220131").unwrap();
        assert_eq!(rows.len(), 2, "blank-value row is skipped");
        assert_eq!(rows[0].date, "20220101");
        assert_eq!(rows[0].swe, Some(42.1));
    }

    #[test]
    fn test_load_records_csv_without_swe_columns() {
        let db = Database::new().unwrap();
        let csv_data = "\
date,snow_cover_percent,year,month
2022-01-01,84.2,2022,1
";
        db.load_records_csv(csv_data).unwrap();
        let rows = db.query_records("20220101", "20220131").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].swe, None);
    }
}
