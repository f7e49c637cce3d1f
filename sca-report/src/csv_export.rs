//! CSV export of the analysis table.

use sca_ee::record::SnowRecord;
use sca_utils::dates;

/// Serialize records to CSV text.
///
/// Header is `date,snow_cover_percent,year,month`, extended with
/// `swe_estimate,doy` when any record carries the SWE columns. Dates are
/// `YYYY-MM-DD`; floats are written with Rust's shortest round-trip
/// formatting, so re-parsing reproduces the exact values.
pub fn records_to_csv(records: &[SnowRecord]) -> anyhow::Result<String> {
    let with_swe = SnowRecord::has_swe(records);
    let mut writer = csv::Writer::from_writer(Vec::new());

    if with_swe {
        writer.write_record(["date", "snow_cover_percent", "year", "month", "swe_estimate", "doy"])?;
    } else {
        writer.write_record(["date", "snow_cover_percent", "year", "month"])?;
    }

    for record in records {
        let date = dates::format_date(&record.date);
        let percent = record.snow_cover_percent.to_string();
        let year = record.year.to_string();
        let month = record.month.to_string();
        if with_swe {
            let swe = record.swe_estimate.map(|v| v.to_string()).unwrap_or_default();
            let doy = record.doy.map(|v| v.to_string()).unwrap_or_default();
            writer.write_record([date, percent, year, month, swe, doy])?;
        } else {
            writer.write_record([date, percent, year, month])?;
        }
    }

    Ok(String::from_utf8(writer.into_inner()?)?)
}

#[cfg(test)]
mod tests {
    use super::records_to_csv;
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
            doy: swe.map(|_| 1),
        }
    }

    #[test]
    fn test_basic_table() {
        let csv_text = records_to_csv(&[
            record((2022, 1, 1), 84.2, None),
            record((2022, 1, 2), 79.5, None),
        ])
        .unwrap();
        let mut lines = csv_text.lines();
        assert_eq!(lines.next(), Some("date,snow_cover_percent,year,month"));
        assert_eq!(lines.next(), Some("2022-01-01,84.2,2022,1"));
        assert_eq!(lines.next(), Some("2022-01-02,79.5,2022,1"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_swe_columns_added_when_present() {
        let csv_text = records_to_csv(&[record((2022, 1, 1), 50.0, Some(25.0))]).unwrap();
        assert!(csv_text.starts_with("date,snow_cover_percent,year,month,swe_estimate,doy"));
        assert!(csv_text.contains("2022-01-01,50,2022,1,25,1"));
    }

    #[test]
    fn test_numeric_round_trip() {
        let values = [84.2, 0.1, 33.333333333333336, 99.99999999999999];
        let records: Vec<SnowRecord> = values
            .iter()
            .enumerate()
            .map(|(i, v)| record((2022, 1, 1 + i as u32), *v, None))
            .collect();
        let csv_text = records_to_csv(&records).unwrap();

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_text.as_bytes());
        let parsed: Vec<f64> = rdr
            .records()
            .map(|r| r.unwrap().get(1).unwrap().parse().unwrap())
            .collect();
        assert_eq!(parsed, values, "CSV export must round-trip float precision");
    }

    #[test]
    fn test_empty_table() {
        let csv_text = records_to_csv(&[]).unwrap();
        assert_eq!(csv_text.trim_end(), "date,snow_cover_percent,year,month");
    }
}
