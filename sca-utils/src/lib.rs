//! Shared utility functions for SCA crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Format a NaiveDate as "YYYYMMDD" (compact database key format)
    pub fn format_date_compact(date: &NaiveDate) -> String {
        date.format("%Y%m%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Parse a date string in "YYYYMMDD" format
    pub fn parse_date_compact(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y%m%d")?)
    }

    /// Day of year for a date (Jan 1 = 1, Dec 31 = 365/366).
    pub fn day_of_year(date: &NaiveDate) -> i32 {
        use chrono::Datelike;
        date.ordinal() as i32
    }

    /// Three-letter month name for a 1-based month number.
    /// Out-of-range months yield "???".
    pub fn month_name(month: u32) -> &'static str {
        match month {
            1 => "Jan",
            2 => "Feb",
            3 => "Mar",
            4 => "Apr",
            5 => "May",
            6 => "Jun",
            7 => "Jul",
            8 => "Aug",
            9 => "Sep",
            10 => "Oct",
            11 => "Nov",
            12 => "Dec",
            _ => "???",
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_compact_round_trip() {
            let date = NaiveDate::from_ymd_opt(2022, 1, 9).unwrap();
            assert_eq!(format_date_compact(&date), "20220109");
            assert_eq!(parse_date_compact("20220109").unwrap(), date);
        }

        #[test]
        fn test_day_of_year() {
            let jan1 = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
            assert_eq!(day_of_year(&jan1), 1);
            let dec31 = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
            assert_eq!(day_of_year(&dec31), 365);
            let leap = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
            assert_eq!(day_of_year(&leap), 366);
        }

        #[test]
        fn test_month_name() {
            assert_eq!(month_name(1), "Jan");
            assert_eq!(month_name(12), "Dec");
            assert_eq!(month_name(0), "???");
            assert_eq!(month_name(13), "???");
        }
    }
}

/// Numeric helpers shared by the statistics and report crates.
pub mod numeric {
    /// Quantile of a sorted slice using linear interpolation between
    /// the two nearest ranks. `q` must be in [0, 1].
    ///
    /// Returns None for an empty slice.
    pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
        if sorted.is_empty() {
            return None;
        }
        if sorted.len() == 1 {
            return Some(sorted[0]);
        }
        let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
        let lower = pos.floor() as usize;
        let upper = pos.ceil() as usize;
        if lower == upper {
            return Some(sorted[lower]);
        }
        let weight = pos - lower as f64;
        Some(sorted[lower] * (1.0 - weight) + sorted[upper] * weight)
    }

    /// Quantile of an unsorted slice. Sorts a copy internally.
    pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        quantile_sorted(&sorted, q)
    }

}
