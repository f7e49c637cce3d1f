//! SQL schema for the in-memory analysis database.

/// Returns the full SQL schema as a single batch string.
///
/// Tables:
/// - `watersheds` - watershed names for the selection dropdown
/// - `snow_records` - one row per satellite image of the loaded run:
///   compact date key (YYYYMMDD), snow cover percent, optional SWE
///   estimate, and the precomputed year/month/doy grouping columns
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS watersheds (
        name TEXT PRIMARY KEY
    );

    CREATE TABLE IF NOT EXISTS snow_records (
        date TEXT PRIMARY KEY,
        snow_percent REAL NOT NULL,
        swe REAL,
        year INTEGER NOT NULL,
        month INTEGER NOT NULL,
        doy INTEGER
    );
    CREATE INDEX IF NOT EXISTS idx_records_year ON snow_records(year);
    CREATE INDEX IF NOT EXISTS idx_records_month ON snow_records(month);

    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for table in ["watersheds", "snow_records"] {
            let count: i64 = conn
                .query_row(
                    &format!(
                        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='{}'",
                        table
                    ),
                    [],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
