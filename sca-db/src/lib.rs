//! In-memory SQLite layer for snow cover analysis runs.
//!
//! After a dashboard fetches and reshapes one analysis run, the records are
//! mirrored into an in-memory SQLite database so date-range re-slicing and
//! the chart groupings (monthly means, annual summary) can be answered with
//! SQL `GROUP BY` queries instead of refetching from the platform.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in
//!   single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via
//!   `wasm32-unknown-unknown`)
//! - Typed query methods returning serializable structs for JSON export to
//!   the D3.js chart bridge
//!
//! # Tables
//!
//! See [`schema::create_schema`]:
//! - `watersheds` - watershed names for the selection dropdown
//! - `snow_records` - one row per satellite image of the current run

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding one snow analysis run.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
