//! SQLite persistence for suggestions and employees.
//!
//! This is the synchronous half of the storage layer. The async
//! [`crate::repository::Repository`] opens a [`Database`] per operation on a
//! blocking thread.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod employee_queries;
pub mod migrations;
pub mod suggestion_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens a database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
