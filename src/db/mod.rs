//! Persistence layer.
//!
//! One SQLite file holds two tables, `lists` and `tasks`, with tasks pointing
//! at their list by name. Access goes through the [`store::Store`] trait so
//! the controller can run against SQLite or against memory.
//!
//! ## Usage
//!
//! ```rust
//! use checkmate::db::{db::Db, store::Store};
//!
//! let mut db = Db::open_in_memory()?;
//! db.insert_list("Groceries")?;
//! db.insert_task("Groceries", "Milk")?;
//! assert_eq!(db.tasks("Groceries")?.len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection ownership and the SQLite [`store::Store`] implementation.
pub mod db;

/// Queries for the `lists` table.
pub mod lists;

/// In-memory [`store::Store`] implementation.
pub mod memory;

/// Versioned schema migrations.
pub mod migrations;

/// The storage capability set.
pub mod store;

/// Queries for the `tasks` table.
pub mod tasks;
