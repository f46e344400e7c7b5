//! # Checkmate - named to-do lists in the terminal
//!
//! An interactive utility for keeping several to-do lists, checking tasks
//! off and persisting everything to a local SQLite file.
//!
//! ## Features
//!
//! - **Lists**: Create, select and delete named lists
//! - **Tasks**: Add tasks to the selected list, check them off, delete them
//! - **Persistence**: Every action is committed to SQLite immediately
//! - **Pluggable Storage**: The controller works against any [`db::store::Store`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use checkmate::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
