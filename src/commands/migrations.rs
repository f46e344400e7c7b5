//! Schema inspection for development builds.
//!
//! Both subcommands open the database without migrating it, so they report
//! the file as it is on disk.

use crate::{
    db::{db::Db, migrations::MigrationManager},
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use rusqlite::Connection;
use std::path::Path;

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show the schema version of the database file
    Status,
    /// Show every applied migration as a table
    History,
}

pub fn cmd(args: MigrationsArgs, db_path: &Path) -> Result<()> {
    let conn = Db::open_without_migrations(db_path)?;
    let manager = MigrationManager::new();

    match args.command {
        MigrationsCommand::Status => status(&manager, &conn),
        MigrationsCommand::History => history(&manager, &conn),
    }
}

fn status(manager: &MigrationManager, conn: &Connection) -> Result<()> {
    let version = manager.current_version(conn)?;

    msg_print!(Message::DatabaseVersion(version));
    if version < manager.latest_version() {
        msg_info!(Message::DatabaseNeedsUpdate);
    } else {
        msg_info!(Message::DatabaseUpToDate);
    }
    Ok(())
}

fn history(manager: &MigrationManager, conn: &Connection) -> Result<()> {
    let applied = manager.get_migration_history(conn)?;
    if applied.is_empty() {
        msg_info!(Message::NoMigrationsApplied);
        return Ok(());
    }

    msg_print!(Message::MigrationHistory, true);
    View::migrations(&applied);
    Ok(())
}
