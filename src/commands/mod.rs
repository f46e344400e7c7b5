pub mod init;
pub mod interactive;
pub mod lists;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod tasks;

use crate::{
    db::db::Db,
    libs::{config::Config, logging, messages::Message},
    msg_debug,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show all lists")]
    Lists,
    #[command(about = "Show the tasks of one list")]
    Tasks(tasks::TasksArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Without a subcommand the interactive session starts
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        logging::init();

        match cli.command {
            Some(Commands::Init(args)) => init::cmd(args),
            Some(Commands::Lists) => lists::cmd(open(cli.db.as_deref())?.1),
            Some(Commands::Tasks(args)) => tasks::cmd(args, open(cli.db.as_deref())?.1),
            #[cfg(debug_assertions)]
            Some(Commands::Migrations(args)) => migrations::cmd(args, &open_config(cli.db.as_deref())?.1),
            None => {
                let (config, db) = open(cli.db.as_deref())?;
                interactive::cmd(db, &config)
            }
        }
    }
}

fn open_config(db: Option<&Path>) -> Result<(Config, PathBuf)> {
    let config = Config::read()?;
    let path = config.database_path(db)?;
    msg_debug!(Message::UsingDatabase(path.display().to_string()));
    Ok((config, path))
}

fn open(db: Option<&Path>) -> Result<(Config, Db)> {
    let (config, path) = open_config(db)?;
    let db = Db::open(&path)?;
    Ok((config, db))
}
