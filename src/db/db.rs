use super::lists::Lists;
use super::migrations::init_with_migrations;
use super::store::Store;
use super::tasks::Tasks;
use crate::libs::list::TodoList;
use crate::libs::task::Task;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "task_lists.db";

/// Owner of the single SQLite connection.
///
/// Both constructors bring the schema up to date before returning. The file
/// location is resolved by `Config::database_path`.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn open(path: &Path) -> Result<Db> {
        msg_debug!(format!("Opening database {}", path.display()));
        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    pub fn open_in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens a raw connection without touching the schema.
    pub fn open_without_migrations(path: &Path) -> Result<Connection> {
        Ok(Connection::open(path)?)
    }
}

impl Store for Db {
    fn lists(&mut self) -> Result<Vec<TodoList>> {
        Lists::new(&self.conn).fetch()
    }

    fn find_list(&mut self, name: &str) -> Result<Option<TodoList>> {
        Lists::new(&self.conn).get_by_name(name)
    }

    fn insert_list(&mut self, name: &str) -> Result<TodoList> {
        Lists::new(&self.conn).insert(name)
    }

    fn delete_list(&mut self, name: &str) -> Result<usize> {
        let tx = self.conn.transaction()?;
        Lists::new(&tx).delete(name)?;
        let removed = Tasks::new(&tx).delete_by_list(name)?;
        tx.commit()?;

        Ok(removed)
    }

    fn tasks(&mut self, list_name: &str) -> Result<Vec<Task>> {
        Tasks::new(&self.conn).fetch(list_name)
    }

    fn insert_task(&mut self, list_name: &str, title: &str) -> Result<Task> {
        Tasks::new(&self.conn).insert(list_name, title)
    }

    fn set_completed(&mut self, id: i64, completed: bool) -> Result<()> {
        Tasks::new(&self.conn).set_completed(id, completed)
    }

    fn delete_task(&mut self, id: i64) -> Result<()> {
        Tasks::new(&self.conn).delete(id)
    }

    fn delete_tasks(&mut self, list_name: &str) -> Result<usize> {
        Tasks::new(&self.conn).delete_by_list(list_name)
    }
}
