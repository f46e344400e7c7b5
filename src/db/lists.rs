use crate::libs::list::TodoList;
use anyhow::Result;
use chrono::Local;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_LIST: &str = "INSERT INTO lists (name, created_at) VALUES (?1, ?2)";
const SELECT_LISTS: &str = "SELECT id, name, created_at FROM lists ORDER BY id";
const SELECT_LIST_BY_NAME: &str = "SELECT id, name, created_at FROM lists WHERE name = ?1 ORDER BY id LIMIT 1";
const DELETE_LIST: &str = "DELETE FROM lists WHERE name = ?1";

/// SQL for the `lists` table over a borrowed connection.
pub struct Lists<'a> {
    conn: &'a Connection,
}

impl<'a> Lists<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Lists { conn }
    }

    pub fn insert(&self, name: &str) -> Result<TodoList> {
        let created_at = Local::now().naive_local();
        self.conn.execute(INSERT_LIST, params![name, created_at])?;

        Ok(TodoList {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            created_at: Some(created_at),
        })
    }

    pub fn fetch(&self) -> Result<Vec<TodoList>> {
        let mut stmt = self.conn.prepare(SELECT_LISTS)?;
        let list_iter = stmt.query_map([], Self::from_row)?;

        let mut lists = Vec::new();
        for list in list_iter {
            lists.push(list?);
        }
        Ok(lists)
    }

    pub fn get_by_name(&self, name: &str) -> Result<Option<TodoList>> {
        self.conn
            .query_row(SELECT_LIST_BY_NAME, params![name], Self::from_row)
            .optional()
            .map_err(Into::into)
    }

    /// Deletes the list row only. Callers are responsible for its tasks.
    pub fn delete(&self, name: &str) -> Result<usize> {
        Ok(self.conn.execute(DELETE_LIST, params![name])?)
    }

    fn from_row(row: &Row) -> rusqlite::Result<TodoList> {
        Ok(TodoList {
            id: row.get(0)?,
            name: row.get(1)?,
            created_at: row.get(2)?,
        })
    }
}
