use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::Local;
use rusqlite::{params, Connection, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (title, completed, list_name, created_at) VALUES (?1, 0, ?2, ?3)";
const SELECT_TASKS_BY_LIST: &str = "SELECT id, title, completed, list_name, created_at FROM tasks WHERE list_name = ?1 ORDER BY id";
const UPDATE_COMPLETED: &str = "UPDATE tasks SET completed = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const DELETE_TASKS_BY_LIST: &str = "DELETE FROM tasks WHERE list_name = ?1";

/// SQL for the `tasks` table over a borrowed connection.
pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Tasks { conn }
    }

    pub fn insert(&self, list_name: &str, title: &str) -> Result<Task> {
        let created_at = Local::now().naive_local();
        self.conn.execute(INSERT_TASK, params![title, list_name, created_at])?;

        Ok(Task {
            id: self.conn.last_insert_rowid(),
            title: title.to_string(),
            completed: false,
            list_name: list_name.to_string(),
            created_at: Some(created_at),
        })
    }

    pub fn fetch(&self, list_name: &str) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(SELECT_TASKS_BY_LIST)?;
        let task_iter = stmt.query_map(params![list_name], Self::from_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    pub fn set_completed(&self, id: i64, completed: bool) -> Result<()> {
        let affected = self.conn.execute(UPDATE_COMPLETED, params![id, completed])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFoundWithId(id)));
        }
        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFoundWithId(id)));
        }
        Ok(())
    }

    pub fn delete_by_list(&self, list_name: &str) -> Result<usize> {
        Ok(self.conn.execute(DELETE_TASKS_BY_LIST, params![list_name])?)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            completed: row.get(2)?,
            list_name: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}
