//! Storage capability set consumed by the controller.
//!
//! The controller never sees SQL. Anything that can create, read, update and
//! delete lists and tasks can back a session: [`Db`](super::db::Db) for the
//! real SQLite file, [`MemoryStore`](super::memory::MemoryStore) for tests.

use crate::libs::list::TodoList;
use crate::libs::task::Task;
use anyhow::Result;

pub trait Store {
    /// All lists in creation order.
    fn lists(&mut self) -> Result<Vec<TodoList>>;

    fn find_list(&mut self, name: &str) -> Result<Option<TodoList>>;

    fn insert_list(&mut self, name: &str) -> Result<TodoList>;

    /// Removes every list row with this name and every task that references it.
    ///
    /// Returns the number of tasks removed.
    fn delete_list(&mut self, name: &str) -> Result<usize>;

    /// Tasks of one list in creation order.
    fn tasks(&mut self, list_name: &str) -> Result<Vec<Task>>;

    fn insert_task(&mut self, list_name: &str, title: &str) -> Result<Task>;

    fn set_completed(&mut self, id: i64, completed: bool) -> Result<()>;

    fn delete_task(&mut self, id: i64) -> Result<()>;

    /// Removes every task of one list. Returns the number removed.
    fn delete_tasks(&mut self, list_name: &str) -> Result<usize>;
}
