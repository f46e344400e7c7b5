use super::store::Store;
use crate::libs::list::TodoList;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::Local;

/// Volatile [`Store`] used by tests and by anything that needs a session
/// without a database file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    lists: Vec<TodoList>,
    tasks: Vec<Task>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// Every stored task, regardless of list.
    pub fn all_tasks(&self) -> &[Task] {
        &self.tasks
    }
}

impl Store for MemoryStore {
    fn lists(&mut self) -> Result<Vec<TodoList>> {
        Ok(self.lists.clone())
    }

    fn find_list(&mut self, name: &str) -> Result<Option<TodoList>> {
        Ok(self.lists.iter().find(|l| l.name == name).cloned())
    }

    fn insert_list(&mut self, name: &str) -> Result<TodoList> {
        let list = TodoList {
            id: self.next_id(),
            name: name.to_string(),
            created_at: Some(Local::now().naive_local()),
        };
        self.lists.push(list.clone());
        Ok(list)
    }

    fn delete_list(&mut self, name: &str) -> Result<usize> {
        self.lists.retain(|l| l.name != name);
        self.delete_tasks(name)
    }

    fn tasks(&mut self, list_name: &str) -> Result<Vec<Task>> {
        Ok(self.tasks.iter().filter(|t| t.list_name == list_name).cloned().collect())
    }

    fn insert_task(&mut self, list_name: &str, title: &str) -> Result<Task> {
        let mut task = Task::new(self.next_id(), title, list_name);
        task.created_at = Some(Local::now().naive_local());
        self.tasks.push(task.clone());
        Ok(task)
    }

    fn set_completed(&mut self, id: i64, completed: bool) -> Result<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFoundWithId(id)))?;
        task.completed = completed;
        Ok(())
    }

    fn delete_task(&mut self, id: i64) -> Result<()> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Err(msg_error_anyhow!(Message::TaskNotFoundWithId(id)));
        }
        Ok(())
    }

    fn delete_tasks(&mut self, list_name: &str) -> Result<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.list_name != list_name);
        Ok(before - self.tasks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_list_cascades_to_its_tasks_only() {
        let mut store = MemoryStore::new();
        store.insert_list("Home").unwrap();
        store.insert_list("Work").unwrap();
        store.insert_task("Home", "Dishes").unwrap();
        store.insert_task("Work", "Report").unwrap();

        assert_eq!(store.delete_list("Home").unwrap(), 1);
        assert!(store.find_list("Home").unwrap().is_none());
        assert_eq!(store.all_tasks().len(), 1);
        assert_eq!(store.all_tasks()[0].list_name, "Work");
    }

    #[test]
    fn missing_task_id_is_an_error() {
        let mut store = MemoryStore::new();
        assert!(store.set_completed(42, true).is_err());
        assert!(store.delete_task(42).is_err());
    }
}
