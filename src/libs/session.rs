use super::list::TodoList;
use super::task::Task;

/// Application state owned by the controller.
///
/// Holds the list panel contents, the selected list and the task cache for
/// that list. Tasks are only ever cached for the selected list.
#[derive(Debug, Default)]
pub struct Session {
    lists: Vec<TodoList>,
    selected: Option<String>,
    tasks: Vec<Task>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub(crate) fn set_lists(&mut self, lists: Vec<TodoList>) {
        self.lists = lists;
    }

    /// Switches the selection and replaces the cache in one step.
    pub(crate) fn select(&mut self, name: &str, tasks: Vec<Task>) {
        self.selected = Some(name.to_string());
        self.tasks = tasks;
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected = None;
        self.tasks.clear();
    }

    pub(crate) fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub(crate) fn task_mut(&mut self, id: i64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// First checked task in panel order.
    pub(crate) fn first_checked(&self) -> Option<&Task> {
        self.tasks.iter().find(|t| t.completed)
    }

    pub(crate) fn remove_task(&mut self, id: i64) {
        self.tasks.retain(|t| t.id != id);
    }

    pub(crate) fn clear_tasks(&mut self) {
        self.tasks.clear();
    }
}
