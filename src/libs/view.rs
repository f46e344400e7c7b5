use super::list::TodoList;
use super::messages::Message;
use super::task::Task;
use prettytable::{row, Table};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct View {}

impl View {
    /// List panel. The selected list is marked with an arrow.
    pub fn list_panel(lists: &[TodoList], selected: Option<&str>) -> Table {
        let mut table = Table::new();

        table.set_titles(row!["", "LIST", "CREATED"]);
        for list in lists {
            let marker = if selected == Some(list.name.as_str()) { "▶" } else { "" };
            let created = list.created_at.map(|ts| ts.format(TIMESTAMP_FORMAT).to_string()).unwrap_or_default();
            table.add_row(row![marker, list.name, created]);
        }

        table
    }

    /// Task panel, rebuilt from scratch: one row per cached task, or a
    /// single placeholder row when the selected list is empty.
    pub fn task_panel(tasks: &[Task]) -> Table {
        let mut table = Table::new();

        table.set_titles(row!["DONE", "TASK"]);
        if tasks.is_empty() {
            let placeholder = Message::EmptyTaskPanel.to_string();
            table.add_row(row!["", placeholder]);
        }
        for task in tasks {
            table.add_row(row![task.marker(), task.title]);
        }

        table
    }

    /// Applied schema migrations, oldest first.
    pub fn migration_panel(history: &[(u32, String, String)]) -> Table {
        let mut table = Table::new();

        table.set_titles(row!["VERSION", "NAME", "APPLIED"]);
        for (version, name, applied_at) in history {
            let version = format!("v{}", version);
            table.add_row(row![version, name, applied_at]);
        }

        table
    }

    pub fn lists(lists: &[TodoList], selected: Option<&str>) {
        Self::list_panel(lists, selected).printstd();
    }

    pub fn tasks(tasks: &[Task]) {
        Self::task_panel(tasks).printstd();
    }

    pub fn migrations(history: &[(u32, String, String)]) {
        Self::migration_panel(history).printstd();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_panel_has_one_row_per_task() {
        let mut done = Task::new(2, "Bread", "Groceries");
        done.completed = true;
        let tasks = vec![Task::new(1, "Milk", "Groceries"), done];

        let table = View::task_panel(&tasks);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get_row(0).unwrap().get_cell(0).unwrap().get_content(), "[ ]");
        assert_eq!(table.get_row(1).unwrap().get_cell(0).unwrap().get_content(), "[x]");
        assert_eq!(table.get_row(1).unwrap().get_cell(1).unwrap().get_content(), "Bread");
    }

    #[test]
    fn empty_task_panel_shows_placeholder() {
        let table = View::task_panel(&[]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get_row(0).unwrap().get_cell(0).unwrap().get_content(), "");
        assert_eq!(table.get_row(0).unwrap().get_cell(1).unwrap().get_content(), "No tasks yet");
    }

    #[test]
    fn migration_panel_lists_versions_in_order() {
        let history = vec![
            (1, "create_lists_and_tasks".to_string(), "2026-01-02 10:00:00".to_string()),
            (2, "index_tasks_by_list".to_string(), "2026-01-02 10:00:00".to_string()),
        ];

        let table = View::migration_panel(&history);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get_row(0).unwrap().get_cell(0).unwrap().get_content(), "v1");
        assert_eq!(table.get_row(1).unwrap().get_cell(1).unwrap().get_content(), "index_tasks_by_list");
        assert_eq!(table.get_row(1).unwrap().get_cell(2).unwrap().get_content(), "2026-01-02 10:00:00");
    }

    #[test]
    fn list_panel_marks_selection() {
        let lists = vec![TodoList::new(1, "Home"), TodoList::new(2, "Work")];
        let table = View::list_panel(&lists, Some("Work"));
        assert_eq!(table.get_row(0).unwrap().get_cell(0).unwrap().get_content(), "");
        assert_eq!(table.get_row(1).unwrap().get_cell(0).unwrap().get_content(), "▶");
    }
}
