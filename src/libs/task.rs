use chrono::NaiveDateTime;

/// A single to-do item belonging to exactly one list.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    /// Owning list, referenced by name.
    pub list_name: String,
    pub created_at: Option<NaiveDateTime>,
}

impl Task {
    pub fn new(id: i64, title: &str, list_name: &str) -> Self {
        Task {
            id,
            title: title.to_string(),
            completed: false,
            list_name: list_name.to_string(),
            created_at: None,
        }
    }

    /// Checkbox marker used by the task panel.
    pub fn marker(&self) -> &'static str {
        if self.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_unchecked() {
        let task = Task::new(7, "Milk", "Groceries");
        assert!(!task.completed);
        assert_eq!(task.marker(), "[ ]");
        assert_eq!(task.list_name, "Groceries");
    }
}
