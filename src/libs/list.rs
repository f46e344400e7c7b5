use chrono::NaiveDateTime;

/// A named collection of tasks.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoList {
    pub id: i64,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

impl TodoList {
    pub fn new(id: i64, name: &str) -> Self {
        TodoList {
            id,
            name: name.to_string(),
            created_at: None,
        }
    }
}
