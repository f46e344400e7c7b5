//! User actions over a [`Store`].
//!
//! Each action validates its input, performs one store mutation, then reloads
//! whatever the panels show. Validation failures come back as
//! [`Outcome::Rejected`] with nothing changed; storage faults propagate as
//! errors.
//!
//! ```rust
//! use checkmate::db::memory::MemoryStore;
//! use checkmate::libs::controller::Controller;
//!
//! let mut app = Controller::new(MemoryStore::new())?;
//! app.create_list("Groceries")?;
//! app.add_task("Milk")?;
//! assert_eq!(app.session().tasks().len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::messages::Message;
use super::outcome::{Outcome, Rejection};
use super::session::Session;
use crate::db::store::Store;
use crate::msg_debug;
use anyhow::Result;

pub struct Controller<S: Store> {
    store: S,
    session: Session,
}

impl<S: Store> Controller<S> {
    /// Wraps a store and loads the list panel.
    pub fn new(store: S) -> Result<Self> {
        let mut controller = Controller {
            store,
            session: Session::new(),
        };
        controller.refresh_lists()?;
        Ok(controller)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn create_list(&mut self, name: &str) -> Result<Outcome> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(Rejection::EmptyListName.into());
        }
        if self.store.find_list(name)?.is_some() {
            return Ok(Rejection::DuplicateListName(name.to_string()).into());
        }

        let list = self.store.insert_list(name)?;
        msg_debug!(format!("Created list {} ({})", list.name, list.id));
        self.refresh_lists()?;
        self.load(name)?;

        Ok(Outcome::Applied)
    }

    pub fn select_list(&mut self, name: &str) -> Result<Outcome> {
        if self.store.find_list(name)?.is_none() {
            return Ok(Rejection::UnknownList(name.to_string()).into());
        }

        self.load(name)?;
        Ok(Outcome::Applied)
    }

    /// Deletes the selected list and its tasks once `confirm` agrees.
    pub fn delete_list<F>(&mut self, confirm: F) -> Result<Outcome>
    where
        F: FnOnce(&Message) -> Result<bool>,
    {
        let Some(name) = self.session.selected().map(str::to_string) else {
            return Ok(Rejection::NoListSelected.into());
        };

        if !confirm(&Message::ConfirmDeleteList(name.clone()))? {
            return Ok(Outcome::Cancelled);
        }

        let removed = self.store.delete_list(&name)?;
        msg_debug!(format!("Deleted list {} with {} task(s)", name, removed));
        self.session.clear_selection();
        self.refresh_lists()?;

        Ok(Outcome::Applied)
    }

    pub fn add_task(&mut self, title: &str) -> Result<Outcome> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(Rejection::EmptyTaskTitle.into());
        }
        let Some(list_name) = self.session.selected().map(str::to_string) else {
            return Ok(Rejection::NoListSelected.into());
        };

        let task = self.store.insert_task(&list_name, title)?;
        self.session.push_task(task);

        Ok(Outcome::Applied)
    }

    pub fn toggle_task(&mut self, id: i64, completed: bool) -> Result<Outcome> {
        if self.session.task_mut(id).is_none() {
            return Ok(Rejection::UnknownTask(id).into());
        }

        self.store.set_completed(id, completed)?;
        if let Some(task) = self.session.task_mut(id) {
            task.completed = completed;
        }

        Ok(Outcome::Applied)
    }

    /// Deletes the first checked task of the selected list.
    pub fn delete_checked_task(&mut self) -> Result<Outcome> {
        let Some(id) = self.session.first_checked().map(|t| t.id) else {
            return Ok(Rejection::NoTaskChecked.into());
        };

        self.store.delete_task(id)?;
        self.session.remove_task(id);

        Ok(Outcome::Applied)
    }

    /// Empties the selected list once `confirm` agrees.
    pub fn delete_all_tasks<F>(&mut self, confirm: F) -> Result<Outcome>
    where
        F: FnOnce(&Message) -> Result<bool>,
    {
        let Some(name) = self.session.selected().map(str::to_string) else {
            return Ok(Rejection::NoListSelected.into());
        };

        let count = self.session.tasks().len();
        if !confirm(&Message::ConfirmDeleteAllTasks(name.clone(), count))? {
            return Ok(Outcome::Cancelled);
        }

        self.store.delete_tasks(&name)?;
        self.session.clear_tasks();

        Ok(Outcome::Applied)
    }

    fn refresh_lists(&mut self) -> Result<()> {
        let lists = self.store.lists()?;
        self.session.set_lists(lists);
        Ok(())
    }

    fn load(&mut self, name: &str) -> Result<()> {
        let tasks = self.store.tasks(name)?;
        self.session.select(name, tasks);
        Ok(())
    }
}
