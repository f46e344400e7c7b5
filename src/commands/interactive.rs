//! The interactive session: a list panel, a task panel and a menu of actions.
//!
//! Every pass of the loop rebuilds both panels from the controller's session,
//! asks for one action, runs it and reports the outcome. Leaving the menu
//! (Exit or Esc) drops the store and with it the database connection.

use crate::{
    db::store::Store,
    libs::{
        config::Config,
        controller::Controller,
        messages::Message,
        outcome::{Outcome, Rejection},
        task::Task,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    CreateList,
    SelectList,
    DeleteList,
    AddTask,
    ToggleTasks,
    DeleteTask,
    DeleteAllTasks,
    Exit,
}

const ACTIONS: [Action; 8] = [
    Action::CreateList,
    Action::SelectList,
    Action::DeleteList,
    Action::AddTask,
    Action::ToggleTasks,
    Action::DeleteTask,
    Action::DeleteAllTasks,
    Action::Exit,
];

impl Action {
    fn label(&self) -> &'static str {
        match self {
            Action::CreateList => "Create List",
            Action::SelectList => "Select List",
            Action::DeleteList => "Delete Selected List",
            Action::AddTask => "Add Task",
            Action::ToggleTasks => "Check / Uncheck Tasks",
            Action::DeleteTask => "Delete Task",
            Action::DeleteAllTasks => "Delete All Tasks",
            Action::Exit => "Exit",
        }
    }
}

pub fn cmd<S: Store>(store: S, config: &Config) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut app = Controller::new(store)?;
    let labels: Vec<&str> = ACTIONS.iter().map(Action::label).collect();

    msg_print!(Message::WindowTitle(config.title.clone()), true);

    loop {
        render(&app);

        let action = Select::with_theme(&theme)
            .with_prompt(Message::SelectAction.to_string())
            .items(&labels)
            .default(0)
            .interact_opt()?
            .map(|index| ACTIONS[index])
            .unwrap_or(Action::Exit);

        match action {
            Action::CreateList => create_list(&mut app, &theme)?,
            Action::SelectList => select_list(&mut app, &theme)?,
            Action::DeleteList => delete_list(&mut app, &theme)?,
            Action::AddTask => add_task(&mut app, &theme)?,
            Action::ToggleTasks => toggle_tasks(&mut app, &theme)?,
            Action::DeleteTask => delete_task(&mut app)?,
            Action::DeleteAllTasks => delete_all_tasks(&mut app, &theme)?,
            Action::Exit => break,
        }
    }

    msg_print!(Message::Goodbye);
    Ok(())
}

/// Rebuilds both panels from the session.
fn render<S: Store>(app: &Controller<S>) {
    let session = app.session();

    msg_print!(Message::ListsHeader);
    if session.lists().is_empty() {
        msg_info!(Message::NoListsFound);
    } else {
        View::lists(session.lists(), session.selected());
    }

    match session.selected() {
        Some(name) => {
            msg_print!(Message::TasksHeader(name.to_string()));
            View::tasks(session.tasks());
        }
        None => msg_info!(Message::NoListSelectedHint),
    }
}

fn report(outcome: Outcome, success: Message) {
    match outcome {
        Outcome::Applied => msg_success!(success),
        Outcome::Cancelled => msg_info!(Message::OperationCancelled),
        Outcome::Rejected(rejection) => msg_error!(Message::Rejected(rejection)),
    }
}

fn confirm(theme: &ColorfulTheme, prompt: &Message) -> Result<bool> {
    Ok(Confirm::with_theme(theme).with_prompt(prompt.to_string()).default(false).interact()?)
}

fn create_list<S: Store>(app: &mut Controller<S>, theme: &ColorfulTheme) -> Result<()> {
    let name: String = Input::with_theme(theme)
        .with_prompt(Message::PromptListName.to_string())
        .allow_empty(true)
        .interact_text()?;

    let outcome = app.create_list(&name)?;
    report(outcome, Message::ListCreated(name.trim().to_string()));
    Ok(())
}

fn select_list<S: Store>(app: &mut Controller<S>, theme: &ColorfulTheme) -> Result<()> {
    let names: Vec<String> = app.session().lists().iter().map(|l| l.name.clone()).collect();
    if names.is_empty() {
        msg_info!(Message::NoListsFound);
        return Ok(());
    }

    let current = app.session().selected().and_then(|s| names.iter().position(|n| n == s)).unwrap_or(0);
    let Some(index) = Select::with_theme(theme)
        .with_prompt(Message::PromptSelectList.to_string())
        .items(&names)
        .default(current)
        .interact_opt()?
    else {
        return Ok(());
    };

    let name = &names[index];
    let outcome = app.select_list(name)?;
    report(outcome, Message::ListSelected(name.clone()));
    Ok(())
}

fn delete_list<S: Store>(app: &mut Controller<S>, theme: &ColorfulTheme) -> Result<()> {
    let name = app.session().selected().unwrap_or_default().to_string();
    let count = app.session().tasks().len();

    let outcome = app.delete_list(|prompt| confirm(theme, prompt))?;
    report(outcome, Message::ListDeleted(name, count));
    Ok(())
}

fn add_task<S: Store>(app: &mut Controller<S>, theme: &ColorfulTheme) -> Result<()> {
    let title: String = Input::with_theme(theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .allow_empty(true)
        .interact_text()?;

    let outcome = app.add_task(&title)?;
    report(outcome, Message::TaskAdded(title.trim().to_string()));
    Ok(())
}

/// Shows every task as a checkbox and applies whatever the user flipped.
fn toggle_tasks<S: Store>(app: &mut Controller<S>, theme: &ColorfulTheme) -> Result<()> {
    let Some(name) = app.session().selected().map(str::to_string) else {
        msg_error!(Message::Rejected(Rejection::NoListSelected));
        return Ok(());
    };

    let tasks = app.session().tasks().to_vec();
    if tasks.is_empty() {
        msg_info!(Message::NoTasksInList(name));
        return Ok(());
    }

    let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
    let flags: Vec<bool> = tasks.iter().map(|t| t.completed).collect();
    let Some(checked) = MultiSelect::with_theme(theme)
        .with_prompt(Message::PromptToggleTasks.to_string())
        .items(&titles)
        .defaults(&flags)
        .interact_opt()?
    else {
        return Ok(());
    };

    for (id, completed) in changed(&tasks, &checked) {
        let title = tasks.iter().find(|t| t.id == id).map(|t| t.title.clone()).unwrap_or_default();
        let outcome = app.toggle_task(id, completed)?;
        let success = if completed { Message::TaskCompleted(title) } else { Message::TaskReopened(title) };
        report(outcome, success);
    }
    Ok(())
}

/// Pairs each task whose checkbox state differs from its stored state with
/// the new state. `checked` holds positions into `tasks`.
fn changed(tasks: &[Task], checked: &[usize]) -> Vec<(i64, bool)> {
    tasks
        .iter()
        .enumerate()
        .map(|(index, task)| (task, checked.contains(&index)))
        .filter(|(task, completed)| task.completed != *completed)
        .map(|(task, completed)| (task.id, completed))
        .collect()
}

fn delete_task<S: Store>(app: &mut Controller<S>) -> Result<()> {
    let title = app
        .session()
        .tasks()
        .iter()
        .find(|t| t.completed)
        .map(|t| t.title.clone())
        .unwrap_or_default();

    let outcome = app.delete_checked_task()?;
    report(outcome, Message::TaskDeleted(title));
    Ok(())
}

fn delete_all_tasks<S: Store>(app: &mut Controller<S>, theme: &ColorfulTheme) -> Result<()> {
    let count = app.session().tasks().len();

    let outcome = app.delete_all_tasks(|prompt| confirm(theme, prompt))?;
    report(outcome, Message::TasksDeletedCount(count));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_is_the_last_menu_entry() {
        assert_eq!(ACTIONS.last(), Some(&Action::Exit));
        assert_eq!(Action::DeleteList.label(), "Delete Selected List");
    }

    fn tasks() -> Vec<Task> {
        let mut done = Task::new(2, "Bread", "Groceries");
        done.completed = true;
        vec![Task::new(1, "Milk", "Groceries"), done, Task::new(3, "Eggs", "Groceries")]
    }

    #[test]
    fn untouched_selection_changes_nothing() {
        assert!(changed(&tasks(), &[1]).is_empty());
    }

    #[test]
    fn checking_and_unchecking_are_both_reported() {
        assert_eq!(changed(&tasks(), &[0, 2]), vec![(1, true), (2, false), (3, true)]);
    }

    #[test]
    fn unchecking_everything_reopens_completed_tasks_only() {
        assert_eq!(changed(&tasks(), &[]), vec![(2, false)]);
    }
}
