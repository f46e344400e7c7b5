#[cfg(test)]
mod tests {
    use anyhow::Result;
    use checkmate::db::db::Db;
    use checkmate::db::store::Store;
    use checkmate::libs::controller::Controller;
    use checkmate::libs::messages::Message;
    use checkmate::libs::outcome::{Outcome, Rejection};
    use checkmate::libs::view::View;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct WorkflowTestContext {
        app: Controller<Db>,
        _temp_dir: TempDir,
    }

    impl TestContext for WorkflowTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(&temp_dir.path().join("task_lists.db")).unwrap();
            let app = Controller::new(db).unwrap();
            WorkflowTestContext { app, _temp_dir: temp_dir }
        }
    }

    fn yes(_: &Message) -> Result<bool> {
        Ok(true)
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_empty_list_name_changes_nothing(ctx: &mut WorkflowTestContext) {
        let outcome = ctx.app.create_list("").unwrap();

        assert_eq!(outcome, Outcome::Rejected(Rejection::EmptyListName));
        assert!(ctx.app.session().lists().is_empty());
        assert!(ctx.app.store_mut().lists().unwrap().is_empty());
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_create_list_selects_it(ctx: &mut WorkflowTestContext) {
        let outcome = ctx.app.create_list("Groceries").unwrap();

        assert!(outcome.is_applied());
        assert_eq!(ctx.app.store_mut().lists().unwrap().len(), 1);
        assert_eq!(ctx.app.session().lists().len(), 1);
        assert_eq!(ctx.app.session().selected(), Some("Groceries"));
        assert!(ctx.app.session().tasks().is_empty());
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_add_task_shows_in_panel(ctx: &mut WorkflowTestContext) {
        ctx.app.create_list("Groceries").unwrap();
        assert!(ctx.app.add_task("Milk").unwrap().is_applied());

        let tasks = ctx.app.session().tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Milk");
        assert!(!tasks[0].completed);
        assert_eq!(View::task_panel(tasks).len(), 1);
        assert_eq!(ctx.app.store_mut().tasks("Groceries").unwrap().len(), 1);
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_empty_task_title_is_rejected(ctx: &mut WorkflowTestContext) {
        ctx.app.create_list("Groceries").unwrap();

        assert_eq!(ctx.app.add_task("  ").unwrap(), Outcome::Rejected(Rejection::EmptyTaskTitle));
        assert!(ctx.app.session().tasks().is_empty());
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_toggle_survives_reselect(ctx: &mut WorkflowTestContext) {
        ctx.app.create_list("Groceries").unwrap();
        ctx.app.add_task("Milk").unwrap();
        let id = ctx.app.session().tasks()[0].id;

        assert!(ctx.app.toggle_task(id, true).unwrap().is_applied());
        assert!(ctx.app.session().tasks()[0].completed);

        ctx.app.create_list("Hardware").unwrap();
        assert!(ctx.app.session().tasks().is_empty());

        ctx.app.select_list("Groceries").unwrap();
        assert!(ctx.app.session().tasks()[0].completed);
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_duplicate_titles_are_independent(ctx: &mut WorkflowTestContext) {
        ctx.app.create_list("Groceries").unwrap();
        ctx.app.add_task("Milk").unwrap();
        ctx.app.add_task("Milk").unwrap();
        let second = ctx.app.session().tasks()[1].id;

        ctx.app.toggle_task(second, true).unwrap();
        assert!(ctx.app.delete_checked_task().unwrap().is_applied());

        let stored = ctx.app.store_mut().tasks("Groceries").unwrap();
        assert_eq!(stored.len(), 1);
        assert_ne!(stored[0].id, second);
        assert!(!stored[0].completed);
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_delete_checked_removes_first_checked(ctx: &mut WorkflowTestContext) {
        ctx.app.create_list("Groceries").unwrap();
        for title in ["Milk", "Bread", "Eggs"] {
            ctx.app.add_task(title).unwrap();
        }
        let ids: Vec<i64> = ctx.app.session().tasks().iter().map(|t| t.id).collect();
        ctx.app.toggle_task(ids[1], true).unwrap();
        ctx.app.toggle_task(ids[2], true).unwrap();

        ctx.app.delete_checked_task().unwrap();

        let titles: Vec<String> = ctx.app.session().tasks().iter().map(|t| t.title.clone()).collect();
        assert_eq!(titles, vec!["Milk", "Eggs"]);
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_unknown_list_selection_is_rejected(ctx: &mut WorkflowTestContext) {
        ctx.app.create_list("Groceries").unwrap();

        let outcome = ctx.app.select_list("Garden").unwrap();
        assert_eq!(outcome, Outcome::Rejected(Rejection::UnknownList("Garden".to_string())));
        assert_eq!(ctx.app.session().selected(), Some("Groceries"));
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_delete_list_removes_its_tasks(ctx: &mut WorkflowTestContext) {
        ctx.app.create_list("Groceries").unwrap();
        ctx.app.add_task("Milk").unwrap();
        ctx.app.add_task("Bread").unwrap();

        assert!(ctx.app.delete_list(yes).unwrap().is_applied());

        assert!(ctx.app.session().lists().is_empty());
        assert!(ctx.app.session().selected().is_none());
        assert!(ctx.app.store_mut().tasks("Groceries").unwrap().is_empty());
        assert_eq!(ctx.app.delete_list(yes).unwrap(), Outcome::Rejected(Rejection::NoListSelected));
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_delete_all_tasks_leaves_other_lists(ctx: &mut WorkflowTestContext) {
        ctx.app.create_list("Work").unwrap();
        ctx.app.add_task("Report").unwrap();
        ctx.app.create_list("Groceries").unwrap();
        ctx.app.add_task("Milk").unwrap();
        ctx.app.add_task("Bread").unwrap();

        assert!(ctx.app.delete_all_tasks(yes).unwrap().is_applied());

        assert!(ctx.app.session().tasks().is_empty());
        let panel = View::task_panel(ctx.app.session().tasks());
        assert_eq!(panel.len(), 1);
        assert_eq!(panel.get_row(0).unwrap().get_cell(1).unwrap().get_content(), "No tasks yet");
        assert!(ctx.app.store_mut().tasks("Groceries").unwrap().is_empty());
        assert_eq!(ctx.app.store_mut().tasks("Work").unwrap().len(), 1);
        assert_eq!(ctx.app.session().lists().len(), 2);
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_delete_all_without_selection(ctx: &mut WorkflowTestContext) {
        let outcome = ctx.app.delete_all_tasks(yes).unwrap();
        assert_eq!(outcome, Outcome::Rejected(Rejection::NoListSelected));
    }
}
