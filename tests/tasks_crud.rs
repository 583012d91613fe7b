#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use ticklist::db::db::Db;
    use ticklist::libs::check_list::CheckList;
    use ticklist::libs::controller::{Status, StoreError, TaskController, TaskService};
    use ticklist::libs::task::Task;

    struct TaskTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("tasks.db");
            TaskTestContext { _temp_dir: temp_dir, db_path }
        }
    }

    impl TaskTestContext {
        fn controller_with_list(&self, name: &str) -> (TaskController, i32) {
            let mut controller = TaskController::new(Db::open(&self.db_path).unwrap());
            let list_id = controller.add_check_list(&CheckList::new(name, "")).unwrap();
            (controller, list_id)
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_added_task_is_fetched_not_done(ctx: &mut TaskTestContext) {
        let (mut controller, list_id) = ctx.controller_with_list("Home");

        let result = controller.add_task(&Task::new("Buy milk", "2026-10-20", Some(list_id)));
        assert_eq!(Status::of(&result), Status::Ok);
        let id = result.unwrap();

        let tasks = controller.get_tasks(list_id).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, Some(id));
        assert_eq!(tasks[0].description, "Buy milk");
        assert_eq!(tasks[0].due_date, "2026-10-20");
        assert!(!tasks[0].done);
        assert_eq!(tasks[0].list_id, Some(list_id));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_tasks_come_back_in_insertion_order(ctx: &mut TaskTestContext) {
        let (mut controller, list_id) = ctx.controller_with_list("Home");

        for description in ["Buy milk", "Read a book", "Clean"] {
            controller.add_task(&Task::new(description, "", Some(list_id))).unwrap();
        }

        let tasks = controller.get_tasks(list_id).unwrap();
        let descriptions: Vec<&str> = tasks.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Buy milk", "Read a book", "Clean"]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_tasks_are_scoped_to_their_list(ctx: &mut TaskTestContext) {
        let (mut controller, home) = ctx.controller_with_list("Home");
        let work = controller.add_check_list(&CheckList::new("Work", "")).unwrap();

        controller.add_task(&Task::new("Buy milk", "", Some(home))).unwrap();
        controller.add_task(&Task::new("Write report", "", Some(work))).unwrap();

        let home_tasks = controller.get_tasks(home).unwrap();
        assert_eq!(home_tasks.len(), 1);
        assert_eq!(home_tasks[0].description, "Buy milk");

        let work_tasks = controller.get_tasks(work).unwrap();
        assert_eq!(work_tasks.len(), 1);
        assert_eq!(work_tasks[0].description, "Write report");

        assert_eq!(controller.get_all_tasks().unwrap().len(), 2);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_toggling_done_changes_nothing_else(ctx: &mut TaskTestContext) {
        let (mut controller, list_id) = ctx.controller_with_list("Home");
        controller.add_task(&Task::new("Buy milk", "2026-10-20", Some(list_id))).unwrap();
        let original = controller.get_tasks(list_id).unwrap().remove(0);

        let mut task = original.clone();
        task.done = true;
        controller.update_task(&task).unwrap();

        let fetched = controller.get_tasks(list_id).unwrap().remove(0);
        assert!(fetched.done);
        assert_eq!(fetched.id, original.id);
        assert_eq!(fetched.description, original.description);
        assert_eq!(fetched.due_date, original.due_date);
        assert_eq!(fetched.list_id, original.list_id);

        task.done = false;
        controller.update_task(&task).unwrap();
        assert_eq!(controller.get_tasks(list_id).unwrap().remove(0), original);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_requires_a_stored_task(ctx: &mut TaskTestContext) {
        let (mut controller, list_id) = ctx.controller_with_list("Home");

        let unsaved = Task::new("Never stored", "", Some(list_id));
        assert!(matches!(controller.update_task(&unsaved), Err(StoreError::Unsaved)));

        let mut missing = unsaved.clone();
        missing.id = Some(42);
        let result = controller.update_task(&missing);
        assert_eq!(Status::of(&result), Status::Error);
        assert!(matches!(result, Err(StoreError::NotFound(42))));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_for_unknown_list_violates_foreign_key(ctx: &mut TaskTestContext) {
        let (mut controller, _) = ctx.controller_with_list("Home");

        let result = controller.add_task(&Task::new("Orphan", "", Some(999)));
        assert!(matches!(result, Err(StoreError::Statement(_))));
        assert!(!result.unwrap_err().to_string().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_task_by_id(ctx: &mut TaskTestContext) {
        let (mut controller, list_id) = ctx.controller_with_list("Home");
        let id = controller.add_task(&Task::new("Buy milk", "", Some(list_id))).unwrap();

        assert_eq!(controller.get_task(id).unwrap().description, "Buy milk");
        assert!(matches!(controller.get_task(id + 1), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_task_from_entry_text() {
        let task = Task::from_entry("  Buy milk  ", Some(1)).unwrap();
        assert_eq!(task.description, "Buy milk");
        assert_eq!(task.due_date, "");
        assert!(!task.done);
        assert_eq!(task.list_id, Some(1));

        let task = Task::from_entry("Pay rent @2026-11-01", Some(1)).unwrap();
        assert_eq!(task.description, "Pay rent");
        assert_eq!(task.due_date, "2026-11-01");

        // Not a date, so it stays part of the description
        let task = Task::from_entry("Email @bob", None).unwrap();
        assert_eq!(task.description, "Email @bob");
        assert_eq!(task.due_date, "");

        assert!(Task::from_entry("   ", Some(1)).is_none());
    }
}
