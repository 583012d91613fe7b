#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use ticklist::db::db::Db;
    use ticklist::libs::check_list::CheckList;
    use ticklist::libs::controller::{Status, StoreError, TaskController, TaskService};

    struct CheckListTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for CheckListTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("tasks.db");
            CheckListTestContext { _temp_dir: temp_dir, db_path }
        }
    }

    impl CheckListTestContext {
        fn controller(&self) -> TaskController {
            TaskController::new(Db::open(&self.db_path).unwrap())
        }
    }

    #[test_context(CheckListTestContext)]
    #[test]
    fn test_invalid_name_is_rejected_without_insert(ctx: &mut CheckListTestContext) {
        let mut controller = ctx.controller();

        let result = controller.add_check_list(&CheckList::new("My List!", ""));
        assert_eq!(Status::of(&result), Status::Error);
        assert_eq!(Status::of(&result).code(), 1);
        assert!(matches!(result, Err(StoreError::Validation(ref name)) if name == "My List!"));

        assert!(controller.get_check_lists().unwrap().is_empty());
    }

    #[test_context(CheckListTestContext)]
    #[test]
    fn test_valid_name_is_stored(ctx: &mut CheckListTestContext) {
        let mut controller = ctx.controller();

        let result = controller.add_check_list(&CheckList::new("My List", "weekend chores"));
        assert_eq!(Status::of(&result), Status::Ok);
        let id = result.unwrap();

        let lists = controller.get_check_lists().unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].id, Some(id));
        assert_eq!(lists[0].name, "My List");
        assert_eq!(lists[0].description, "weekend chores");
    }

    #[test_context(CheckListTestContext)]
    #[test]
    fn test_two_lists_get_distinct_ids(ctx: &mut CheckListTestContext) {
        let mut controller = ctx.controller();

        controller.add_check_list(&CheckList::new("A", "")).unwrap();
        controller.add_check_list(&CheckList::new("B", "")).unwrap();

        let lists = controller.get_check_lists().unwrap();
        let names: Vec<&str> = lists.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(lists[0].id.is_some());
        assert!(lists[1].id.is_some());
        assert_ne!(lists[0].id, lists[1].id);
    }

    #[test_context(CheckListTestContext)]
    #[test]
    fn test_name_longer_than_twenty_is_rejected(ctx: &mut CheckListTestContext) {
        let mut controller = ctx.controller();

        let result = controller.add_check_list(&CheckList::new("a very long list name", ""));
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(controller.get_check_lists().unwrap().is_empty());
    }

    #[test_context(CheckListTestContext)]
    #[test]
    fn test_find_check_list_by_id_or_name(ctx: &mut CheckListTestContext) {
        let mut controller = ctx.controller();
        let home = controller.add_check_list(&CheckList::new("Home", "")).unwrap();
        controller.add_check_list(&CheckList::new("Work", "")).unwrap();

        let by_id = controller.find_check_list(&home.to_string()).unwrap().unwrap();
        assert_eq!(by_id.name, "Home");

        let by_name = controller.find_check_list("Work").unwrap().unwrap();
        assert_eq!(by_name.name, "Work");

        assert!(controller.find_check_list("Garden").unwrap().is_none());
    }

    #[test_context(CheckListTestContext)]
    #[test]
    fn test_default_list_only_created_once(ctx: &mut CheckListTestContext) {
        let mut controller = ctx.controller();

        let created = controller.ensure_default_check_list("Tasks").unwrap();
        assert!(created.is_some());
        assert_eq!(controller.ensure_default_check_list("Tasks").unwrap(), None);

        let lists = controller.get_check_lists().unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].id, created);
    }

    #[test_context(CheckListTestContext)]
    #[test]
    fn test_id_beyond_i32_is_an_error(ctx: &mut CheckListTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();
        db.conn
            .execute("INSERT INTO CheckLists (ID, name) VALUES (?1, 'Last')", [i64::from(i32::MAX)])
            .unwrap();
        let mut controller = TaskController::new(db);

        let result = controller.add_check_list(&CheckList::new("Overflow", ""));
        assert_eq!(Status::of(&result), Status::Error);
        assert!(matches!(
            result,
            Err(StoreError::Statement(rusqlite::Error::IntegralValueOutOfRange(_, id))) if id == i64::from(i32::MAX) + 1
        ));
    }
}
