#[cfg(test)]
mod tests {
    use checkmate::db::db::Db;
    use checkmate::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("task_lists.db");
            MigrationTestContext { _temp_dir: temp_dir, db_path }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_automatically(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();

        let version = get_db_version(&db.conn).unwrap();
        assert_eq!(version, MigrationManager::new().latest_version());
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_connection_needs_migration(ctx: &mut MigrationTestContext) {
        let conn = Db::open_without_migrations(&ctx.db_path).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = Db::open_without_migrations(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert_eq!(history.len(), 2);
        for (i, (version, _, _)) in history.iter().enumerate() {
            assert_eq!(*version as usize, i + 1);
        }
        assert_eq!(history[0].1, "create_lists_and_tasks");
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_unmigrated_database_has_empty_history(ctx: &mut MigrationTestContext) {
        let conn = Db::open_without_migrations(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();

        assert!(manager.get_migration_history(&conn).unwrap().is_empty());
        assert_eq!(manager.current_version(&conn).unwrap(), 0);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = Db::open_without_migrations(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let version1 = get_db_version(&conn).unwrap();

        manager.run_migrations(&mut conn).unwrap();
        let version2 = get_db_version(&conn).unwrap();

        assert_eq!(version1, version2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopening_keeps_data(ctx: &mut MigrationTestContext) {
        use checkmate::db::store::Store;

        {
            let mut db = Db::open(&ctx.db_path).unwrap();
            db.insert_list("Groceries").unwrap();
        }

        let mut db = Db::open(&ctx.db_path).unwrap();
        assert_eq!(db.lists().unwrap().len(), 1);
    }
}
