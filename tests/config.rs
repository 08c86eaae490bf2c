#[cfg(test)]
mod tests {
    use jtbd::libs::config::{Config, ConfigUpdate};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the home directory at a fresh temporary directory.
    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("USERPROFILE", temp_dir.path());
            ConfigTestContext { temp_dir }
        }
    }

    // The steps share the process-wide HOME variable, so they run as one test.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_lifecycle(ctx: &mut ConfigTestContext) {
        let home = ctx.temp_dir.path().to_path_buf();
        let config_file = home.join(".jtbd").join("config.json");

        // First run writes the defaults.
        let mut config = Config::load().unwrap();
        assert!(config_file.exists());
        assert_eq!(config.todo_db, home.join(".jtbd").join("todo.db"));
        assert_eq!(config.buildit_db, home.join(".jtbd").join("buildit.db"));
        assert_eq!(config.todo_backup_path(), home.join("todos_backup.json"));
        assert_eq!(config.buildit_backup_path(), home.join("buildit_backup.json"));

        // Updates are written back and survive a reload.
        let custom = home.join("elsewhere").join("tasks.db");
        config
            .update(ConfigUpdate {
                todo_db: Some(custom.clone()),
                ..Default::default()
            })
            .unwrap();
        let reloaded = Config::load().unwrap();
        assert_eq!(reloaded.todo_db, custom);
        assert_eq!(reloaded.buildit_db, home.join(".jtbd").join("buildit.db"));

        // Missing keys fall back to defaults.
        std::fs::write(&config_file, r#"{"buildit_db": "/srv/tracker.db"}"#).unwrap();
        let partial = Config::load().unwrap();
        assert_eq!(partial.buildit_db, PathBuf::from("/srv/tracker.db"));
        assert_eq!(partial.todo_db, home.join(".jtbd").join("todo.db"));

        // A failed save leaves the in-memory values as they were.
        let mut current = Config::load().unwrap();
        let before = current.clone();
        std::fs::remove_file(&config_file).unwrap();
        std::fs::create_dir(&config_file).unwrap();
        let result = current.update(ConfigUpdate {
            buildit_db: Some(home.join("unsaved.db")),
            ..Default::default()
        });
        assert!(result.is_err());
        assert_eq!(current, before);
        std::fs::remove_dir(&config_file).unwrap();

        // A malformed file is an error, not a silent reset.
        std::fs::write(&config_file, "{ not json").unwrap();
        assert!(Config::load().is_err());
    }
}
