#[cfg(test)]
mod tests {
    use jtbd::db::tags::{Tags, DEFAULT_TAG_COLOR};
    use jtbd::libs::error::StoreError;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TagTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for TagTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("USERPROFILE", temp_dir.path());
            let db_path = temp_dir.path().join("buildit.db");
            TagTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    #[test_context(TagTestContext)]
    #[test]
    fn test_add_and_list_by_name(ctx: &mut TagTestContext) {
        let mut tags = Tags::open(&ctx.db_path).unwrap();
        tags.add("urgent", Some("#ff0000")).unwrap();
        tags.add("backend", None).unwrap();

        let listed = tags.list().unwrap();
        let names: Vec<&str> = listed.iter().map(|tag| tag.name.as_str()).collect();
        assert_eq!(names, vec!["backend", "urgent"]);
        assert_eq!(listed[0].color, DEFAULT_TAG_COLOR);
        assert_eq!(listed[1].color, "#ff0000");
    }

    #[test_context(TagTestContext)]
    #[test]
    fn test_get_by_name(ctx: &mut TagTestContext) {
        let mut tags = Tags::open(&ctx.db_path).unwrap();
        let id = tags.add("docs", None).unwrap();

        let tag = tags.get_by_name("docs").unwrap().unwrap();
        assert_eq!(tag.id, id);
        assert!(tags.get_by_name("missing").unwrap().is_none());
    }

    #[test_context(TagTestContext)]
    #[test]
    fn test_duplicate_name_is_rejected(ctx: &mut TagTestContext) {
        let mut tags = Tags::open(&ctx.db_path).unwrap();
        tags.add("docs", None).unwrap();

        assert!(matches!(tags.add("docs", Some("#000000")), Err(StoreError::Sqlite(_))));
        assert_eq!(tags.list().unwrap().len(), 1);
    }
}
