#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use jtbd::db::todos::Todos;
    use jtbd::db::Outcome;
    use jtbd::libs::todo::NewTodo;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TodoTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for TodoTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("USERPROFILE", temp_dir.path());
            let db_path = temp_dir.path().join("todo.db");
            TodoTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_add_and_get(ctx: &mut TodoTestContext) {
        let mut todos = Todos::open(&ctx.db_path).unwrap();

        let id = todos
            .add(
                &NewTodo::new("Renew passport")
                    .with_description("Photos first")
                    .with_due_date(date("2024-05-01"))
                    .with_priority(4),
            )
            .unwrap();

        let todo = todos.get(id).unwrap().unwrap();
        assert_eq!(todo.title, "Renew passport");
        assert_eq!(todo.description.as_deref(), Some("Photos first"));
        assert_eq!(todo.due_date, Some(date("2024-05-01")));
        assert_eq!(todo.priority, 4);
        assert!(!todo.completed);

        assert!(todos.get(id + 100).unwrap().is_none());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_every_valid_priority_is_listed_once(ctx: &mut TodoTestContext) {
        let mut todos = Todos::open(&ctx.db_path).unwrap();

        for priority in 0..=5 {
            todos.add(&NewTodo::new(&format!("p{}", priority)).with_priority(priority)).unwrap();
        }

        let listed = todos.list().unwrap();
        for priority in 0..=5 {
            assert_eq!(listed.iter().filter(|todo| todo.priority == priority).count(), 1);
        }
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_list_orders_by_priority_then_newest(ctx: &mut TodoTestContext) {
        let mut todos = Todos::open(&ctx.db_path).unwrap();

        todos.add(&NewTodo::new("five").with_priority(5)).unwrap();
        todos.add(&NewTodo::new("one").with_priority(1)).unwrap();
        todos.add(&NewTodo::new("three").with_priority(3)).unwrap();
        todos.add(&NewTodo::new("three again").with_priority(3)).unwrap();

        let titles: Vec<String> = todos.list().unwrap().into_iter().map(|todo| todo.title).collect();
        assert_eq!(titles, vec!["five", "three again", "three", "one"]);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_toggle_is_its_own_inverse(ctx: &mut TodoTestContext) {
        let mut todos = Todos::open(&ctx.db_path).unwrap();
        let id = todos.add(&NewTodo::new("Water plants")).unwrap();

        assert_eq!(todos.toggle(id).unwrap(), Outcome::Applied);
        assert!(todos.get(id).unwrap().unwrap().completed);

        assert_eq!(todos.toggle(id).unwrap(), Outcome::Applied);
        assert!(!todos.get(id).unwrap().unwrap().completed);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_update_replaces_fields_but_keeps_state(ctx: &mut TodoTestContext) {
        let mut todos = Todos::open(&ctx.db_path).unwrap();
        let id = todos
            .add(&NewTodo::new("Draft").with_description("old").with_due_date(date("2024-01-01")))
            .unwrap();
        todos.toggle(id).unwrap();
        let before = todos.get(id).unwrap().unwrap();

        let outcome = todos.update(id, &NewTodo::new("Final").with_priority(2)).unwrap();
        assert_eq!(outcome, Outcome::Applied);

        let after = todos.get(id).unwrap().unwrap();
        assert_eq!(after.title, "Final");
        assert_eq!(after.description, None);
        assert_eq!(after.due_date, None);
        assert_eq!(after.priority, 2);
        assert!(after.completed);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_missing_ids_are_not_errors(ctx: &mut TodoTestContext) {
        let mut todos = Todos::open(&ctx.db_path).unwrap();
        todos.add(&NewTodo::new("Only one")).unwrap();

        assert_eq!(todos.toggle(999).unwrap(), Outcome::NotFound);
        assert_eq!(todos.update(999, &NewTodo::new("x")).unwrap(), Outcome::NotFound);
        assert_eq!(todos.delete(999).unwrap(), Outcome::NotFound);
        assert_eq!(todos.count().unwrap(), 1);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_delete(ctx: &mut TodoTestContext) {
        let mut todos = Todos::open(&ctx.db_path).unwrap();
        let keep = todos.add(&NewTodo::new("Keep")).unwrap();
        let drop = todos.add(&NewTodo::new("Drop")).unwrap();

        assert_eq!(todos.delete(drop).unwrap(), Outcome::Applied);

        let ids: Vec<i64> = todos.list().unwrap().iter().map(|todo| todo.id).collect();
        assert_eq!(ids, vec![keep]);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_search_matches_title_or_description(ctx: &mut TodoTestContext) {
        let mut todos = Todos::open(&ctx.db_path).unwrap();
        todos.add(&NewTodo::new("Buy milk")).unwrap();
        todos.add(&NewTodo::new("Call bank").with_description("about the MILK subscription")).unwrap();
        todos.add(&NewTodo::new("Walk dog")).unwrap();

        let titles: Vec<String> = todos.search("milk").unwrap().into_iter().map(|todo| todo.title).collect();
        assert_eq!(titles, vec!["Call bank", "Buy milk"]);

        assert!(todos.search("cinema").unwrap().is_empty());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_empty_search_matches_everything(ctx: &mut TodoTestContext) {
        let mut todos = Todos::open(&ctx.db_path).unwrap();
        todos.add(&NewTodo::new("a")).unwrap();
        todos.add(&NewTodo::new("b").with_priority(3)).unwrap();

        assert_eq!(todos.search("").unwrap(), todos.list().unwrap());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_storage_accepts_empty_title(ctx: &mut TodoTestContext) {
        let mut todos = Todos::open(&ctx.db_path).unwrap();
        let id = todos.add(&NewTodo::new("")).unwrap();
        assert_eq!(todos.get(id).unwrap().unwrap().title, "");
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_store_persists_across_handles(ctx: &mut TodoTestContext) {
        {
            let mut todos = Todos::open(&ctx.db_path).unwrap();
            todos.add(&NewTodo::new("Survives reopen")).unwrap();
        }

        let todos = Todos::open(&ctx.db_path).unwrap();
        assert_eq!(todos.list().unwrap()[0].title, "Survives reopen");
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_upcoming_skips_completed_and_past(ctx: &mut TodoTestContext) {
        let mut todos = Todos::open(&ctx.db_path).unwrap();
        let today = date("2024-03-10");

        todos.add(&NewTodo::new("past").with_due_date(date("2024-03-09"))).unwrap();
        todos.add(&NewTodo::new("later").with_due_date(date("2024-03-20"))).unwrap();
        todos.add(&NewTodo::new("today").with_due_date(today)).unwrap();
        let done = todos.add(&NewTodo::new("done").with_due_date(date("2024-03-11"))).unwrap();
        todos.add(&NewTodo::new("undated")).unwrap();
        todos.toggle(done).unwrap();

        let titles: Vec<String> = todos.upcoming(today, 5).unwrap().into_iter().map(|todo| todo.title).collect();
        assert_eq!(titles, vec!["today", "later"]);
    }
}
