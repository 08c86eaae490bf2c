#[cfg(test)]
mod tests {
    use jtbd::db::comments::Comments;
    use jtbd::db::issues::Issues;
    use jtbd::db::projects::Projects;
    use jtbd::db::tracker::Tracker;
    use jtbd::db::Outcome;
    use jtbd::libs::backup::TrackerBackup;
    use jtbd::libs::comment::NewComment;
    use jtbd::libs::error::StoreError;
    use jtbd::libs::formatter::parse_timestamp;
    use jtbd::libs::issue::{IssueUpdate, NewIssue};
    use jtbd::libs::project::{NewProject, Project, ProjectUpdate};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TrackerTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for TrackerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("USERPROFILE", temp_dir.path());
            let db_path = temp_dir.path().join("buildit.db");
            TrackerTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_add_project_defaults(ctx: &mut TrackerTestContext) {
        let mut projects = Projects::open(&ctx.db_path).unwrap();

        let id = projects.add(&NewProject::new("Website")).unwrap();
        let project = projects.get(id).unwrap().unwrap();

        assert_eq!(project.name, "Website");
        assert_eq!(project.version.as_deref(), Some("0.1.0"));
        assert_eq!(project.status, "Active");
        assert_eq!(project.created_date, project.last_updated);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_delete_project_cascades(ctx: &mut TrackerTestContext) {
        let mut projects = Projects::open(&ctx.db_path).unwrap();
        let mut issues = Issues::open(&ctx.db_path).unwrap();
        let mut comments = Comments::open(&ctx.db_path).unwrap();

        let doomed = projects.add(&NewProject::new("Doomed")).unwrap();
        let other = projects.add(&NewProject::new("Other")).unwrap();

        let mut doomed_issues = Vec::new();
        for title in ["First", "Second"] {
            let issue_id = issues.add(&NewIssue::new(doomed, title)).unwrap();
            comments.add(&NewComment::new(issue_id, "ana", "looking into it")).unwrap();
            doomed_issues.push(issue_id);
        }
        let surviving_issue = issues.add(&NewIssue::new(other, "Unrelated")).unwrap();
        comments.add(&NewComment::new(surviving_issue, "ben", "still here")).unwrap();

        assert_eq!(projects.delete(doomed).unwrap(), Outcome::Applied);

        assert!(projects.get(doomed).unwrap().is_none());
        assert!(issues.list(Some(doomed)).unwrap().is_empty());
        for issue_id in doomed_issues {
            assert!(comments.list(issue_id).unwrap().is_empty());
        }
        assert_eq!(issues.list(Some(other)).unwrap().len(), 1);
        assert_eq!(comments.list(surviving_issue).unwrap().len(), 1);

        assert_eq!(projects.delete(doomed).unwrap(), Outcome::NotFound);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_delete_issue_removes_comments(ctx: &mut TrackerTestContext) {
        let mut projects = Projects::open(&ctx.db_path).unwrap();
        let mut issues = Issues::open(&ctx.db_path).unwrap();
        let mut comments = Comments::open(&ctx.db_path).unwrap();

        let project = projects.add(&NewProject::new("App")).unwrap();
        let issue = issues.add(&NewIssue::new(project, "Crash on start")).unwrap();
        comments.add(&NewComment::new(issue, "ana", "repro attached")).unwrap();

        assert_eq!(issues.delete(issue).unwrap(), Outcome::Applied);
        assert!(comments.list(issue).unwrap().is_empty());
        assert!(projects.get(project).unwrap().is_some());
        assert_eq!(issues.delete(issue).unwrap(), Outcome::NotFound);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_issue_requires_existing_project(ctx: &mut TrackerTestContext) {
        let mut issues = Issues::open(&ctx.db_path).unwrap();

        let result = issues.add(&NewIssue::new(42, "Orphan"));
        assert!(matches!(result, Err(StoreError::MissingParent { entity: "project", id: 42 })));
        assert!(issues.list(None).unwrap().is_empty());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_comment_requires_existing_issue(ctx: &mut TrackerTestContext) {
        let mut comments = Comments::open(&ctx.db_path).unwrap();

        let result = comments.add(&NewComment::new(7, "ana", "hello?"));
        assert!(matches!(result, Err(StoreError::MissingParent { entity: "issue", id: 7 })));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_issue_ordering_and_project_filter(ctx: &mut TrackerTestContext) {
        let mut projects = Projects::open(&ctx.db_path).unwrap();
        let mut issues = Issues::open(&ctx.db_path).unwrap();

        let api = projects.add(&NewProject::new("API")).unwrap();
        let web = projects.add(&NewProject::new("Web")).unwrap();
        issues.add(&NewIssue::new(api, "low").with_priority(1)).unwrap();
        issues.add(&NewIssue::new(api, "high").with_priority(5)).unwrap();
        issues.add(&NewIssue::new(web, "medium").with_priority(3)).unwrap();
        issues.add(&NewIssue::new(api, "high again").with_priority(5)).unwrap();

        let api_titles: Vec<String> = issues.list(Some(api)).unwrap().into_iter().map(|i| i.title).collect();
        assert_eq!(api_titles, vec!["high again", "high", "low"]);

        let all_titles: Vec<String> = issues.list(None).unwrap().into_iter().map(|i| i.title).collect();
        assert_eq!(all_titles, vec!["high again", "high", "medium", "low"]);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_issue_fields_round_trip(ctx: &mut TrackerTestContext) {
        let mut projects = Projects::open(&ctx.db_path).unwrap();
        let mut issues = Issues::open(&ctx.db_path).unwrap();
        let project = projects.add(&NewProject::new("API")).unwrap();

        let id = issues
            .add(
                &NewIssue::new(project, "Timeouts")
                    .with_kind("Bug")
                    .with_priority(9)
                    .with_assignee("ana")
                    .with_description("p99 above 2s")
                    .with_tags(&["perf", "backend"]),
            )
            .unwrap();

        let issue = issues.get(id).unwrap().unwrap();
        assert_eq!(issue.kind, "Bug");
        assert_eq!(issue.priority, 9);
        assert_eq!(issue.status, "Open");
        assert_eq!(issue.assigned_to.as_deref(), Some("ana"));
        assert_eq!(issue.tags, vec!["perf", "backend"]);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_partial_project_update(ctx: &mut TrackerTestContext) {
        let mut projects = Projects::open(&ctx.db_path).unwrap();
        let id = projects
            .add(&NewProject::new("CLI").with_description("command line").with_version("1.2.0"))
            .unwrap();

        let update = ProjectUpdate {
            status: Some("On Hold".to_string()),
            ..Default::default()
        };
        assert_eq!(projects.update(id, &update).unwrap(), Outcome::Applied);

        let project = projects.get(id).unwrap().unwrap();
        assert_eq!(project.status, "On Hold");
        assert_eq!(project.name, "CLI");
        assert_eq!(project.description.as_deref(), Some("command line"));
        assert_eq!(project.version.as_deref(), Some("1.2.0"));

        let clear = ProjectUpdate {
            description: Some(None),
            ..Default::default()
        };
        projects.update(id, &clear).unwrap();
        assert_eq!(projects.get(id).unwrap().unwrap().description, None);

        assert_eq!(projects.update(id, &ProjectUpdate::default()).unwrap(), Outcome::Applied);
        assert_eq!(projects.update(999, &ProjectUpdate::default()).unwrap(), Outcome::NotFound);
        assert_eq!(projects.set_status(999, "Completed").unwrap(), Outcome::NotFound);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_partial_issue_update(ctx: &mut TrackerTestContext) {
        let mut projects = Projects::open(&ctx.db_path).unwrap();
        let mut issues = Issues::open(&ctx.db_path).unwrap();
        let project = projects.add(&NewProject::new("API")).unwrap();
        let id = issues
            .add(&NewIssue::new(project, "Flaky test").with_assignee("ana").with_tags(&["ci"]))
            .unwrap();

        let update = IssueUpdate {
            priority: Some(1),
            assigned_to: Some(None),
            tags: Some(vec!["ci".to_string(), "tests".to_string()]),
            ..Default::default()
        };
        assert_eq!(issues.update(id, &update).unwrap(), Outcome::Applied);

        let issue = issues.get(id).unwrap().unwrap();
        assert_eq!(issue.title, "Flaky test");
        assert_eq!(issue.priority, 1);
        assert_eq!(issue.assigned_to, None);
        assert_eq!(issue.tags, vec!["ci", "tests"]);

        assert_eq!(issues.set_status(id, "Done").unwrap(), Outcome::Applied);
        assert!(issues.get(id).unwrap().unwrap().is_resolved());
        assert_eq!(issues.set_status(999, "Done").unwrap(), Outcome::NotFound);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_issue_update_touches_project(ctx: &mut TrackerTestContext) {
        let old = parse_timestamp("2020-01-01 00:00:00").unwrap();
        let backup = TrackerBackup {
            projects: vec![Project {
                id: 1,
                name: "Legacy".to_string(),
                description: None,
                version: Some("0.1.0".to_string()),
                status: "Active".to_string(),
                created_date: old,
                last_updated: old,
            }],
            ..Default::default()
        };
        Tracker::open(&ctx.db_path).unwrap().import(&backup).unwrap();

        let mut issues = Issues::open(&ctx.db_path).unwrap();
        let projects = Projects::open(&ctx.db_path).unwrap();
        let id = issues.add(&NewIssue::new(1, "Modernise")).unwrap();
        assert_eq!(projects.get(1).unwrap().unwrap().last_updated, old);

        issues.set_status(id, "In Progress").unwrap();
        assert!(projects.get(1).unwrap().unwrap().last_updated > old);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_projects_listed_by_last_update(ctx: &mut TrackerTestContext) {
        let mut projects = Projects::open(&ctx.db_path).unwrap();
        let first = projects.add(&NewProject::new("First")).unwrap();
        let second = projects.add(&NewProject::new("Second")).unwrap();

        let ids: Vec<i64> = projects.list().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_comments_oldest_first(ctx: &mut TrackerTestContext) {
        let mut projects = Projects::open(&ctx.db_path).unwrap();
        let mut issues = Issues::open(&ctx.db_path).unwrap();
        let mut comments = Comments::open(&ctx.db_path).unwrap();
        let project = projects.add(&NewProject::new("API")).unwrap();
        let issue = issues.add(&NewIssue::new(project, "Slow login")).unwrap();

        comments.add(&NewComment::new(issue, "ana", "first")).unwrap();
        comments.add(&NewComment::new(issue, "ben", "second")).unwrap();

        let contents: Vec<String> = comments.list(issue).unwrap().into_iter().map(|c| c.content).collect();
        assert_eq!(contents, vec!["first", "second"]);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_storage_search(ctx: &mut TrackerTestContext) {
        let mut projects = Projects::open(&ctx.db_path).unwrap();
        let mut issues = Issues::open(&ctx.db_path).unwrap();
        let tracker = Tracker::open(&ctx.db_path).unwrap();

        let web = projects.add(&NewProject::new("Website").with_description("marketing site")).unwrap();
        projects.add(&NewProject::new("Billing")).unwrap();
        issues.add(&NewIssue::new(web, "Hero image").with_tags(&["design"])).unwrap();
        issues.add(&NewIssue::new(web, "Footer links")).unwrap();

        let matches = tracker.search("design").unwrap();
        assert!(matches.projects.is_empty());
        assert_eq!(matches.issues.len(), 1);
        assert_eq!(matches.issues[0].title, "Hero image");

        let matches = tracker.search("SITE").unwrap();
        assert_eq!(matches.projects.len(), 1);
        assert_eq!(matches.projects[0].name, "Website");

        let everything = tracker.search("").unwrap();
        assert_eq!(everything.projects.len(), 2);
        assert_eq!(everything.issues.len(), 2);
    }
}
