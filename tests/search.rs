#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use jtbd::libs::formatter::parse_timestamp;
    use jtbd::libs::issue::Issue;
    use jtbd::libs::project::Project;
    use jtbd::libs::search::{combined, filter_issues, filter_projects, filter_todos};
    use jtbd::libs::todo::Todo;

    fn created() -> NaiveDateTime {
        parse_timestamp("2024-03-01 12:00:00").unwrap()
    }

    fn todo(id: i64, title: &str, description: Option<&str>) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            description: description.map(str::to_string),
            due_date: None,
            priority: 0,
            completed: false,
            created_at: created(),
        }
    }

    fn project(id: i64, name: &str, description: Option<&str>) -> Project {
        Project {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
            version: None,
            status: "Active".to_string(),
            created_date: created(),
            last_updated: created(),
        }
    }

    fn issue(id: i64, title: &str, kind: &str, assigned_to: Option<&str>) -> Issue {
        Issue {
            id,
            project_id: 1,
            kind: kind.to_string(),
            title: title.to_string(),
            description: None,
            priority: 3,
            status: "Open".to_string(),
            assigned_to: assigned_to.map(str::to_string),
            created_date: created(),
            due_date: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_todos_match_title_or_description() {
        let todos = vec![
            todo(1, "Buy groceries", None),
            todo(2, "Call mum", Some("ask about GROCERIES list")),
            todo(3, "Gym", None),
        ];

        let ids: Vec<i64> = filter_todos(&todos, "grocer").iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let todos = vec![todo(1, "Anything", None)];
        assert!(filter_todos(&todos, "").is_empty());
        assert!(filter_todos(&todos, "   ").is_empty());
    }

    #[test]
    fn test_projects_match_name_or_description() {
        let projects = vec![
            project(1, "Website", None),
            project(2, "Billing", Some("invoices for the website")),
            project(3, "Mobile", None),
        ];

        let ids: Vec<i64> = filter_projects(&projects, "WEB").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_issues_match_assignee_and_type() {
        let issues = vec![
            issue(1, "Login fails", "Bug", Some("Ana")),
            issue(2, "Dark mode", "Feature", None),
            issue(3, "Refactor", "Task", Some("ben")),
        ];

        let by_assignee: Vec<i64> = filter_issues(&issues, "ana").iter().map(|i| i.id).collect();
        assert_eq!(by_assignee, vec![1]);

        let by_kind: Vec<i64> = filter_issues(&issues, "feature").iter().map(|i| i.id).collect();
        assert_eq!(by_kind, vec![2]);
    }

    #[test]
    fn test_combined_search() {
        let todos = vec![todo(1, "Release notes", None)];
        let projects = vec![project(1, "Release tooling", None), project(2, "Docs", None)];
        let issues = vec![issue(1, "Automate release", "Task", None), issue(2, "Typo", "Bug", None)];

        let results = combined(&todos, &projects, &issues, " release ");
        assert_eq!(results.todos.len(), 1);
        assert_eq!(results.projects.len(), 1);
        assert_eq!(results.issues.len(), 1);
        assert_eq!(results.len(), 3);

        assert!(combined(&todos, &projects, &issues, "nothing like this").is_empty());
    }
}
