#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use jtbd::libs::formatter::{
        due_date_style, format_optional_date, format_rate, format_timestamp, parse_date, parse_timestamp,
        priority_stars, priority_style, status_mark,
    };
    use jtbd::libs::issue::{decode_tags, encode_tags, is_resolved_status, Issue};
    use jtbd::libs::project::ProjectStatus;
    use jtbd::libs::todo::Todo;

    #[test]
    fn test_parse_timestamp_variants() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(9, 5, 7).unwrap();

        assert_eq!(parse_timestamp("2024-03-01 09:05:07"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01T09:05:07"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01 09:05:07.123456"), Some(expected));
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(format_timestamp(&expected), "2024-03-01 09:05:07");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(" 2024-12-31 "), NaiveDate::from_ymd_opt(2024, 12, 31));
        assert_eq!(parse_date("2024-12-32"), None);
        assert_eq!(format_optional_date(NaiveDate::from_ymd_opt(2024, 1, 5)), "2024-01-05");
        assert_eq!(format_optional_date(None), "");
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(priority_stars(3), "⭐⭐⭐");
        assert_eq!(priority_stars(0), "");
        assert_eq!(status_mark(true), "✅");
        assert_eq!(priority_style(5), "Fr");
        assert_eq!(priority_style(2), "Fy");
        assert_eq!(priority_style(0), "Fg");
        assert_eq!(format_rate(33.333), "33.3%");

        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(due_date_style(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(), today), "bFr");
        assert_eq!(due_date_style(today, today), "Fy");
    }

    #[test]
    fn test_priority_stars_out_of_range() {
        assert_eq!(priority_stars(5), "⭐⭐⭐⭐⭐");
        assert_eq!(priority_stars(6), "6");
        assert_eq!(priority_stars(-2), "-2");
        assert_eq!(priority_stars(2_000_000_000), "2000000000");
        assert_eq!(priority_stars(i32::MIN), i32::MIN.to_string());
    }

    #[test]
    fn test_tag_encoding_is_permissive() {
        let tags = vec!["ui".to_string(), "needs review".to_string()];
        assert_eq!(decode_tags(Some(encode_tags(&tags).as_str())), tags);
        assert!(decode_tags(None).is_empty());
        assert!(decode_tags(Some("")).is_empty());
        assert!(decode_tags(Some("not json")).is_empty());
    }

    #[test]
    fn test_resolved_statuses_ignore_case() {
        assert!(is_resolved_status("Done"));
        assert!(is_resolved_status("CLOSED"));
        assert!(is_resolved_status("completed"));
        assert!(!is_resolved_status("Open"));
        assert!(!is_resolved_status("In Progress"));
    }

    #[test]
    fn test_issue_json_uses_type_key() {
        let json = r#"{"id": 1, "project_id": 2, "type": "Bug", "title": "Crash", "priority": 5,
            "status": "Open", "created_date": "2024-03-01 10:00:00", "tags": ["ui"]}"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.kind, "Bug");
        assert_eq!(issue.tags, vec!["ui"]);
        assert!(issue.is_critical());
        assert_eq!(issue.toggled_status(), "Done");

        let written = serde_json::to_value(&issue).unwrap();
        assert_eq!(written["type"], "Bug");
        assert_eq!(written["created_date"], "2024-03-01 10:00:00");
    }

    #[test]
    fn test_project_status_labels() {
        assert_eq!(ProjectStatus::parse("ON HOLD"), Some(ProjectStatus::OnHold));
        assert_eq!(ProjectStatus::OnHold.to_string(), "On Hold");
        assert_eq!(ProjectStatus::parse("paused"), None);
    }

    #[test]
    fn test_overdue_todo() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let mut todo = Todo {
            id: 1,
            title: "Return books".into(),
            description: None,
            due_date: NaiveDate::from_ymd_opt(2024, 3, 9),
            priority: 1,
            completed: false,
            created_at: parse_timestamp("2024-03-01 08:00:00").unwrap(),
        };
        assert!(todo.is_overdue(today));

        todo.completed = true;
        assert!(!todo.is_overdue(today));
    }
}
