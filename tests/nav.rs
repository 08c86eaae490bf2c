#[cfg(test)]
mod tests {
    use jtbd::libs::nav::{Collection, ListCursor, Navigator};

    #[test]
    fn test_cursor_clamps_at_both_ends() {
        let mut cursor = ListCursor::new(3);
        assert_eq!(cursor.selected(), Some(0));

        cursor.previous();
        assert_eq!(cursor.selected(), Some(0));

        cursor.next();
        cursor.next();
        cursor.next();
        assert_eq!(cursor.selected(), Some(2));

        cursor.first();
        assert_eq!(cursor.selected(), Some(0));
        cursor.last();
        assert_eq!(cursor.selected(), Some(2));

        cursor.select(10);
        assert_eq!(cursor.selected(), Some(2));
    }

    #[test]
    fn test_empty_cursor_has_no_selection() {
        let mut cursor = ListCursor::new(0);
        cursor.next();
        cursor.last();
        cursor.select(1);
        assert_eq!(cursor.selected(), None);
        assert_eq!(cursor.selected_in(&["a"]), None);
    }

    #[test]
    fn test_set_len_keeps_selection_in_range() {
        let mut cursor = ListCursor::new(5);
        cursor.select(4);

        cursor.set_len(2);
        assert_eq!(cursor.selected(), Some(1));

        cursor.set_len(0);
        assert_eq!(cursor.selected(), None);

        cursor.set_len(3);
        assert_eq!(cursor.selected(), Some(0));
        assert_eq!(cursor.selected_in(&["x", "y", "z"]), Some(&"x"));
    }

    #[test]
    fn test_drill_in_and_out() {
        let mut nav = Navigator::new(Collection::Projects);
        nav.cursor_mut().set_len(3);
        nav.cursor_mut().select(2);

        assert_eq!(nav.drill_in(&[7, 8, 9]), Some(9));
        assert_eq!(nav.active(), Collection::Issues);
        assert_eq!(nav.drilled_project(), Some(9));

        nav.cursor_mut().set_len(4);
        nav.cursor_mut().last();

        nav.drill_out();
        assert_eq!(nav.active(), Collection::Projects);
        assert_eq!(nav.drilled_project(), None);
        assert_eq!(nav.cursor().selected(), Some(2));
    }

    #[test]
    fn test_drill_in_needs_a_selected_project() {
        let mut nav = Navigator::new(Collection::Projects);
        assert_eq!(nav.drill_in(&[]), None);
        assert_eq!(nav.active(), Collection::Projects);

        let mut nav = Navigator::new(Collection::Todos);
        nav.cursor_mut().set_len(1);
        assert_eq!(nav.drill_in(&[1]), None);
        assert_eq!(nav.active(), Collection::Todos);
    }

    #[test]
    fn test_switching_to_issues_resets_selection() {
        let mut nav = Navigator::new(Collection::Issues);
        nav.cursor_mut().set_len(5);
        nav.cursor_mut().last();

        nav.switch_to(Collection::Todos);
        nav.switch_to(Collection::Issues);
        assert_eq!(nav.cursor().selected(), Some(0));
        assert_eq!(nav.cursor().len(), 5);
    }

    #[test]
    fn test_switching_keeps_other_selections() {
        let mut nav = Navigator::new(Collection::Todos);
        nav.cursor_mut().set_len(4);
        nav.cursor_mut().select(3);

        nav.switch_to(Collection::Projects);
        nav.switch_to(Collection::Todos);
        assert_eq!(nav.cursor().selected(), Some(3));
    }

    #[test]
    fn test_detail_follows_selection() {
        let mut nav = Navigator::new(Collection::Issues);
        nav.cursor_mut().set_len(2);
        nav.cursor_mut().next();

        assert_eq!(nav.open_detail(&[21, 22]), Some(22));
        assert_eq!(nav.detail(), Some(22));

        nav.close_detail();
        assert_eq!(nav.detail(), None);

        nav.open_detail(&[21, 22]);
        nav.switch_to(Collection::Projects);
        assert_eq!(nav.detail(), None);
    }
}
