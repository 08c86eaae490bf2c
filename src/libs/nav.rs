//! Selection and drill-in state of the interactive list views.
//!
//! Pure state: nothing here reads or writes a store. The shells feed row
//! counts and ids in after each refresh and read back which row is selected.
//!
//! ```rust
//! use jtbd::libs::nav::{Collection, Navigator};
//!
//! let mut nav = Navigator::new(Collection::Projects);
//! nav.cursor_mut().set_len(3);
//! nav.cursor_mut().next();
//!
//! let project_ids = [10, 11, 12];
//! assert_eq!(nav.drill_in(&project_ids), Some(11));
//! assert_eq!(nav.active(), Collection::Issues);
//!
//! nav.drill_out();
//! assert_eq!(nav.active(), Collection::Projects);
//! assert_eq!(nav.cursor().selected(), Some(1));
//! ```

/// Selection over a list of `len` rows. No selection when the list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListCursor {
    len: usize,
    selected: Option<usize>,
}

impl ListCursor {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            selected: (len > 0).then_some(0),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected element of `items`, if any.
    pub fn selected_in<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.selected.and_then(|index| items.get(index))
    }

    /// Moves down one row, stopping at the last.
    pub fn next(&mut self) {
        if let Some(index) = self.selected {
            self.selected = Some((index + 1).min(self.len - 1));
        }
    }

    /// Moves up one row, stopping at the first.
    pub fn previous(&mut self) {
        if let Some(index) = self.selected {
            self.selected = Some(index.saturating_sub(1));
        }
    }

    pub fn first(&mut self) {
        if self.len > 0 {
            self.selected = Some(0);
        }
    }

    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = Some(self.len - 1);
        }
    }

    /// Selects `index`, clamped to the last row.
    pub fn select(&mut self, index: usize) {
        if self.len > 0 {
            self.selected = Some(index.min(self.len - 1));
        }
    }

    /// Updates the row count after a refresh, keeping the selection in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.selected = match (len, self.selected) {
            (0, _) => None,
            (len, Some(index)) => Some(index.min(len - 1)),
            (_, None) => Some(0),
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Todos,
    Projects,
    Issues,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    active: Collection,
    todos: ListCursor,
    projects: ListCursor,
    issues: ListCursor,
    drilled_project: Option<i64>,
    detail: Option<i64>,
}

impl Navigator {
    pub fn new(active: Collection) -> Self {
        Self {
            active,
            todos: ListCursor::default(),
            projects: ListCursor::default(),
            issues: ListCursor::default(),
            drilled_project: None,
            detail: None,
        }
    }

    pub fn active(&self) -> Collection {
        self.active
    }

    pub fn drilled_project(&self) -> Option<i64> {
        self.drilled_project
    }

    pub fn detail(&self) -> Option<i64> {
        self.detail
    }

    pub fn cursor(&self) -> &ListCursor {
        match self.active {
            Collection::Todos => &self.todos,
            Collection::Projects => &self.projects,
            Collection::Issues => &self.issues,
        }
    }

    pub fn cursor_mut(&mut self) -> &mut ListCursor {
        match self.active {
            Collection::Todos => &mut self.todos,
            Collection::Projects => &mut self.projects,
            Collection::Issues => &mut self.issues,
        }
    }

    /// Makes `collection` active and closes any open detail. Todos and
    /// Projects come back with their previous selection; Issues starts at
    /// the first row.
    pub fn switch_to(&mut self, collection: Collection) {
        self.active = collection;
        self.detail = None;
        if collection == Collection::Issues {
            let len = self.issues.len();
            self.issues = ListCursor::new(len);
        }
    }

    /// From the project list, captures the selected project's id and shows
    /// its issues. `ids` are the ids of the listed projects in display
    /// order. Returns `None` and changes nothing without a selection.
    pub fn drill_in(&mut self, ids: &[i64]) -> Option<i64> {
        if self.active != Collection::Projects {
            return None;
        }
        let id = *self.projects.selected_in(ids)?;
        self.drilled_project = Some(id);
        self.issues = ListCursor::default();
        self.switch_to(Collection::Issues);
        Some(id)
    }

    pub fn drill_out(&mut self) {
        self.drilled_project = None;
        self.switch_to(Collection::Projects);
    }

    /// Opens the selected row of the active list. `ids` are that list's ids
    /// in display order.
    pub fn open_detail(&mut self, ids: &[i64]) -> Option<i64> {
        let id = *self.cursor().selected_in(ids)?;
        self.detail = Some(id);
        Some(id)
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }
}
