use super::{choose, confirm, prompt_text, report_invalid, today};
use crate::db::todos::Todos;
use crate::libs::backup::{read_document, write_document, TodoBackup};
use crate::libs::config::Config;
use crate::libs::forms::TodoForm;
use crate::libs::formatter::format_optional_date;
use crate::libs::messages::Message;
use crate::libs::nav::ListCursor;
use crate::libs::todo::Todo;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::{Context, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Down,
    Up,
    Top,
    Bottom,
    Add,
    Edit,
    Toggle,
    Delete,
    Find,
    Export,
    Import,
    Help,
    Quit,
}

impl Action {
    const ALL: [Action; 13] = [
        Action::Down,
        Action::Up,
        Action::Top,
        Action::Bottom,
        Action::Add,
        Action::Edit,
        Action::Toggle,
        Action::Delete,
        Action::Find,
        Action::Export,
        Action::Import,
        Action::Help,
        Action::Quit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Down => "Move down",
            Action::Up => "Move up",
            Action::Top => "Jump to top",
            Action::Bottom => "Jump to bottom",
            Action::Add => "Add todo",
            Action::Edit => "Edit selected",
            Action::Toggle => "Toggle completed",
            Action::Delete => "Delete selected",
            Action::Find => "Find",
            Action::Export => "Export to backup file",
            Action::Import => "Import from backup file",
            Action::Help => "Help",
            Action::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Runs the todo shell until the user quits.
pub fn run(config: &Config) -> Result<()> {
    let mut todos =
        Todos::new(config).with_context(|| Message::StoreOpenFailed(config.todo_db.display().to_string()))?;
    let mut cursor = ListCursor::default();
    let mut last_action = 0;

    loop {
        let items = todos.list().unwrap_or_else(|error| {
            msg_error!(Message::StoreReadFailed(error.to_string()));
            Vec::new()
        });
        cursor.set_len(items.len());

        msg_print!(Message::TodoListHeader, true);
        if items.is_empty() {
            msg_info!(Message::NoTodos);
        } else {
            View::todos(&items, cursor.selected(), today())?;
        }

        let Some(index) = choose(Message::SelectAction, &Action::ALL, last_action)? else {
            break;
        };
        last_action = index;
        let selected = cursor.selected_in(&items).cloned();

        match Action::ALL[index] {
            Action::Down => cursor.next(),
            Action::Up => cursor.previous(),
            Action::Top => cursor.first(),
            Action::Bottom => cursor.last(),
            Action::Add => add(&mut todos)?,
            Action::Edit => with_selection(selected, |todo| edit(&mut todos, &todo))?,
            Action::Toggle => with_selection(selected, |todo| toggle(&mut todos, &todo))?,
            Action::Delete => with_selection(selected, |todo| delete(&mut todos, &todo))?,
            Action::Find => find(&todos)?,
            Action::Export => export(&todos, config)?,
            Action::Import => import(&mut todos, config)?,
            Action::Help => msg_print!(Message::TodoHelp, true),
            Action::Quit => break,
        }
    }

    Ok(())
}

fn with_selection(selected: Option<Todo>, action: impl FnOnce(Todo) -> Result<()>) -> Result<()> {
    match selected {
        Some(todo) => action(todo),
        None => {
            msg_info!(Message::NothingSelected);
            Ok(())
        }
    }
}

fn fill_form(current: Option<&Todo>) -> Result<TodoForm> {
    let description = current.and_then(|todo| todo.description.as_deref());
    let due_date = current.map(|todo| format_optional_date(todo.due_date));
    let priority = current.map(|todo| todo.priority.to_string());

    Ok(TodoForm {
        title: prompt_text(Message::PromptTodoTitle, current.map(|todo| todo.title.as_str()))?,
        description: prompt_text(Message::PromptTodoDescription, description)?,
        due_date: prompt_text(Message::PromptDueDate, due_date.as_deref())?,
        priority: prompt_text(Message::PromptTodoPriority, priority.as_deref())?,
    })
}

fn add(todos: &mut Todos) -> Result<()> {
    let new_todo = match fill_form(None)?.validate() {
        Ok(new_todo) => new_todo,
        Err(error) => {
            report_invalid(&error);
            return Ok(());
        }
    };

    match todos.add(&new_todo) {
        Ok(_) => msg_success!(Message::TodoAdded),
        Err(error) => msg_error!(Message::TodoSaveFailed(error.to_string())),
    }
    Ok(())
}

fn edit(todos: &mut Todos, todo: &Todo) -> Result<()> {
    let fields = match fill_form(Some(todo))?.validate() {
        Ok(fields) => fields,
        Err(error) => {
            report_invalid(&error);
            return Ok(());
        }
    };

    match todos.update(todo.id, &fields) {
        Ok(outcome) if outcome.is_applied() => msg_success!(Message::TodoUpdated),
        Ok(_) => msg_info!(Message::TodoGone(todo.id)),
        Err(error) => msg_error!(Message::TodoSaveFailed(error.to_string())),
    }
    Ok(())
}

fn toggle(todos: &mut Todos, todo: &Todo) -> Result<()> {
    match todos.toggle(todo.id) {
        Ok(outcome) if outcome.is_applied() => {}
        Ok(_) => msg_info!(Message::TodoGone(todo.id)),
        Err(error) => msg_error!(Message::TodoSaveFailed(error.to_string())),
    }
    Ok(())
}

fn delete(todos: &mut Todos, todo: &Todo) -> Result<()> {
    if !confirm(Message::ConfirmDeleteTodo(todo.title.clone()))? {
        return Ok(());
    }
    match todos.delete(todo.id) {
        Ok(outcome) if outcome.is_applied() => msg_success!(Message::TodoDeleted),
        Ok(_) => msg_info!(Message::TodoGone(todo.id)),
        Err(error) => msg_error!(Message::TodoSaveFailed(error.to_string())),
    }
    Ok(())
}

fn find(todos: &Todos) -> Result<()> {
    let query = prompt_text(Message::PromptSearch, None)?;
    let matches = match todos.search(query.trim()) {
        Ok(matches) => matches,
        Err(error) => {
            msg_error!(Message::SearchFailed(error.to_string()));
            return Ok(());
        }
    };

    if matches.is_empty() {
        msg_info!(Message::NoMatches(query.trim().to_string()));
        return Ok(());
    }
    msg_print!(Message::SearchResultsHeader(matches.len()), true);
    View::todos(&matches, None, today())
}

fn export(todos: &Todos, config: &Config) -> Result<()> {
    let path = config.todo_backup_path();
    match todos.export().and_then(|records| write_document(&path, &records)) {
        Ok(()) => msg_success!(Message::DataExported(path.display().to_string())),
        Err(error) => msg_error!(Message::ExportFailed(error.to_string())),
    }
    Ok(())
}

fn import(todos: &mut Todos, config: &Config) -> Result<()> {
    let path = config.todo_backup_path();
    if !confirm(Message::ConfirmImport(path.display().to_string()))? {
        return Ok(());
    }
    match read_document::<TodoBackup>(&path).and_then(|records| todos.import(&records)) {
        Ok(count) => msg_success!(Message::TodosImportedFrom(count, path.display().to_string())),
        Err(error) => msg_error!(Message::ImportFailed(error.to_string())),
    }
    Ok(())
}
