//! Interactive shells for the three binaries.
//!
//! Each shell redraws its view, asks for one action with a `dialoguer`
//! menu, runs it against the stores and repeats until the user quits.
//! Validation and storage failures are printed and the loop continues;
//! only errors from the terminal itself end a shell.

pub mod buildit;
pub mod dash;
pub mod todo;

use crate::libs::config::Config;
use crate::libs::error::ValidationError;
use crate::libs::messages::macros::is_debug_mode;
use crate::libs::messages::Message;
use crate::msg_error;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::fmt::Display;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Shared `main` body of the binaries: sets up logging, loads the
/// configuration and runs `shell`. Any error reaching this point ends the
/// process with a failure code.
pub fn launch(shell: fn(&Config) -> Result<()>) -> ExitCode {
    init_tracing();

    let config = match Config::load() {
        Ok(config) => config,
        Err(error) => {
            msg_error!(Message::ConfigLoadFailed(format!("{:#}", error)));
            return ExitCode::FAILURE;
        }
    };

    match shell(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            msg_error!(Message::Fatal(format!("{:#}", error)));
            ExitCode::FAILURE
        }
    }
}

/// Installs a `tracing` subscriber in debug mode. Outside debug mode the
/// message macros print directly and no subscriber is needed.
fn init_tracing() {
    if !is_debug_mode() {
        return;
    }
    let filter = tracing_subscriber::EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| "jtbd=debug".into()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Free-text prompt. Empty input is allowed and returned as is.
pub(crate) fn prompt_text(prompt: Message, default: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(prompt.to_string())
        .allow_empty(true);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?)
}

pub(crate) fn confirm(prompt: Message) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}

/// Menu over `items`; returns the chosen index, or `None` on Esc.
pub(crate) fn choose<T: Display>(prompt: Message, items: &[T], default: usize) -> Result<Option<usize>> {
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(items)
        .default(default.min(items.len().saturating_sub(1)))
        .interact_opt()?)
}

/// Prints a rejected form. The form is not submitted.
pub(crate) fn report_invalid(error: &ValidationError) {
    msg_error!(Message::InvalidInput(error.to_string()));
}
