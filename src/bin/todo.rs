use clap::Parser;
use jtbd::commands::{self, todo};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "todo", author, version, about = "Interactive todo list", long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    Cli::parse();
    commands::launch(todo::run)
}
