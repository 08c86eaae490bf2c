use clap::Parser;
use jtbd::commands::{self, buildit};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "buildit", author, version, about = "Interactive project and issue tracker", long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    Cli::parse();
    commands::launch(buildit::run)
}
