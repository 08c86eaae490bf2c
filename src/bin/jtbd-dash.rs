use clap::Parser;
use jtbd::commands::{self, dash};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "jtbd-dash", author, version, about = "Dashboard combining todo and tracker statistics", long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    Cli::parse();
    commands::launch(dash::run)
}
