pub mod cli;
pub mod commands;
pub mod formats;
pub mod logging;
pub mod model;
pub mod preset;
pub mod runtime;
pub mod ui;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
