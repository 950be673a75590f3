use clap::Parser;
use log::info;
use rust_picks_core::error::Result;
use std::process::ExitCode;

use rust_picks_cli::cli_args::Args;
use rust_picks_cli::menu::{load_menu, Menu};
use rust_picks_cli::style::StyledRenderer;
use rust_picks_cli::terminal::CrosstermTerminal;

/// Exit code for a prompt cancelled with Ctrl+C
const CANCELLED: u8 = 130;
/// Exit code for invalid options or settings
const CONFIGURATION_ERROR: u8 = 2;

/// The prompt is built before the terminal is opened, so configuration
/// errors leave the terminal untouched.
fn run_menu(menu: Menu) -> Result<Option<Vec<String>>> {
    let mut prompt = menu.build()?;
    let mut terminal = CrosstermTerminal::new()?;
    prompt.run(&mut terminal, &StyledRenderer)
}

fn execute() -> Result<Option<Vec<String>>> {
    let args = Args::parse();
    let menu = load_menu(&args)?;
    run_menu(menu)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(Some(values)) => {
            for value in values {
                println!("{value}");
            }
            ExitCode::SUCCESS
        }
        Ok(None) => {
            info!("Prompt cancelled, nothing selected");
            ExitCode::from(CANCELLED)
        }
        Err(e) if e.is_configuration_error() => {
            eprintln!("{e}");
            ExitCode::from(CONFIGURATION_ERROR)
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
