//! CLI logic for the interactions tool.
//!
//! This module contains the command dispatch for rendering the grid and
//! listing scenarios.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command, ListArgs, RenderArgs};

use std::io::{self, Write};

use clap::CommandFactory;
use log::info;

use interactions::{GridBuilder, InteractionsError};

/// Run the interactions CLI application
///
/// Without a subcommand the usage text is printed. `render` loads the
/// configuration and writes the grid PNG. `list` prints one numbered line per
/// scenario to stdout.
///
/// # Errors
///
/// Returns `InteractionsError` for:
/// - Configuration loading errors (`render` only)
/// - An invalid column count
/// - File I/O and PNG encoding errors
pub fn run(args: &Args) -> Result<(), InteractionsError> {
    let Some(command) = &args.command else {
        Args::command().print_help()?;
        return Ok(());
    };

    match command {
        Command::Render(render) => {
            let app_config = config::load_config(args.config.as_ref())?;
            info!(
                output_path = render.output,
                model = render.model.name(),
                columns = render.columns;
                "Rendering interactions grid"
            );
            GridBuilder::new(app_config).render_png(
                render.model,
                render.columns,
                &render.output,
            )?;
        }
        // Listing ignores the configuration file
        Command::List(list) => {
            let mut stdout = io::stdout().lock();
            for line in GridBuilder::default().list(list.model, list.long) {
                writeln!(stdout, "{line}")?;
            }
        }
    }

    Ok(())
}
