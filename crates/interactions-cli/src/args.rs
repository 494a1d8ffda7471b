//! Command-line argument definitions for the interactions CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. A subcommand selects between rendering the grid and
//! listing the scenarios; the configuration file and logging verbosity are
//! global flags accepted by both.

use clap::{Args as ClapArgs, Parser, Subcommand};

use interactions::Model;

/// Command-line arguments for the interactions tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// What to do. Prints usage when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the interactions grid PNG
    Render(RenderArgs),

    /// List scenario titles
    List(ListArgs),
}

#[derive(ClapArgs, Debug)]
pub struct RenderArgs {
    /// Path to the output PNG file
    #[arg(short, long, default_value = "interactions.png")]
    pub output: String,

    /// Number of columns in the grid (use 3 for a README-friendly long form)
    #[arg(long, default_value_t = 8, allow_negative_numbers = true)]
    pub columns: i64,

    /// Scenario model (basic, timeline)
    #[arg(short, long, default_value = "basic")]
    pub model: Model,
}

#[derive(ClapArgs, Debug)]
pub struct ListArgs {
    /// Print subtitles along with scenario titles
    #[arg(short, long)]
    pub long: bool,

    /// Scenario model (basic, timeline)
    #[arg(short, long, default_value = "basic")]
    pub model: Model,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_render_defaults() {
        let args = Args::try_parse_from(["interactions", "render"]).unwrap();
        let Some(Command::Render(render)) = args.command else {
            panic!("Expected render");
        };
        assert_eq!(render.output, "interactions.png");
        assert_eq!(render.columns, 8);
        assert_eq!(render.model, Model::Basic);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_negative_columns_reach_validation() {
        let args = Args::try_parse_from(["interactions", "render", "--columns", "-3"]).unwrap();
        let Some(Command::Render(render)) = args.command else {
            panic!("Expected render");
        };
        assert_eq!(render.columns, -3);
    }

    #[test]
    fn test_list_with_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "interactions",
            "list",
            "--long",
            "--model",
            "timeline",
            "--config",
            "custom.toml",
        ])
        .unwrap();

        assert_eq!(args.config.as_deref(), Some("custom.toml"));
        let Some(Command::List(list)) = args.command else {
            panic!("Expected list");
        };
        assert!(list.long);
        assert_eq!(list.model, Model::Timeline);
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        assert!(Args::try_parse_from(["interactions", "list", "--model", "venn"]).is_err());
    }

    #[test]
    fn test_no_subcommand() {
        let args = Args::try_parse_from(["interactions"]).unwrap();
        assert!(args.command.is_none());
    }
}
