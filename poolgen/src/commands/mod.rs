mod check;
mod clean;
mod completions;
mod generate;
mod list;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use clean::CleanCommand;
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for poolgen_model::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "poolgen")]
#[command(version)]
#[command(about = "Generate pool, component and blueprint code from poolgen.toml")]
pub(crate) struct Cli {
    /// Increase log output (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Clean(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate code from poolgen.toml
    Generate(GenerateCommand),

    /// Remove previously generated files
    Clean(CleanCommand),

    /// Validate poolgen.toml without generating code
    Check(CheckCommand),

    /// List pools, components, blueprints and available generators
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_global_and_counted() {
        let cli = Cli::try_parse_from(["poolgen", "check", "-vv"]).unwrap();
        assert_eq!(cli.verbosity(), 2);
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "poolgen", "generate", "-o", "out", "--dry-run", "-g", "pools", "-g", "blueprints",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.output.as_deref(), Some("out"));
                assert!(cmd.dry_run);
                assert_eq!(cmd.generators, vec!["pools", "blueprints"]);
            }
            _ => panic!("expected generate"),
        }
    }
}
