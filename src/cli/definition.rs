//! Top-level clap definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::delete::DeleteArgs;
use super::list::ListArgs;
use super::update::UpdateArgs;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Personal task tracker")]
#[command(
    long_about = "Personal task tracker.\n\nRun without a subcommand to open the interactive menu."
)]
#[command(version)]
pub struct Cli {
    /// Task file to use instead of the configured one
    #[arg(long, global = true, env = "TODO_TRACKER_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all tasks
    #[command(alias = "ls")]
    List(ListArgs),

    /// Add a new task
    Add(AddArgs),

    /// Update fields of an existing task
    Update(UpdateArgs),

    /// Delete a task
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["todo"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_global_file_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["todo", "list", "--file", "/tmp/t.json"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/t.json")));
        assert!(matches!(cli.command, Some(Commands::List(_))));
    }

    #[test]
    fn test_add_requires_due_date() {
        assert!(Cli::try_parse_from(["todo", "add", "Buy milk"]).is_err());
        assert!(Cli::try_parse_from(["todo", "add", "Buy milk", "--due", "01-01-2030"]).is_ok());
    }

    #[test]
    fn test_delete_index_must_be_numeric() {
        assert!(Cli::try_parse_from(["todo", "delete", "one"]).is_err());
        assert!(Cli::try_parse_from(["todo", "rm", "1"]).is_ok());
    }
}
