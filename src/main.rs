//! todo-tracker - Personal task tracker

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use todo_tracker::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    if std::env::var("TODO_TRACKER_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("todo_tracker=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    // Completions need no task file
    if let Some(Commands::Completion { shell }) = &cli.command {
        generate(*shell, &mut Cli::command(), "todo", &mut std::io::stdout());
        return Ok(());
    }

    let mut store = cli::open_store(cli.file.as_deref())?;

    match cli.command {
        Some(Commands::List(args)) => cli::list::run(&store, args),
        Some(Commands::Add(args)) => cli::add::run(&mut store, args),
        Some(Commands::Update(args)) => cli::update::run(&mut store, args),
        Some(Commands::Delete(args)) => cli::delete::run(&mut store, args),
        None => {
            let stdin = std::io::stdin();
            cli::menu::run(&mut store, stdin.lock(), std::io::stdout())
        }
        Some(Commands::Completion { .. }) => unreachable!(),
    }
}
