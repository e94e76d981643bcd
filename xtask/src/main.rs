//! xtask - Development tasks for todo-tracker

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for todo-tracker")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the `todo` command reference generated from its clap definitions
    GenDocs {
        /// Fail instead of writing when the committed reference is stale
        #[arg(long)]
        check: bool,

        /// Output file
        #[arg(long, default_value = "docs/cli/reference.md")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        Commands::GenDocs { check, out } => gen_docs(&out, check),
    }
}

fn gen_docs(out: &Path, check: bool) -> Result<()> {
    let markdown = clap_markdown::help_markdown::<todo_tracker::cli::Cli>();

    if check {
        let current = fs::read_to_string(out).unwrap_or_default();
        if current != markdown {
            bail!(
                "{} is out of date, run `cargo xtask gen-docs`",
                out.display()
            );
        }
        println!("{} is up to date", out.display());
        return Ok(());
    }

    if let Some(dir) = out.parent() {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    fs::write(out, markdown).with_context(|| format!("Failed to write {}", out.display()))?;
    println!("Generated CLI reference at {}", out.display());
    Ok(())
}
