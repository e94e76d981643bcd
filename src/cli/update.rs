//! `todo update` command implementation

use anyhow::{bail, Result};
use clap::Args;

use crate::store::{TaskStore, TaskUpdate};
use crate::task::TaskStatus;

#[derive(Args)]
pub struct UpdateArgs {
    /// Task number as shown by `todo list`
    index: usize,

    /// New description
    #[arg(short, long)]
    description: Option<String>,

    /// New due date (DD-MM-YYYY)
    #[arg(long = "due")]
    due_date: Option<String>,

    /// New status (TODO, pending, completed)
    #[arg(short, long)]
    status: Option<String>,
}

pub fn run(store: &mut TaskStore, args: UpdateArgs) -> Result<()> {
    let changes = TaskUpdate {
        description: args.description,
        due_date: args.due_date,
        status: args
            .status
            .as_deref()
            .map(str::parse::<TaskStatus>)
            .transpose()?,
    };

    if changes.is_empty() {
        bail!("No updates provided. Use --description, --due or --status.");
    }

    let task = store.update(args.index, changes)?;
    println!("Task updated successfully.");
    println!("Task {}:\n{}", args.index, task);
    Ok(())
}
