//! `todo add` command implementation

use anyhow::Result;
use clap::Args;

use crate::store::TaskStore;
use crate::task::TaskStatus;

#[derive(Args)]
pub struct AddArgs {
    /// Task description
    description: String,

    /// Due date (DD-MM-YYYY)
    #[arg(short, long = "due")]
    due_date: String,

    /// Initial status (TODO, pending, completed); defaults to the configured one
    #[arg(short, long)]
    status: Option<String>,
}

pub fn run(store: &mut TaskStore, args: AddArgs) -> Result<()> {
    let status = args
        .status
        .as_deref()
        .map(str::parse::<TaskStatus>)
        .transpose()?;

    let index = store.add(args.description, &args.due_date, status)?;
    println!("Task added successfully.");
    if let Some(task) = store.get(index) {
        println!("Task {}:\n{}", index, task);
    }
    Ok(())
}
