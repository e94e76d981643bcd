//! `todo delete` command implementation

use anyhow::Result;
use clap::Args;

use crate::store::TaskStore;

#[derive(Args)]
pub struct DeleteArgs {
    /// Task number as shown by `todo list`
    index: usize,
}

pub fn run(store: &mut TaskStore, args: DeleteArgs) -> Result<()> {
    let removed = store.delete(args.index)?;
    println!("Task deleted successfully.");
    println!("Removed: {}", removed.description);
    Ok(())
}
