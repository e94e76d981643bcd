//! `todo list` command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::store::TaskStore;
use crate::task::{Task, TaskStatus};

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TaskJson<'a> {
    index: usize,
    description: &'a str,
    due_date: &'a str,
    status: TaskStatus,
}

fn to_json(tasks: &[Task]) -> Result<String> {
    let rows: Vec<TaskJson> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| TaskJson {
            index: i + 1,
            description: &task.description,
            due_date: &task.due_date,
            status: task.status,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

pub fn run(store: &TaskStore, args: ListArgs) -> Result<()> {
    if args.json {
        println!("{}", to_json(store.tasks())?);
        return Ok(());
    }

    println!("{}", store.view());
    if !store.is_empty() {
        println!("\nTotal: {} tasks", store.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_rows_are_one_based() {
        let tasks = vec![
            Task::new("a", "01-01-2030", TaskStatus::Pending),
            Task::new("b", "02-01-2030", TaskStatus::Completed),
        ];

        let json: serde_json::Value = serde_json::from_str(&to_json(&tasks).unwrap()).unwrap();
        assert_eq!(json[0]["index"], 1);
        assert_eq!(json[1]["index"], 2);
        assert_eq!(json[1]["description"], "b");
        assert_eq!(json[1]["status"], "completed");
    }

    #[test]
    fn test_json_empty_list() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
