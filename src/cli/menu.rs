//! Interactive text menu, the default when no subcommand is given

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::store::{StoreError, TaskStore, TaskUpdate};
use crate::task::TaskStatus;

const MENU: &str = "\n1. View Tasks\n2. Add Task\n3. Update Task\n4. Delete Task\n5. Exit";

/// Drive the menu until the user exits or input ends.
///
/// Validation and lookup errors are printed and the loop continues;
/// persistence errors end the session.
pub fn run<R: BufRead, W: Write>(store: &mut TaskStore, input: R, output: W) -> Result<()> {
    let mut session = MenuSession { store, input, output };
    session.run()
}

struct MenuSession<'a, R, W> {
    store: &'a mut TaskStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> MenuSession<'_, R, W> {
    fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                debug!("Input closed, leaving menu");
                writeln!(self.output)?;
                return Ok(());
            };

            match choice.trim() {
                "1" => {
                    writeln!(self.output, "\n--- All Tasks ---")?;
                    self.show_tasks()?;
                }
                "2" => self.add()?,
                "3" => self.update()?,
                "4" => self.delete()?,
                "5" => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    /// Print `message` and read one line without its line ending.
    /// `None` once input is exhausted.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Like `prompt`, but an empty answer means "skip".
    fn prompt_optional(&mut self, message: &str) -> Result<Option<String>> {
        Ok(self.prompt(message)?.filter(|s| !s.is_empty()))
    }

    fn prompt_index(&mut self, message: &str) -> Result<Option<usize>> {
        let Some(answer) = self.prompt(message)? else {
            return Ok(None);
        };
        match answer.trim().parse::<usize>() {
            Ok(index) => Ok(Some(index)),
            Err(_) => {
                self.report(StoreError::NotFound(0))?;
                Ok(None)
            }
        }
    }

    fn show_tasks(&mut self) -> Result<()> {
        writeln!(self.output, "{}", self.store.view())?;
        Ok(())
    }

    /// Print recoverable store errors; hand back fatal ones.
    fn report(&mut self, err: StoreError) -> Result<()> {
        if err.is_fatal() {
            return Err(err.into());
        }
        writeln!(self.output, "{}", err)?;
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        let Some(description) = self.prompt("Enter task description: ")? else {
            return Ok(());
        };
        let Some(due_date) = self.prompt("Enter due date (DD-MM-YYYY): ")? else {
            return Ok(());
        };

        match self.store.add(description, &due_date, None) {
            Ok(_) => writeln!(self.output, "Task added successfully.")?,
            Err(e) => self.report(e)?,
        }
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        self.show_tasks()?;
        let Some(index) = self.prompt_index("Enter the index of the task to update: ")? else {
            return Ok(());
        };

        let description = self.prompt_optional("Enter new description (press Enter to skip): ")?;
        let due_date =
            self.prompt_optional("Enter new due date (DD-MM-YYYY, press Enter to skip): ")?;
        let status_text = self.prompt_optional(&format!(
            "Enter new status ({}; press Enter to skip): ",
            TaskStatus::choices()
        ))?;

        if self.store.get(index).is_none() {
            return self.report(StoreError::NotFound(index));
        }

        let status = match status_text.as_deref().map(str::parse::<TaskStatus>).transpose() {
            Ok(status) => status,
            Err(e) => return self.report(e),
        };

        let changes = TaskUpdate {
            description,
            due_date,
            status,
        };
        if changes.is_empty() {
            writeln!(self.output, "No updates provided.")?;
            return Ok(());
        }

        match self.store.update(index, changes) {
            Ok(_) => writeln!(self.output, "Task updated successfully.")?,
            Err(e) => self.report(e)?,
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        self.show_tasks()?;
        let Some(index) = self.prompt_index("Enter the index of the task to delete: ")? else {
            return Ok(());
        };

        match self.store.delete(index) {
            Ok(_) => writeln!(self.output, "Task deleted successfully.")?,
            Err(e) => self.report(e)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Storage, DEFAULT_TASKS_FILE};
    use std::io::Cursor;
    use tempfile::{tempdir, TempDir};

    fn open_store() -> (TempDir, TaskStore) {
        let temp = tempdir().unwrap();
        let store = TaskStore::open(Storage::new(temp.path().join(DEFAULT_TASKS_FILE))).unwrap();
        (temp, store)
    }

    fn drive(store: &mut TaskStore, script: &str) -> String {
        let mut output = Vec::new();
        run(store, Cursor::new(script.as_bytes()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let (_temp, mut store) = open_store();
        let out = drive(&mut store, "5\n");
        assert!(out.contains("1. View Tasks"));
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn test_eof_ends_session() {
        let (_temp, mut store) = open_store();
        let out = drive(&mut store, "");
        assert!(!out.contains("Exiting..."));
    }

    #[test]
    fn test_view_empty_list() {
        let (_temp, mut store) = open_store();
        let out = drive(&mut store, "1\n5\n");
        assert!(out.contains("--- All Tasks ---"));
        assert!(out.contains("No tasks in the list."));
    }

    #[test]
    fn test_add_then_view() {
        let (_temp, mut store) = open_store();
        let out = drive(&mut store, "2\nBuy milk\n01-01-2030\n1\n5\n");

        assert!(out.contains("Task added successfully."));
        assert!(out.contains("Task 1:\nDescription: Buy milk\nDue Date: 01-01-2030\nStatus: pending"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_invalid_date_continues() {
        let (_temp, mut store) = open_store();
        let out = drive(&mut store, "2\nBuy milk\n2030-01-01\n5\n");

        assert!(out.contains("Invalid date format"));
        assert!(out.contains("Exiting..."));
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_status_only() {
        let (_temp, mut store) = open_store();
        store.add("Buy milk", "01-01-2030", None).unwrap();

        let out = drive(&mut store, "3\n1\n\n\ncompleted\n5\n");

        assert!(out.contains("Task updated successfully."));
        let task = store.get(1).unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.description, "Buy milk");
        assert_eq!(task.due_date, "01-01-2030");
    }

    #[test]
    fn test_update_invalid_status_changes_nothing() {
        let (_temp, mut store) = open_store();
        store.add("Buy milk", "01-01-2030", None).unwrap();

        let out = drive(&mut store, "3\n1\nBuy bread\n\ndone\n5\n");

        assert!(out.contains("Invalid status 'done'"));
        assert_eq!(store.get(1).unwrap().description, "Buy milk");
    }

    #[test]
    fn test_update_without_changes() {
        let (_temp, mut store) = open_store();
        store.add("Buy milk", "01-01-2030", None).unwrap();

        let out = drive(&mut store, "3\n1\n\n\n\n5\n");
        assert!(out.contains("No updates provided."));
    }

    #[test]
    fn test_update_bad_index() {
        let (_temp, mut store) = open_store();
        store.add("Buy milk", "01-01-2030", None).unwrap();

        let out = drive(&mut store, "3\n7\nnew\n\n\n3\nabc\n5\n");

        assert_eq!(out.matches("Invalid task index.").count(), 2);
        assert_eq!(store.get(1).unwrap().description, "Buy milk");
    }

    #[test]
    fn test_update_bad_index_reported_before_bad_status() {
        let (_temp, mut store) = open_store();
        store.add("Buy milk", "01-01-2030", None).unwrap();

        let out = drive(&mut store, "3\n7\n\n\ndone\n5\n");

        assert!(out.contains("Invalid task index."));
        assert!(!out.contains("Invalid status"));
        assert_eq!(store.get(1).unwrap().status, TaskStatus::Pending);
    }

    #[test]
    fn test_same_messages_as_store_errors() {
        let (_temp, mut store) = open_store();
        store.add("Buy milk", "01-01-2030", None).unwrap();

        let out = drive(&mut store, "2\nx\n2030-01-01\n4\n9\n4\nabc\n5\n");

        assert!(out.contains("Invalid date format. Please use DD-MM-YYYY."));
        assert_eq!(out.matches("Invalid task index.").count(), 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_flow() {
        let (_temp, mut store) = open_store();
        store.add("first", "01-01-2030", None).unwrap();
        store.add("second", "02-01-2030", None).unwrap();

        let out = drive(&mut store, "4\n1\n5\n");

        assert!(out.contains("Task deleted successfully."));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().description, "second");
    }

    #[test]
    fn test_invalid_choice() {
        let (_temp, mut store) = open_store();
        let out = drive(&mut store, "9\n5\n");
        assert!(out.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_windows_line_endings() {
        let (_temp, mut store) = open_store();
        drive(&mut store, "2\r\nBuy milk\r\n01-01-2030\r\n5\r\n");
        assert_eq!(store.get(1).unwrap().description, "Buy milk");
    }
}
