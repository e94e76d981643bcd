//! todo-tracker library - task list, storage and command-line surface

pub mod cli;
pub mod config;
pub mod store;
pub mod task;
