//! Task module
//!
//! - Task record and its closed status set
//! - DD-MM-YYYY due date validation

pub mod date;
pub mod model;

pub use date::{is_valid_due_date, parse_due_date, DUE_DATE_FORMAT};
pub use model::{Task, TaskStatus};
