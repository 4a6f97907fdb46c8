//! Background jobs.

pub mod maintenance;
pub mod todo_reminders;
