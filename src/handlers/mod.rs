mod auth;
mod task;

pub use auth::{auth_status, handle_login, handle_logout, handle_register};
pub use task::{delete_task, list_tasks, submit_task, update_task};
