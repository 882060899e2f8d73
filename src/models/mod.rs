mod forms;
mod task;
mod user;

pub use forms::{Credentials, NewTaskRequest, UpdateTaskRequest};
pub use task::Task;
pub use user::{CurrentUser, User};
