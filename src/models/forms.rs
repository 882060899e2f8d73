use serde::Deserialize;

/// Body for both `POST /register` and `POST /login`.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct NewTaskRequest {
    #[serde(rename = "taskDescription")]
    pub task_description: String,
    #[serde(rename = "taskDate")]
    pub task_date: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(rename = "taskDescription")]
    pub task_description: String,
}
