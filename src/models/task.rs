use serde::{Deserialize, Serialize};

/// A dated to-do item owned by exactly one user. Field names on the wire
/// match what the front end reads: `user`, `taskDescription`, `taskDate`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Task {
    pub id: String,
    #[serde(rename = "user")]
    pub owner: String,
    #[serde(rename = "taskDescription")]
    pub task_description: String,
    #[serde(rename = "taskDate")]
    pub task_date: String,
}
