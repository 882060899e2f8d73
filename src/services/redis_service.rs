use redis::{AsyncCommands, Client};
use std::sync::Arc;

use crate::errors::AppResult;
use crate::models::{Task, User};

/// Document store access. Users and tasks are JSON documents under
/// `user:{username}` and `task:{id}`; per-owner insertion order lives in a
/// list under `tasks:{owner_id}`.
pub struct RedisService {
    client: Arc<Client>,
}

impl RedisService {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Persists a new user iff the username is free. SET NX makes the
    /// uniqueness check atomic, so two concurrent registrations cannot
    /// both win. Returns false when the name is already taken.
    pub async fn create_user(&self, user: &User) -> AppResult<bool> {
        let mut conn = self.client.get_async_connection().await?;
        let created: bool = conn
            .set_nx(
                format!("user:{}", user.username),
                serde_json::to_string(user)?,
            )
            .await?;
        Ok(created)
    }

    pub async fn get_user(&self, username: &str) -> AppResult<Option<User>> {
        let mut conn = self.client.get_async_connection().await?;
        let user_data: Option<String> = conn.get(format!("user:{}", username)).await?;
        match user_data {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    /// Persists a task document and appends its id to the owner's list,
    /// preserving insertion order for `list_tasks`.
    pub async fn create_task(&self, task: &Task) -> AppResult<()> {
        let mut conn = self.client.get_async_connection().await?;
        let _: () = conn
            .set(format!("task:{}", task.id), serde_json::to_string(task)?)
            .await?;
        let _: () = conn
            .rpush(format!("tasks:{}", task.owner), &task.id)
            .await?;
        Ok(())
    }

    pub async fn get_task(&self, task_id: &str) -> AppResult<Option<Task>> {
        let mut conn = self.client.get_async_connection().await?;
        let task_data: Option<String> = conn.get(format!("task:{}", task_id)).await?;
        match task_data {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    /// Overwrites an existing task document (used by update; the id list
    /// is untouched so ordering is stable).
    pub async fn save_task(&self, task: &Task) -> AppResult<()> {
        let mut conn = self.client.get_async_connection().await?;
        let _: () = conn
            .set(format!("task:{}", task.id), serde_json::to_string(task)?)
            .await?;
        Ok(())
    }

    /// All tasks for one owner, in insertion order. Ids whose document has
    /// gone missing are skipped rather than failing the whole listing.
    pub async fn list_tasks(&self, owner_id: &str) -> AppResult<Vec<Task>> {
        let mut conn = self.client.get_async_connection().await?;
        let task_ids: Vec<String> = conn.lrange(format!("tasks:{}", owner_id), 0, -1).await?;

        let mut tasks = Vec::with_capacity(task_ids.len());
        for task_id in &task_ids {
            let task_data: Option<String> = conn.get(format!("task:{}", task_id)).await?;
            match task_data {
                Some(data) => tasks.push(serde_json::from_str(&data)?),
                None => tracing::warn!("Task {} missing for owner {}", task_id, owner_id),
            }
        }
        Ok(tasks)
    }

    /// Removes the task document and its entry in the owner's list.
    /// Ownership is checked by the caller before this is reached.
    pub async fn delete_task(&self, owner_id: &str, task_id: &str) -> AppResult<()> {
        let mut conn = self.client.get_async_connection().await?;
        let _: () = conn
            .lrem(format!("tasks:{}", owner_id), 0, task_id)
            .await?;
        let _: () = conn.del(format!("task:{}", task_id)).await?;
        Ok(())
    }
}

impl Clone for RedisService {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}
