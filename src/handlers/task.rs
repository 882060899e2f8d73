use axum::{
    extract::{Extension, Json, Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{CurrentUser, NewTaskRequest, Task, UpdateTaskRequest};
use crate::services::RedisService;

/// Creates a task and echoes the owner's full task list, which is what
/// the front end re-renders from after a submit.
pub async fn submit_task(
    State((redis_service, _)): State<(RedisService, Config)>,
    Extension(user): Extension<CurrentUser>,
    Json(request): Json<NewTaskRequest>,
) -> AppResult<Response> {
    if request.task_description.trim().is_empty() {
        return Err(AppError::Validation("Task description is required".into()));
    }
    if request.task_date.trim().is_empty() {
        return Err(AppError::Validation("Task date is required".into()));
    }

    let task = Task {
        id: uuid::Uuid::new_v4().to_string(),
        owner: user.id.clone(),
        task_description: request.task_description,
        task_date: request.task_date,
    };
    redis_service.create_task(&task).await?;
    tracing::debug!("Created task {} for user {}", task.id, user.username);

    let tasks = redis_service.list_tasks(&user.id).await?;
    Ok(Json(tasks).into_response())
}

pub async fn list_tasks(
    State((redis_service, _)): State<(RedisService, Config)>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Response> {
    let tasks = redis_service.list_tasks(&user.id).await?;
    Ok(Json(tasks).into_response())
}

/// Replaces the description of one of the caller's tasks. Unlike submit,
/// this returns only the updated task. A task owned by someone else is
/// reported as missing, never as forbidden.
pub async fn update_task(
    State((redis_service, _)): State<(RedisService, Config)>,
    Extension(user): Extension<CurrentUser>,
    Path(task_id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> AppResult<Response> {
    if request.task_description.trim().is_empty() {
        return Err(AppError::Validation("Task description is required".into()));
    }

    let mut task = redis_service
        .get_task(&task_id)
        .await?
        .filter(|task| task.owner == user.id)
        .ok_or(AppError::TaskNotFound)?;

    task.task_description = request.task_description;
    redis_service.save_task(&task).await?;
    tracing::debug!("Updated task {} for user {}", task.id, user.username);

    Ok(Json(task).into_response())
}

pub async fn delete_task(
    State((redis_service, _)): State<(RedisService, Config)>,
    Extension(user): Extension<CurrentUser>,
    Path(task_id): Path<String>,
) -> AppResult<Response> {
    redis_service
        .get_task(&task_id)
        .await?
        .filter(|task| task.owner == user.id)
        .ok_or(AppError::TaskNotFound)?;

    redis_service.delete_task(&user.id, &task_id).await?;
    tracing::debug!("Deleted task {} for user {}", task_id, user.username);

    Ok(Json(json!({ "message": "Task deleted successfully" })).into_response())
}
