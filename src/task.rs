// src/task.rs

use actix_web::{web, HttpResponse};
use log::info;
use serde_json::json;

use crate::app_state::AppState;
use crate::error::StoreError;
use crate::models::{CreateTaskRequest, TaskFilter, UpdateTaskStatusRequest};

/// POST /api/tasks
pub async fn create_task(
    data: web::Data<AppState>,
    payload: web::Json<CreateTaskRequest>,
) -> Result<HttpResponse, StoreError> {
    let task = data.store.create_task(payload.into_inner())?;
    info!("Task created: {:?} for team {}", task.id, task.team_name);

    Ok(HttpResponse::Created().json(json!({ "success": true, "task": task })))
}

/// GET /api/tasks?teamName=..&status=..
pub async fn list_tasks(
    data: web::Data<AppState>,
    query: web::Query<TaskFilter>,
) -> Result<HttpResponse, StoreError> {
    let tasks = data.store.list_tasks(&query)?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": tasks.len(),
        "tasks": tasks,
    })))
}

/// PATCH /api/tasks/{task_id}
/// Moves a task to whatever status the board sent. The body never rejects
/// the request; only an unknown id fails.
pub async fn update_task_status(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, StoreError> {
    let task_id = path.into_inner();
    let status = UpdateTaskStatusRequest::from_body(&body).into_status();
    let task = data.store.update_task_status(&task_id, status)?;
    info!("Task {} is now {:?}", task.id, task.status);

    Ok(HttpResponse::Ok().json(json!({ "success": true, "task": task })))
}

/// DELETE /api/tasks/{task_id}
pub async fn delete_task(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, StoreError> {
    let task_id = path.into_inner();
    data.store.delete_task(&task_id)?;
    info!("Task deleted: {}", task_id);

    Ok(HttpResponse::Ok().json(json!({ "success": true, "message": "Task deleted" })))
}
