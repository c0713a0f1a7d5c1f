//! Task Endpoints
//!
//! CRUD on the signed-in user's tasks. Mutations return nothing; callers
//! refetch the list afterwards.

use super::client::ApiClient;
use super::transport::{ApiRequest, Transport};
use crate::error::ApiError;
use crate::models::{NewTask, Task, TaskPatch};

const TASKS_PATH: &str = "/api/tasks";

fn task_path(id: u64) -> String {
    format!("{}/{}", TASKS_PATH, id)
}

pub async fn list_tasks<T: Transport>(api: &ApiClient<T>) -> Result<Vec<Task>, ApiError> {
    api.get(TASKS_PATH).await
}

pub async fn create_task<T: Transport>(api: &ApiClient<T>, task: &NewTask) -> Result<(), ApiError> {
    api.mutate(ApiRequest::post(TASKS_PATH).json(task)?).await?;
    Ok(())
}

pub async fn update_task<T: Transport>(api: &ApiClient<T>, id: u64, patch: &TaskPatch) -> Result<(), ApiError> {
    api.mutate(ApiRequest::put(task_path(id)).json(patch)?).await?;
    Ok(())
}

pub async fn delete_task<T: Transport>(api: &ApiClient<T>, id: u64) -> Result<(), ApiError> {
    api.mutate(ApiRequest::delete(task_path(id))).await?;
    Ok(())
}
