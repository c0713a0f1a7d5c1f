//! User Actions
//!
//! The async work behind every button: local validation first, then the
//! CSRF-guarded backend call. Components wrap these in a busy guard and
//! refetch the task list after a successful mutation.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;

use crate::api::{self, ApiClient, Transport};
use crate::config::AppConfig;
use crate::due_date::{self, DueDateError};
use crate::error::{ApiError, RegisterError, TaskFormError};
use crate::messages;
use crate::models::{Credentials, NewTask, Registration, Task, TaskPatch};
use crate::session::{tasks_for_session, SessionState};


/// Clock and zones used for due dates
#[derive(Debug, Clone)]
pub struct TimeContext<L: TimeZone> {
    /// Zone the `datetime-local` inputs are read in
    pub local: L,
    /// Zone due dates are sent in
    pub target: Tz,
    pub now: DateTime<Utc>,
}

impl TimeContext<Local> {
    pub fn browser(config: &AppConfig) -> Self {
        Self { local: Local, target: config.due_date_tz, now: Utc::now() }
    }
}

// ========================
// Tasks
// ========================

/// Refetch the list for reload number `ticket`.
///
/// `None` when there is no session, or when `latest()` has moved past `ticket`
/// by the time the response arrives: a newer reload owns the list then, and an
/// older response must not overwrite it.
pub async fn refresh_tasks<T, F>(
    api: &ApiClient<T>,
    session: &SessionState,
    ticket: u32,
    latest: F,
) -> Option<Result<Vec<Task>, ApiError>>
where
    T: Transport,
    F: Fn() -> u32,
{
    let result = tasks_for_session(session, api).await?;
    if latest() != ticket {
        tracing::debug!(ticket, latest = latest(), "discarding stale task list");
        return None;
    }
    Some(result)
}

/// Create a task from the form input.
///
/// A blank title or a due date before `time.now` is rejected without a request.
pub async fn create_task<T, L>(
    api: &ApiClient<T>,
    title: &str,
    due_input: &str,
    time: &TimeContext<L>,
) -> Result<(), TaskFormError>
where
    T: Transport,
    L: TimeZone,
{
    if title.trim().is_empty() {
        return Err(TaskFormError::EmptyTitle);
    }
    let due_date = due_date::prepare(due_input, &time.local, &time.target, Some(time.now))?;
    let task = NewTask { title: title.to_string(), due_date };
    api::create_task(api, &task).await?;
    tracing::info!(title = %task.title, "task created");
    Ok(())
}

/// Edit buffers of a row in editing mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub title: String,
    /// `datetime-local` value, empty for no due date
    pub due_date: String,
}

impl EditBuffer {
    pub fn from_task<L>(task: &Task, local: &L) -> Self
    where
        L: TimeZone,
        L::Offset: Display,
    {
        Self {
            title: task.title.clone(),
            due_date: task
                .due_date
                .as_deref()
                .map(|value| due_date::to_input_value(value, local))
                .unwrap_or_default(),
        }
    }
}

/// Save an edited row. An empty due date clears it; past dates are allowed.
pub async fn save_task<T, L>(
    api: &ApiClient<T>,
    id: u64,
    buffer: &EditBuffer,
    time: &TimeContext<L>,
) -> Result<(), TaskFormError>
where
    T: Transport,
    L: TimeZone,
{
    let due_date = due_date::prepare(&buffer.due_date, &time.local, &time.target, None)?;
    let patch = TaskPatch {
        title: Some(buffer.title.clone()),
        is_completed: None,
        due_date: Some(due_date),
    };
    api::update_task(api, id, &patch).await?;
    tracing::info!(id, "task saved");
    Ok(())
}

/// Flip completion based on the row's current state.
pub async fn toggle_task<T: Transport>(api: &ApiClient<T>, task: &Task) -> Result<(), ApiError> {
    let patch = TaskPatch { is_completed: Some(!task.is_completed), ..Default::default() };
    api::update_task(api, task.id, &patch).await?;
    tracing::info!(id = task.id, completed = !task.is_completed, "task toggled");
    Ok(())
}

pub async fn delete_task<T: Transport>(api: &ApiClient<T>, id: u64) -> Result<(), ApiError> {
    api::delete_task(api, id).await?;
    tracing::info!(id, "task deleted");
    Ok(())
}

// ========================
// Session
// ========================

pub async fn login<T: Transport>(api: &ApiClient<T>, credentials: &Credentials) -> Result<(), ApiError> {
    api::login(api, credentials).await
}

/// Register, sign in with the same credentials, then refresh the CSRF cookie
/// for the new session.
pub async fn register<T: Transport>(api: &ApiClient<T>, registration: &Registration) -> Result<(), RegisterError> {
    if registration.password != registration.password_confirmation {
        return Err(RegisterError::PasswordMismatch);
    }
    api::register(api, registration).await?;
    api::login(api, &registration.credentials()).await?;
    api.refresh_csrf().await?;
    tracing::info!(email = %registration.email, "registered and signed in");
    Ok(())
}

pub async fn logout<T: Transport>(api: &ApiClient<T>) -> Result<(), ApiError> {
    api::logout(api).await
}

// ========================
// Feedback
// ========================

/// Lines to show for a failed task form submit
pub fn task_form_messages(error: &TaskFormError) -> Vec<String> {
    match error {
        TaskFormError::EmptyTitle => Vec::new(),
        TaskFormError::DueDate(DueDateError::InPast) => vec![messages::DUE_DATE_IN_PAST.to_string()],
        TaskFormError::DueDate(DueDateError::Invalid(_)) => vec![messages::DUE_DATE_INVALID.to_string()],
        TaskFormError::Api(err) => api_messages(err, messages::GENERIC_ERROR),
    }
}

/// Field messages for a 422, otherwise the given fallback line
pub fn api_messages(error: &ApiError, fallback: &str) -> Vec<String> {
    match error.validation() {
        Some(errors) if !errors.is_empty() => errors.messages(),
        _ => vec![fallback.to_string()],
    }
}
