//! Session Query
//!
//! Who is signed in, fetched once per page load from `GET /user`. There is no
//! automatic retry and no refetch on window focus: a 401 is an answer, not a
//! transient failure.

use crate::api::{current_user, list_tasks, ApiClient, Transport};
use crate::error::ApiError;
use crate::models::{Task, User};
use crate::routes;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Loading,
    Authenticated(User),
    Anonymous,
    Failed(String),
}

impl SessionState {
    pub fn from_result(result: Result<Option<User>, ApiError>) -> Self {
        match result {
            Ok(Some(user)) => SessionState::Authenticated(user),
            Ok(None) | Err(ApiError::Unauthorized) => SessionState::Anonymous,
            Err(err) => SessionState::Failed(err.to_string()),
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SessionState::Failed(_))
    }
}

pub async fn load_session<T: Transport>(api: &ApiClient<T>) -> SessionState {
    let state = SessionState::from_result(current_user(api).await);
    match &state {
        SessionState::Failed(error) => tracing::error!(%error, "session query failed"),
        SessionState::Anonymous => tracing::info!("no active session"),
        _ => tracing::debug!("session active"),
    }
    state
}

/// Who may see a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Signed-in users only
    Protected,
    /// Signed-out users only (registration)
    GuestOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Loading,
    Error,
    Redirect(&'static str),
    Render,
}

pub fn gate(session: &SessionState, access: Access) -> Gate {
    if session.is_loading() {
        return Gate::Loading;
    }
    match (session.user(), access) {
        (Some(_), Access::Protected) => Gate::Render,
        (Some(_), Access::GuestOnly) => Gate::Redirect(routes::TODOS),
        (None, Access::Protected) if session.is_error() => Gate::Error,
        (None, Access::Protected) => Gate::Redirect(routes::LOGIN),
        // A broken session query should not lock anyone out of signing up
        (None, Access::GuestOnly) => Gate::Render,
    }
}

/// Fetch the task list, but only for a signed-in session.
pub async fn tasks_for_session<T: Transport>(
    session: &SessionState,
    api: &ApiClient<T>,
) -> Option<Result<Vec<Task>, ApiError>> {
    if gate(session, Access::Protected) != Gate::Render {
        return None;
    }
    Some(list_tasks(api).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeBackend;

    #[tokio::test]
    async fn test_unauthenticated_visit_redirects_without_task_fetch() {
        let backend = FakeBackend::new().with_task("hidden", false);
        let api = backend.client();

        let session = load_session(&api).await;
        assert_eq!(session, SessionState::Anonymous);
        assert!(session.user().is_none());
        assert!(!session.is_loading());
        assert!(!session.is_error());
        assert_eq!(gate(&session, Access::Protected), Gate::Redirect("/login"));

        assert!(tasks_for_session(&session, &api).await.is_none());
        assert_eq!(backend.calls(), vec!["GET /user"]);
    }

    #[tokio::test]
    async fn test_signed_in_visit_fetches_tasks() {
        let backend = FakeBackend::signed_in().with_task("a", false);
        let api = backend.client();

        let session = load_session(&api).await;
        assert!(session.user().is_some());
        assert_eq!(gate(&session, Access::Protected), Gate::Render);
        assert_eq!(gate(&session, Access::GuestOnly), Gate::Redirect("/todos"));

        let tasks = tasks_for_session(&session, &api).await.expect("fetched").expect("ok");
        assert_eq!(tasks.len(), 1);
        assert_eq!(backend.calls(), vec!["GET /user", "GET /api/tasks"]);
    }

    #[tokio::test]
    async fn test_server_error_is_not_anonymous() {
        let backend = FakeBackend::new();
        backend.respond_next(Ok(crate::api::fake::ApiResponse { status: 500, body: String::new() }));

        let session = load_session(&backend.client()).await;
        assert!(session.is_error());
        assert_eq!(gate(&session, Access::Protected), Gate::Error);
        // single attempt, no retry
        assert_eq!(backend.calls().len(), 1);
    }

    #[test]
    fn test_loading_gate() {
        assert_eq!(gate(&SessionState::Loading, Access::Protected), Gate::Loading);
        assert_eq!(gate(&SessionState::Loading, Access::GuestOnly), Gate::Loading);
    }
}
