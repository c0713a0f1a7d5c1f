//! In-memory backend for tests
//!
//! Mimics the session backend closely enough to drive the handlers: it
//! enforces the CSRF bootstrap before every mutation, keeps a session,
//! validates input with 422 bodies, and records every request it sees.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::client::ApiClient;
pub use super::transport::{ApiRequest, ApiResponse, Method};
use super::transport::Transport;
use crate::error::ApiError;
use crate::models::Task;

pub const CSRF_PATH: &str = "/sanctum/csrf-cookie";

#[derive(Default)]
struct FakeState {
    users: Vec<(String, String)>,
    session: Option<String>,
    tasks: Vec<Task>,
    next_id: u64,
    log: Vec<ApiRequest>,
    queued: Vec<Result<ApiResponse, ApiError>>,
    slow: bool,
    csrf_down: bool,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Rc<RefCell<FakeState>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client(&self) -> ApiClient<FakeBackend> {
        ApiClient::new(self.clone(), CSRF_PATH)
    }

    /// Backend with a registered user who is already signed in
    pub fn signed_in() -> Self {
        let backend = Self::new();
        {
            let mut state = backend.state.borrow_mut();
            state.users.push(("me@example.com".into(), "secret123".into()));
            state.session = Some("me@example.com".into());
        }
        backend
    }

    pub fn with_task(self, title: &str, is_completed: bool) -> Self {
        {
            let mut state = self.state.borrow_mut();
            state.next_id += 1;
            let id = state.next_id;
            state.tasks.push(Task { id, title: title.into(), is_completed, due_date: None });
        }
        self
    }

    /// Yield to the executor once before answering each request
    pub fn slow(self) -> Self {
        self.state.borrow_mut().slow = true;
        self
    }

    /// Make the CSRF bootstrap fail at the network level
    pub fn break_csrf(&self) {
        self.state.borrow_mut().csrf_down = true;
    }

    /// Answer the next non-CSRF request with this instead of handling it
    pub fn respond_next(&self, response: Result<ApiResponse, ApiError>) {
        self.state.borrow_mut().queued.push(response);
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.state.borrow().tasks.clone()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().log.clone()
    }

    /// Requests other than the CSRF bootstrap, as `METHOD path`
    pub fn calls(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter(|r| r.path != CSRF_PATH)
            .map(|r| format!("{} {}", r.method.as_str(), r.path))
            .collect()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests().iter().filter(|r| r.method == method && r.path == path).count()
    }

    fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let mut state = self.state.borrow_mut();
        let previous = state.log.iter().rev().nth(1).map(|r| r.path.clone());

        if request.method == Method::Get && request.path == CSRF_PATH {
            return reply(204, Value::Null);
        }
        if request.method != Method::Get && previous.as_deref() != Some(CSRF_PATH) {
            return reply(419, json!({ "message": "CSRF token mismatch." }));
        }
        let body = request.body.clone().unwrap_or(Value::Null);
        let text = |key: &str| body.get(key).and_then(Value::as_str).unwrap_or_default().to_string();

        match (request.method, request.path.as_str()) {
            (Method::Post, "/register") => {
                let email = text("email");
                if text("password") != text("password_confirmation") {
                    return invalid("password", "The password field confirmation does not match.");
                }
                if state.users.iter().any(|(known, _)| *known == email) {
                    return invalid("email", "The email has already been taken.");
                }
                state.users.push((email, text("password")));
                reply(201, Value::Null)
            }
            (Method::Post, "/login") => {
                let email = text("email");
                let password = text("password");
                if state.users.iter().any(|(e, p)| *e == email && *p == password) {
                    state.session = Some(email);
                    reply(204, Value::Null)
                } else {
                    invalid("email", "These credentials do not match our records.")
                }
            }
            (Method::Post, "/logout") => {
                state.session = None;
                reply(204, Value::Null)
            }
            (_, path) if state.session.is_none() && (path == "/user" || path.starts_with("/api/")) => {
                reply(401, json!({ "message": "Unauthenticated." }))
            }
            (Method::Get, "/user") => {
                let email = state.session.clone();
                reply(200, json!({ "id": 1, "name": "Me", "email": email }))
            }
            (Method::Get, "/api/tasks") => reply(200, json!(state.tasks)),
            (Method::Post, "/api/tasks") => {
                let title = text("title");
                if title.trim().is_empty() {
                    return invalid("title", "The title field is required.");
                }
                state.next_id += 1;
                let task = Task {
                    id: state.next_id,
                    title,
                    is_completed: false,
                    due_date: body.get("due_date").and_then(Value::as_str).map(str::to_string),
                };
                state.tasks.push(task.clone());
                reply(201, json!(task))
            }
            (method, path) if path.starts_with("/api/tasks/") => {
                let Some(id) = path.trim_start_matches("/api/tasks/").parse::<u64>().ok() else {
                    return reply(404, json!({ "message": "Not Found" }));
                };
                let Some(index) = state.tasks.iter().position(|t| t.id == id) else {
                    return reply(404, json!({ "message": "Not Found" }));
                };
                match method {
                    Method::Put => {
                        let task = &mut state.tasks[index];
                        if let Some(title) = body.get("title").and_then(Value::as_str) {
                            if title.trim().is_empty() {
                                return invalid("title", "The title field is required.");
                            }
                            task.title = title.to_string();
                        }
                        if let Some(done) = body.get("is_completed").and_then(Value::as_bool) {
                            task.is_completed = done;
                        }
                        if let Some(due) = body.get("due_date") {
                            task.due_date = due.as_str().map(str::to_string);
                        }
                        reply(200, json!(task))
                    }
                    Method::Delete => {
                        state.tasks.remove(index);
                        reply(204, Value::Null)
                    }
                    _ => reply(405, json!({ "message": "Method Not Allowed" })),
                }
            }
            _ => reply(404, json!({ "message": "Not Found" })),
        }
    }
}

fn reply(status: u16, body: Value) -> ApiResponse {
    let body = if body.is_null() { String::new() } else { body.to_string() };
    ApiResponse { status, body }
}

fn invalid(field: &str, message: &str) -> ApiResponse {
    reply(422, json!({ "message": message, "errors": { field: [message] } }))
}

#[async_trait(?Send)]
impl Transport for FakeBackend {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let (slow, csrf_down) = {
            let mut state = self.state.borrow_mut();
            state.log.push(request.clone());
            (state.slow, state.csrf_down)
        };
        if slow {
            tokio::task::yield_now().await;
        }
        if csrf_down && request.path == CSRF_PATH {
            return Err(ApiError::Network("connection refused".into()));
        }

        if request.path != CSRF_PATH {
            let queued = {
                let mut state = self.state.borrow_mut();
                if state.queued.is_empty() { None } else { Some(state.queued.remove(0)) }
            };
            if let Some(response) = queued {
                return response;
            }
        }
        Ok(self.handle(request))
    }
}
