//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::BrowserApi;
use crate::config::AppConfig;
use crate::session::SessionState;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: AppConfig,
    /// CSRF-guarded backend client
    pub api: BrowserApi,
    /// Result of the session query, `Loading` until it resolves
    pub session: ReadSignal<SessionState>,
    /// Trigger to reload tasks from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from backend - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        api: BrowserApi,
        session: ReadSignal<SessionState>,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            config,
            api,
            session,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Refetch the task list from the backend
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
