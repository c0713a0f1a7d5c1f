//! UI Components
//!
//! Reusable Leptos components.

mod edit_task_form;
mod error_list;
mod logout_button;
mod task_form;
pub(crate) mod task_item;
mod task_list;

pub use edit_task_form::EditTaskForm;
pub use error_list::ErrorList;
pub use logout_button::LogoutButton;
pub use task_form::TaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
