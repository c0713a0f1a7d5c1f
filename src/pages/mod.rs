//! Pages
//!
//! One component per route.

mod login;
mod register;
mod todos;

pub use login::LoginPage;
pub use register::RegisterPage;
pub use todos::TodosPage;
