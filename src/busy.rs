//! In-flight Request Guards
//!
//! Every handler that talks to the backend owns a boolean busy flag. The flag
//! is checked on entry; while it is set a second click is a no-op. The guard
//! returned by [`BusyGuard::acquire`] clears the flag when dropped, so the
//! control is released on success, failure and early return alike.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;

/// Storage for a busy flag
pub trait BusyFlag: Clone {
    fn is_busy(&self) -> bool;
    fn set_busy(&self, busy: bool);
}

/// Reactive flag, so buttons can bind `disabled` to it
impl BusyFlag for RwSignal<bool> {
    fn is_busy(&self) -> bool {
        self.get_untracked()
    }

    fn set_busy(&self, busy: bool) {
        self.set(busy);
    }
}

/// Plain flag for code that does not render
impl BusyFlag for Rc<Cell<bool>> {
    fn is_busy(&self) -> bool {
        self.get()
    }

    fn set_busy(&self, busy: bool) {
        self.set(busy);
    }
}

#[must_use = "the flag is released as soon as the guard is dropped"]
pub struct BusyGuard<F: BusyFlag> {
    flag: F,
}

impl<F: BusyFlag> BusyGuard<F> {
    /// Set the flag, or return `None` if a request is already in flight.
    pub fn acquire(flag: &F) -> Option<Self> {
        if flag.is_busy() {
            return None;
        }
        flag.set_busy(true);
        Some(Self { flag: flag.clone() })
    }
}

impl<F: BusyFlag> Drop for BusyGuard<F> {
    fn drop(&mut self) {
        self.flag.set_busy(false);
    }
}

/// Run `action` while holding `flag`; `None` if the flag was already held.
pub async fn run_guarded<F, Fut>(flag: &F, action: Fut) -> Option<Fut::Output>
where
    F: BusyFlag,
    Fut: Future,
{
    let _guard = BusyGuard::acquire(flag)?;
    Some(action.await)
}
