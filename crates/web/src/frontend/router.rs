//! `leptos_router` as the shell's [`Router`] capability.

use std::rc::Rc;

use hrshell_core::Router;
use leptos::*;
use leptos_router::{use_location, use_navigate, Location, NavigateOptions};

/// Adapter over the ambient `leptos_router` context.
///
/// Must be created inside a component rendered under `<Router>`.
#[derive(Clone)]
pub struct BrowserRouter {
    location: Location,
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl BrowserRouter {
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            location: use_location(),
            navigate: Rc::new(move |path: &str, options: NavigateOptions| navigate(path, options)),
        }
    }

    /// Reactive pathname; reading it inside a closure subscribes to changes.
    pub fn pathname(&self) -> Memo<String> {
        self.location.pathname
    }
}

impl Router for BrowserRouter {
    fn current_path(&self) -> Option<String> {
        Some(self.location.pathname.get()).filter(|p| !p.is_empty())
    }

    fn navigate(&self, path: &str) {
        tracing::debug!(path, "navigating");
        (self.navigate)(path, NavigateOptions::default());
    }
}
