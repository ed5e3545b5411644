//! Leptos application with routing.

use std::rc::Rc;

use hrshell_core::{NavigationPanel, SessionStore, ShellConfig};
use leptos::*;
use leptos_router::*;

use crate::frontend::router::BrowserRouter;
use crate::frontend::sidebar::Sidebar;
use crate::frontend::storage::session_store;
use crate::frontend::topbar::Topbar;

/// Shared, read-only shell dependencies handed to components via context.
#[derive(Clone)]
pub struct ShellContext {
    pub config: Rc<ShellConfig>,
    pub panel: Rc<NavigationPanel>,
    pub store: Rc<dyn SessionStore>,
}

/// Main application component.
#[component]
pub fn App(config: ShellConfig) -> impl IntoView {
    provide_context(ShellContext {
        config: Rc::new(config),
        panel: Rc::new(NavigationPanel::standard()),
        store: session_store(),
    });

    view! {
        <Router>
            <Routes>
                <Route path="/login" view=LoginPage/>
                <Route path="/" view=ShellLayout>
                    <Route path="" view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route path="*any" view=SectionPage/>
                </Route>
            </Routes>
        </Router>
    }
}

/// Sidebar + topbar around the routed page.
#[component]
fn ShellLayout() -> impl IntoView {
    view! {
        <div class="flex h-screen bg-background">
            <Sidebar/>
            <div class="flex flex-1 flex-col overflow-hidden">
                <Topbar/>
                <main class="flex-1 overflow-y-auto p-6">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}

/// Placeholder section page, titled after the matching navigation entry.
#[component]
fn SectionPage() -> impl IntoView {
    let ShellContext { panel, .. } = expect_context::<ShellContext>();
    let pathname = BrowserRouter::new().pathname();

    let title = move || {
        let current = pathname.get();
        panel
            .active_entries(Some(&current))
            .next()
            .map(|entry| entry.label.to_string())
            .unwrap_or_else(|| "Страница не найдена".to_string())
    };

    view! {
        <section>
            <h1 class="text-2xl font-bold">{title}</h1>
        </section>
    }
}

/// Sign-in entry point; authentication itself is served elsewhere.
#[component]
fn LoginPage() -> impl IntoView {
    let ShellContext { config, .. } = expect_context::<ShellContext>();

    view! {
        <div class="flex h-screen items-center justify-center">
            <h1 class="text-xl font-bold text-primary">{config.brand_title.clone()}</h1>
        </div>
    }
}
