//! `hrshell-web`
//!
//! **Responsibility:** Leptos CSR frontend for the HR application shell.
//!
//! This crate provides:
//! - `Sidebar` and `Topbar` components over `hrshell-core` view-models
//! - `localStorage`-backed session store and a `leptos_router` adapter
//! - The WASM entry point
//!
//! Decision logic lives in `hrshell-core`; this crate only binds it to the DOM.

pub mod icons;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use icons::{svg_body, ShellIcon};
