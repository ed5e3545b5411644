//! Leptos frontend for the HR shell.

pub mod app;
pub mod router;
pub mod sidebar;
pub mod storage;
pub mod topbar;

use leptos::*;
use wasm_bindgen::prelude::*;

use app::App;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = hrshell_core::ShellConfig::from_env();
    hrshell_observability::init_with_level(&config.log_level);

    mount_to_body(move || view! { <App config=config/> });
}
