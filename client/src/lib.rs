//! # client
//!
//! Leptos + WASM frontend for the patient app.
//!
//! The crate is a thin navigation shell: a router, a persistent navigation
//! bar, and two routes (a welcome view and the patient-search view). It is
//! rendered on the server through `leptos_axum` (feature `ssr`) and hydrated
//! in the browser (feature `hydrate`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod route;
pub mod state;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = config::ShellConfig::from_document();
    log::debug!("hydrating shell, not_found={}", config.not_found.as_str());

    leptos::mount::hydrate_body(move || {
        provide_context(config);
        view! { <App/> }
    });
}
