//! Root application component: navigation shell, routing, and context
//! providers.

#[cfg(all(test, feature = "ssr"))]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;

use crate::components::nav_bar::NavBar;
use crate::config::{NOT_FOUND_META_NAME, NotFoundPolicy, ShellConfig};
use crate::pages::{home::HomePage, not_found::NotFoundPage, patient_search::PatientSearchPage};
use crate::route::{AppRoute, RouteMatch, resolve};
use crate::state::search::SearchState;

const DEFAULT_TITLE: &str = "Patient App";

/// HTML shell rendered on the server for SSR + hydration.
///
/// Writes the shell configuration into a `<meta>` tag so the hydrate entry
/// point can rebuild the same `ShellConfig`.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<ShellConfig>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=NOT_FOUND_META_NAME content=config.not_found.as_str()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides session-lifetime state and mounts the router around the shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let search = RwSignal::new(SearchState::default());
    provide_context(search);

    view! {
        <Stylesheet id="leptos" href="/pkg/patient-app.css"/>

        <Router>
            <Shell/>
        </Router>
    }
}

/// Persistent layout: navigation region plus the matched route's view.
///
/// `current` is the one piece of route state: the nav marker, the title, and
/// the content region all read it. `<Routes>` only registers the table's
/// paths (the server builds its SSR route list from it) and renders nothing.
#[component]
fn Shell() -> impl IntoView {
    let config = use_context::<ShellConfig>().unwrap_or_default();
    let location = use_location();
    let current = Memo::new(move |_| resolve(&location.pathname.get()));
    let title = move || current.get().route().map_or(DEFAULT_TITLE, AppRoute::title);

    view! {
        <Title text=title/>
        <div class="app-shell">
            <NavBar current=current/>
            <main class="content">{move || content_view(current.get(), config.not_found)}</main>
            <Routes fallback=|| ()>
                <Route path=AppRoute::Home.segment() view=|| ()/>
                <Route path=AppRoute::SearchPatients.segment() view=|| ()/>
            </Routes>
        </div>
    }
}

fn content_view(current: RouteMatch, policy: NotFoundPolicy) -> AnyView {
    match current {
        RouteMatch::Found(AppRoute::Home) => view! { <HomePage/> }.into_any(),
        RouteMatch::Found(AppRoute::SearchPatients) => view! { <PatientSearchPage/> }.into_any(),
        RouteMatch::NotFound => match policy {
            NotFoundPolicy::Blank => ().into_any(),
            NotFoundPolicy::Page => view! { <NotFoundPage/> }.into_any(),
        },
    }
}
