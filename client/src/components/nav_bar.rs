//! Persistent navigation bar.
//!
//! Links are generated from the route table in table order and rendered the
//! same on every route; only the active marker follows the current route.
//! Navigation goes through `leptos_router`'s `<A>`, which updates history
//! without reloading the document.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::route::{AppRoute, ROUTES, RouteMatch};

/// Class for the list item wrapping `route`'s link.
pub(crate) fn link_class(route: AppRoute, current: RouteMatch) -> &'static str {
    if current == RouteMatch::Found(route) {
        "nav-bar__item nav-bar__item--active"
    } else {
        "nav-bar__item"
    }
}

#[component]
pub fn NavBar(#[prop(into)] current: Signal<RouteMatch>) -> impl IntoView {
    view! {
        <nav class="nav-bar" aria-label="Primary">
            <ul class="nav-bar__links">
                {ROUTES
                    .iter()
                    .map(|&(path, route)| {
                        view! {
                            <li class=move || link_class(route, current.get())>
                                <A href=path exact=true>
                                    {route.label()}
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
