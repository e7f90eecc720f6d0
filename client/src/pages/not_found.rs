//! Optional view for paths with no route (`SHELL_NOT_FOUND=page`).

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <div class="not-found">"Page not found."</div> }
}
