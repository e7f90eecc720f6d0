//! Static welcome view mounted at `/`.

use leptos::prelude::*;

pub const WELCOME_TEXT: &str = "Welcome to the Patient App";

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <div class="home">{WELCOME_TEXT}</div> }
}
