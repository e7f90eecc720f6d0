//! Patient-search page: last-name form plus result table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by the shell at `/search-patients` with no props. Reads and writes
//! the root-provided `SearchState`, so a finished search is still on screen
//! after a round trip through the Home route.

#[cfg(test)]
#[path = "patient_search_test.rs"]
mod patient_search_test;

use leptos::prelude::*;

use crate::components::patient_table::PatientTable;
use crate::state::search::SearchState;

pub(crate) const EMPTY_QUERY_MESSAGE: &str = "Enter a last name to search.";

/// Trim the last-name input and require a value.
pub(crate) fn validate_last_name(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(EMPTY_QUERY_MESSAGE)
    } else {
        Ok(trimmed.to_owned())
    }
}

#[component]
pub fn PatientSearchPage() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if search.with_untracked(|s| s.loading) {
            return;
        }
        let last_name = match search.with_untracked(|s| validate_last_name(&s.query)) {
            Ok(value) => value,
            Err(msg) => {
                search.update(|s| s.reject(msg));
                return;
            }
        };
        search.update(|s| s.begin(&last_name));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::search_patients(&last_name).await;
            if let Err(e) = &outcome {
                log::warn!("patient search for {last_name:?} failed: {e}");
            }
            search.update(|s| s.finish(outcome));
        });
    };

    let rows = Signal::derive(move || search.with(|s| s.results.clone()));

    view! {
        <section class="patient-search">
            <h1 class="patient-search__title">"Search Patients"</h1>
            <form class="patient-search__form" on:submit=on_submit>
                <input
                    class="patient-search__input"
                    type="text"
                    name="last_name"
                    placeholder="Last name"
                    prop:value=move || search.with(|s| s.query.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        search.update(|s| s.query = value);
                    }
                />
                <button
                    class="patient-search__button"
                    type="submit"
                    disabled=move || search.with(|s| s.loading)
                >
                    "Search"
                </button>
            </form>
            <Show when=move || search.with(|s| s.message.is_some())>
                <p class="patient-search__message">
                    {move || search.with(|s| s.message.clone().unwrap_or_default())}
                </p>
            </Show>
            {move || {
                search
                    .with(SearchState::results_caption)
                    .map(|caption| view! { <p class="patient-search__caption">{caption}</p> })
            }}
            <PatientTable rows=rows/>
        </section>
    }
}
