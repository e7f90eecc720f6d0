//! Result table for patient searches.

use leptos::prelude::*;

use crate::net::types::PatientSummary;

#[component]
pub fn PatientTable(#[prop(into)] rows: Signal<Vec<PatientSummary>>) -> impl IntoView {
    view! {
        <Show when=move || !rows.with(Vec::is_empty)>
            <table class="patient-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Date of Birth"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| row.id
                        children=move |row: PatientSummary| {
                            view! {
                                <tr>
                                    <td>{row.id}</td>
                                    <td>{row.name}</td>
                                    <td>{row.dob}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}
