//! Prescription validation panel.

use leptos::prelude::*;

#[component]
pub fn ValidatePrescription() -> impl IntoView {
    view! {
        <div class="validate-container">
            <h2>"Validate Prescription"</h2>
            <div class="card validate-container__empty">
                <p>"Select a prescription to validate."</p>
            </div>
        </div>
    }
}
