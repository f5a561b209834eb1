use leptos::*;

/// Spinner shown while the first price history is in flight.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <div class="loading__spinner"></div>
            <span class="loading__text">"Loading..."</span>
        </div>
    }
}
