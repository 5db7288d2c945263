//! ローディングスピナー（通信中は画面全体を覆う）

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(loading: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <div class="loading-overlay">
                <div class="spinner" role="status" />
                <p class="loading-text">"通信中..."</p>
            </div>
        </Show>
    }
}
