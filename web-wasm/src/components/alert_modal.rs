//! アラートモーダル

use catalog_admin_common::{Alert, AlertKind};
use leptos::prelude::*;

#[component]
pub fn AlertModal(alert: RwSignal<Option<Alert>>) -> impl IntoView {
    move || {
        alert.get().map(|current| {
            let class = match current.kind {
                AlertKind::Success => "alert-box alert-success",
                AlertKind::Error => "alert-box alert-error",
            };
            let icon = match current.kind {
                AlertKind::Success => "✔",
                AlertKind::Error => "✖",
            };
            view! {
                <div class="modal-backdrop">
                    <div class=class role="alertdialog">
                        <div class="alert-icon">{icon}</div>
                        <h2 class="alert-title">{current.title}</h2>
                        {current.text.map(|text| view! { <p class="alert-text">{text}</p> })}
                        <button type="button" class="btn btn-primary" on:click=move |_| alert.set(None)>
                            "OK"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
