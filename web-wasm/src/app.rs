//! メインアプリケーションコンポーネント

use crate::api::catalog_api;
use crate::components::{
    alert_modal::AlertModal,
    detail_modal::DetailModal,
    header::Header,
    loading_spinner::LoadingSpinner,
    login_form::LoginForm,
    product_form_modal::ProductFormModal,
    product_table::ProductTable,
};
use crate::cookie::CookieSessionStore;
use crate::feedback::SignalFeedback;
use crate::handle::ConsoleHandle;
use catalog_admin_common::AdminConsole;
use chrono::Utc;
use leptos::prelude::*;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let feedback = SignalFeedback::new();
    let handle = ConsoleHandle::new(AdminConsole::new(catalog_api(), CookieSessionStore, feedback));
    let state = handle.state();

    // 保存済みCookieがあればセッションを再開
    handle.spawn(|mut console| async move {
        match console.resume(Utc::now()).await {
            Ok(true) => log::info!("セッションを再開しました"),
            Ok(false) => {}
            Err(e) => log::warn!("セッションの再開に失敗: {}", e),
        }
        console
    });

    view! {
        <div class="container">
            <Header handle=handle />

            <Show
                when=move || state.with(|s| s.is_authenticated())
                fallback=move || view! { <LoginForm handle=handle /> }
            >
                <ProductTable handle=handle />
            </Show>

            <Show when=move || state.with(|s| s.detail_open)>
                <DetailModal handle=handle />
            </Show>

            <Show when=move || state.with(|s| s.form_open)>
                <ProductFormModal handle=handle />
            </Show>

            <AlertModal alert=feedback.alert_signal() />
            <LoadingSpinner loading=feedback.loading_signal() />
        </div>
    }
}
