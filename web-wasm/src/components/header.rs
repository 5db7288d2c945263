//! ヘッダーコンポーネント

use crate::handle::ConsoleHandle;
use leptos::prelude::*;

#[component]
pub fn Header(handle: ConsoleHandle) -> impl IntoView {
    let state = handle.state();

    let on_logout = move |_| {
        handle.spawn(|mut console| async move {
            let _ = console.logout().await;
            console
        });
    };

    let on_add = move |_| handle.update(|console| console.open_create());

    view! {
        <header class="header">
            <h1>"商品管理"</h1>
            <Show when=move || state.with(|s| s.is_authenticated())>
                <div class="header-actions">
                    <button type="button" class="btn btn-primary" on:click=on_logout>
                        "ログアウト"
                    </button>
                    <button type="button" class="btn btn-success" on:click=on_add>
                        "商品を追加"
                    </button>
                </div>
            </Show>
        </header>
    }
}
