//! ログインフォーム

use crate::handle::ConsoleHandle;
use leptos::prelude::*;

#[component]
pub fn LoginForm(handle: ConsoleHandle) -> impl IntoView {
    let state = handle.state();

    let login = move || {
        handle.spawn(|mut console| async move {
            let _ = console.login().await;
            console
        });
    };

    view! {
        <div class="login-panel">
            <h2>"ログイン"</h2>
            <div class="form-group">
                <label for="username">"メールアドレス"</label>
                <input
                    type="email"
                    id="username"
                    name="username"
                    prop:value=move || state.with(|s| s.credentials.username.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        handle.update(|console| console.set_username(value));
                    }
                />
            </div>
            <div class="form-group">
                <label for="password">"パスワード"</label>
                <input
                    type="password"
                    id="password"
                    name="password"
                    prop:value=move || state.with(|s| s.credentials.password.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        handle.update(|console| console.set_password(value));
                    }
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            login();
                        }
                    }
                />
            </div>
            <div class="form-actions">
                <button type="submit" class="btn btn-primary" on:click=move |_| login()>
                    "ログイン"
                </button>
            </div>
        </div>
    }
}
