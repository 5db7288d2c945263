//! コンソールとLeptosのシグナルをつなぐハンドル
//!
//! コンソール本体は `StoredValue` に置き、画面は `ConsoleState` の
//! スナップショット（シグナル）を読む。非同期アクションの間は
//! コンソールを取り出しておき、その間のクリックは捨てる。

use crate::api::WebCatalogApi;
use crate::cookie::CookieSessionStore;
use crate::feedback::SignalFeedback;
use catalog_admin_common::{AdminConsole, ConsoleState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

pub type WebConsole = AdminConsole<WebCatalogApi, CookieSessionStore, SignalFeedback>;

#[derive(Clone, Copy)]
pub struct ConsoleHandle {
    console: StoredValue<Option<WebConsole>>,
    state: RwSignal<ConsoleState>,
}

impl ConsoleHandle {
    pub fn new(console: WebConsole) -> Self {
        Self {
            state: RwSignal::new(console.state().clone()),
            console: StoredValue::new(Some(console)),
        }
    }

    pub fn state(&self) -> ReadSignal<ConsoleState> {
        self.state.read_only()
    }

    /// 同期アクション（フォーム入力・モーダルの開閉）
    pub fn update(&self, action: impl FnOnce(&mut WebConsole)) {
        let snapshot = self
            .console
            .try_update_value(|slot| {
                slot.as_mut().map(|console| {
                    action(console);
                    console.state().clone()
                })
            })
            .flatten();

        match snapshot {
            Some(state) => self.state.set(state),
            None => log::warn!("処理中のため入力を無視しました"),
        }
    }

    /// 非同期アクション（通信を伴う操作）
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(WebConsole) -> Fut + 'static,
        Fut: Future<Output = WebConsole> + 'static,
    {
        let Some(console) = self.console.try_update_value(Option::take).flatten() else {
            log::warn!("処理中のためクリックを無視しました");
            return;
        };

        let handle = *self;
        spawn_local(async move {
            let console = action(console).await;
            handle.state.set(console.state().clone());
            handle.console.set_value(Some(console));
        });
    }
}
