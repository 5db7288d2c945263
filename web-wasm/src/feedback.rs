//! シグナルによるフィードバック（アラートモーダルとスピナー）

use catalog_admin_common::{Alert, Feedback};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SignalFeedback {
    alert: RwSignal<Option<Alert>>,
    loading: RwSignal<bool>,
}

impl SignalFeedback {
    pub fn new() -> Self {
        Self {
            alert: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    pub fn alert_signal(&self) -> RwSignal<Option<Alert>> {
        self.alert
    }

    pub fn loading_signal(&self) -> RwSignal<bool> {
        self.loading
    }
}

impl Feedback for SignalFeedback {
    /// 表示中のアラートは新しいもので置き換える
    fn alert(&mut self, alert: Alert) {
        if alert.is_error() {
            log::warn!("{}", alert.title);
        }
        self.alert.set(Some(alert));
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading.set(loading);
    }
}
