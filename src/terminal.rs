//! 端末へのフィードバック（スピナーとアラート）

use catalog_admin_common::{Alert, AlertKind, Feedback};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// indicatif のスピナーでローディングを表示し、アラートを標準出力に出す
pub struct TerminalFeedback {
    spinner: Option<ProgressBar>,
    quiet: bool,
}

impl Default for TerminalFeedback {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalFeedback {
    /// 標準エラーが端末でなければスピナーを出さない
    pub fn new() -> Self {
        Self::for_terminal(std::io::stderr().is_terminal())
    }

    pub fn for_terminal(is_terminal: bool) -> Self {
        Self {
            spinner: None,
            quiet: !is_terminal,
        }
    }

    fn start_spinner(&mut self) {
        if self.quiet || self.spinner.is_some() {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message("通信中...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Feedback for TerminalFeedback {
    fn alert(&mut self, alert: Alert) {
        self.stop_spinner();
        println!("{}", format_alert(&alert));
    }

    fn set_loading(&mut self, loading: bool) {
        if loading {
            self.start_spinner();
        } else {
            self.stop_spinner();
        }
    }
}

/// アラートを1行（詳細があれば2行）の文字列にする
pub fn format_alert(alert: &Alert) -> String {
    let mark = match alert.kind {
        AlertKind::Success => "✔",
        AlertKind::Error => "✖",
    };
    match &alert.text {
        Some(text) => format!("{} {}\n  {}", mark, alert.title, text),
        None => format!("{} {}", mark, alert.title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_admin_common::Error;

    #[test]
    fn test_format_success() {
        assert_eq!(format_alert(&Alert::success("削除しました！")), "✔ 削除しました！");
    }

    #[test]
    fn test_format_error_with_detail() {
        let error = Error::Api {
            status: 400,
            message: "登入失敗".to_string(),
            detail: Some("密碼錯誤".to_string()),
        };
        assert_eq!(format_alert(&Alert::error(&error)), "✖ 登入失敗\n  密碼錯誤");
    }

    #[test]
    fn test_loading_without_terminal() {
        let mut feedback = TerminalFeedback::for_terminal(false);
        feedback.set_loading(true);
        assert!(feedback.spinner.is_none());
        feedback.set_loading(false);
    }

    #[test]
    fn test_loading_on_terminal_starts_spinner() {
        let mut feedback = TerminalFeedback::for_terminal(true);
        feedback.set_loading(true);
        assert!(feedback.spinner.is_some());
        feedback.set_loading(false);
        assert!(feedback.spinner.is_none());
    }
}
