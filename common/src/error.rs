//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// サーバーがエラーペイロードを返した
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        detail: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("入力エラー: {0}")]
    Validation(String),

    #[error("副画像スロットの範囲外です: {index} (上限 {capacity})")]
    ImageSlotOutOfRange { index: usize, capacity: usize },

    #[error("セッションの保存に失敗しました: {0}")]
    Storage(String),

    #[error("ログインしていません")]
    NotAuthenticated,

    #[error("商品が見つかりません: {0}")]
    ProductNotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// アラートのタイトル
    pub fn title(&self) -> String {
        self.to_string()
    }

    /// アラートの本文（サーバーが詳細を返した場合のみ）
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_api_uses_server_message() {
        let error = Error::Api {
            status: 400,
            message: "登入失敗".to_string(),
            detail: Some("使用者不存在".to_string()),
        };
        assert_eq!(error.title(), "登入失敗");
        assert_eq!(error.detail(), Some("使用者不存在"));
    }

    #[test]
    fn test_error_display_network() {
        let error = Error::Network("connection refused".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Network error"));
        assert!(display.contains("connection refused"));
        assert!(error.detail().is_none());
    }

    #[test]
    fn test_error_display_slot() {
        let error = Error::ImageSlotOutOfRange { index: 7, capacity: 5 };
        assert_eq!(error.to_string(), "副画像スロットの範囲外です: 7 (上限 5)");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Validation("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Validation"));
        assert!(debug.contains("テスト"));
    }
}
