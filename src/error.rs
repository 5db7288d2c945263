use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogAdminError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("API接続先が設定されていません。`catalog-admin config --set-base-url URL --set-api-path PATH` で設定してください")]
    MissingApiConfig,

    #[error("引数エラー: {0}")]
    InvalidArgument(String),

    #[error("ログインしていません。`catalog-admin login` でログインしてください")]
    NotLoggedIn,

    /// コンソールの操作エラー（画面には通知済み）
    #[error(transparent)]
    Console(#[from] catalog_admin_common::Error),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogAdminError {
    /// コンソールがアラートとして表示済みか
    pub fn is_reported(&self) -> bool {
        matches!(self, CatalogAdminError::Console(_))
    }
}

pub type Result<T> = std::result::Result<T, CatalogAdminError>;
