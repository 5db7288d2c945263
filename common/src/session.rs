//! セッション（トークン・Cookie）の管理
//!
//! トークンはグローバルなヘッダーに置かず、`SessionToken` として
//! 各APIリクエストに明示的に渡す。

use crate::error::Result;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// セッションCookie名
pub const COOKIE_NAME: &str = "userToken";

/// 削除用の期限切れ日時
pub const EXPIRED_COOKIE_DATE: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// サインインで発行されたトークンと有効期限
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub token: String,
    /// サーバーはミリ秒のUNIX時刻で返す
    #[serde(rename = "expired", with = "chrono::serde::ts_milliseconds")]
    pub expires_at: DateTime<Utc>,
}

impl SessionToken {
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    /// ミリ秒のUNIX時刻から作成
    pub fn from_millis(token: impl Into<String>, expired_ms: i64) -> Option<Self> {
        let expires_at = Utc.timestamp_millis_opt(expired_ms).single()?;
        Some(Self::new(token, expires_at))
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// `Authorization` ヘッダーの値（スキームなしのトークン）
    pub fn authorization(&self) -> &str {
        &self.token
    }

    /// `document.cookie` に書き込む文字列
    pub fn to_cookie(&self) -> String {
        format!(
            "{}={}; expires={}; path=/",
            COOKIE_NAME,
            self.token,
            self.expires_at.format("%a, %d %b %Y %H:%M:%S GMT")
        )
    }
}

/// Cookieを削除するための文字列
pub fn expired_cookie() -> String {
    format!("{}=; expires={}; path=/", COOKIE_NAME, EXPIRED_COOKIE_DATE)
}

/// `document.cookie` 形式の文字列からトークンを取り出す
///
/// ブラウザは有効期限を返さないため、値のみを返す。
pub fn token_from_cookie_header(header: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| name.trim() == COOKIE_NAME)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// セッションの永続化先（ブラウザのCookie、CLIのセッションファイル）
pub trait SessionStore {
    fn save(&mut self, token: &SessionToken) -> Result<()>;

    fn load(&self) -> Option<SessionToken>;

    fn clear(&mut self) -> Result<()>;
}

/// メモリ上のみのセッション保存先
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    token: Option<SessionToken>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: SessionToken) -> Self {
        Self { token: Some(token) }
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&mut self, token: &SessionToken) -> Result<()> {
        self.token = Some(token.clone());
        Ok(())
    }

    fn load(&self) -> Option<SessionToken> {
        self.token.clone()
    }

    fn clear(&mut self) -> Result<()> {
        self.token = None;
        Ok(())
    }
}

/// セッションの状態
///
/// SignedOut → (サインイン成功) → Pending → (チェック成功) → Active → (ログアウト) → SignedOut
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    SignedOut,
    /// サインイン済み・チェック未完了
    Pending(SessionToken),
    Active(SessionToken),
}

impl SessionPhase {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionPhase::Active(_))
    }

    /// リクエストに添付するトークン
    pub fn token(&self) -> Option<&SessionToken> {
        match self {
            SessionPhase::SignedOut => None,
            SessionPhase::Pending(token) | SessionPhase::Active(token) => Some(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_token() -> SessionToken {
        SessionToken::from_millis("abc.def", 1_767_225_600_000).unwrap()
    }

    #[test]
    fn test_session_token_from_sign_in_json() {
        let token: SessionToken =
            serde_json::from_str(r#"{"token":"abc.def","expired":1767225600000}"#).unwrap();
        assert_eq!(token, sample_token());
        assert_eq!(token.expires_at.to_rfc3339(), "2026-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_to_cookie() {
        assert_eq!(
            sample_token().to_cookie(),
            "userToken=abc.def; expires=Thu, 01 Jan 2026 00:00:00 GMT; path=/"
        );
    }

    #[test]
    fn test_expired_cookie() {
        assert_eq!(
            expired_cookie(),
            "userToken=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/"
        );
    }

    #[test]
    fn test_token_from_cookie_header() {
        assert_eq!(
            token_from_cookie_header("theme=dark; userToken=abc.def; lang=ja"),
            Some("abc.def".to_string())
        );
        assert_eq!(token_from_cookie_header("userToken="), None);
        assert_eq!(token_from_cookie_header("theme=dark"), None);
        assert_eq!(token_from_cookie_header(""), None);
    }

    #[test]
    fn test_is_expired_at() {
        let token = sample_token();
        let before = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 1).unwrap();
        assert!(!token.is_expired_at(before));
        assert!(token.is_expired_at(after));
    }

    #[test]
    fn test_session_phase() {
        let token = sample_token();
        assert!(!SessionPhase::SignedOut.is_authenticated());
        assert!(SessionPhase::SignedOut.token().is_none());
        assert!(!SessionPhase::Pending(token.clone()).is_authenticated());
        assert_eq!(SessionPhase::Pending(token.clone()).token(), Some(&token));
        assert!(SessionPhase::Active(token).is_authenticated());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemorySessionStore::new();
        assert!(store.load().is_none());
        store.save(&sample_token()).unwrap();
        assert_eq!(store.load(), Some(sample_token()));
        store.clear().unwrap();
        assert!(store.load().is_none());
    }
}
