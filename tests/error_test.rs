//! エラーケーステスト
//!
//! 端末版のエラー表示と変換を検証

use catalog_admin::error::CatalogAdminError;
use catalog_admin_common::Error;

/// コンソールのエラーは通知済みとして扱う
#[test]
fn test_console_error_is_reported() {
    let err: CatalogAdminError = Error::NotAuthenticated.into();
    assert!(err.is_reported());
    assert_eq!(err.to_string(), "ログインしていません");
}

/// 端末側のエラーは未通知
#[test]
fn test_local_errors_are_not_reported() {
    assert!(!CatalogAdminError::NotLoggedIn.is_reported());
    assert!(!CatalogAdminError::MissingApiConfig.is_reported());
    assert!(!CatalogAdminError::InvalidArgument("x".into()).is_reported());
}

/// サーバーのメッセージがそのまま表示される
#[test]
fn test_api_error_display() {
    let err: CatalogAdminError = Error::Api {
        status: 400,
        message: "登入失敗".to_string(),
        detail: None,
    }
    .into();
    assert_eq!(err.to_string(), "登入失敗");
}

/// IOエラーの変換
#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: CatalogAdminError = io.into();
    assert!(matches!(err, CatalogAdminError::Io(_)));
    assert!(err.to_string().contains("denied"));
}
