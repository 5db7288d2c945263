//! ビルド時に埋め込まれた接続先

use catalog_admin_common::ApiConfig;

pub fn api_config() -> ApiConfig {
    let config = ApiConfig::new(
        option_env!("CATALOG_API_BASE_URL").unwrap_or_default(),
        option_env!("CATALOG_API_PATH").unwrap_or_default(),
    );
    if !config.is_configured() {
        log::error!("CATALOG_API_BASE_URL / CATALOG_API_PATH が設定されていません");
    }
    config
}
