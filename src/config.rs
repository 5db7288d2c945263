use crate::error::{CatalogAdminError, Result};
use catalog_admin_common::ApiConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 接続先の環境変数（設定ファイルより優先）
pub const BASE_URL_ENV: &str = "CATALOG_API_BASE_URL";
pub const API_PATH_ENV: &str = "CATALOG_API_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub api_path: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_path: String::new(),
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 設定ディレクトリ（~/.config/catalog-admin）
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CatalogAdminError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("catalog-admin"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }

    /// 接続先を解決する（フラグ > 環境変数 > 設定ファイル）
    pub fn api_config(&self, base_url: Option<&str>, api_path: Option<&str>) -> Result<ApiConfig> {
        let base_url = non_blank(base_url.map(str::to_string))
            .or_else(|| non_blank(std::env::var(BASE_URL_ENV).ok()))
            .unwrap_or_else(|| self.base_url.clone());
        let api_path = non_blank(api_path.map(str::to_string))
            .or_else(|| non_blank(std::env::var(API_PATH_ENV).ok()))
            .unwrap_or_else(|| self.api_path.clone());

        let config = ApiConfig::new(base_url, api_path);
        if !config.is_configured() {
            return Err(CatalogAdminError::MissingApiConfig);
        }
        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
