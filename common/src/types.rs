//! 商品・認証情報の型定義
//!
//! サーバーのJSON表現に合わせたフィールド名を使う:
//! - Product: 商品レコード（`imageUrl` / `imagesUrl` はcamelCase）
//! - Credentials: サインイン時に送る管理者の資格情報

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 商品レコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 新規作成時は空
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub category: String,

    #[serde(default, deserialize_with = "number_from_any")]
    pub origin_price: f64,

    #[serde(default, deserialize_with = "number_from_any")]
    pub price: f64,

    #[serde(default)]
    pub unit: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub description: String,

    /// サーバーによっては 0/1 で返る
    #[serde(default, deserialize_with = "bool_from_flag")]
    pub is_enabled: bool,

    /// 主画像
    #[serde(default, rename = "imageUrl")]
    pub image_url: String,

    /// 副画像（最大5枚）
    #[serde(default, rename = "imagesUrl", deserialize_with = "urls_from_sparse")]
    pub images_url: Vec<String>,

    /// 画面で扱わないフィールド（編集時にそのまま送り返す）
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// 一覧の状態表示
    pub fn status_label(&self) -> &'static str {
        if self.is_enabled {
            "有効"
        } else {
            "無効"
        }
    }
}

/// 管理者の資格情報
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }

    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// 価格の表示（整数なら小数点なし）
pub fn format_price(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

fn bool_from_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_f64().map(|v| v != 0.0).unwrap_or(false)),
        Value::String(s) => Ok(matches!(s.as_str(), "1" | "true" | "on")),
        _ => Ok(false),
    }
}

fn number_from_any<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("price out of range")),
        Value::String(s) if s.trim().is_empty() => Ok(0.0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid price: {}", s))),
        Value::Null => Ok(0.0),
        other => Err(serde::de::Error::custom(format!("invalid price: {}", other))),
    }
}

fn urls_from_sparse<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let urls: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(urls
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserialize_server_record() {
        let json = r#"{
            "id": "-NxA1",
            "title": "草莓蛋糕",
            "category": "蛋糕",
            "origin_price": 500,
            "price": 450,
            "unit": "個",
            "content": "6吋",
            "description": "季節限定",
            "is_enabled": 1,
            "imageUrl": "https://example.com/main.jpg",
            "imagesUrl": ["https://example.com/a.jpg", null, "https://example.com/c.jpg"],
            "num": 3
        }"#;

        let product: Product = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(product.id, "-NxA1");
        assert_eq!(product.origin_price, 500.0);
        assert!(product.is_enabled);
        assert_eq!(product.image_url, "https://example.com/main.jpg");
        assert_eq!(
            product.images_url,
            vec!["https://example.com/a.jpg", "", "https://example.com/c.jpg"]
        );
        assert_eq!(product.extra.get("num"), Some(&Value::from(3)));
    }

    #[test]
    fn test_product_deserialize_missing_images() {
        let product: Product =
            serde_json::from_str(r#"{"id":"1","title":"t","is_enabled":false}"#).unwrap();
        assert!(product.images_url.is_empty());
        assert!(!product.is_enabled);
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn test_product_deserialize_string_price() {
        let product: Product =
            serde_json::from_str(r#"{"id":"1","origin_price":"120","price":""}"#).unwrap();
        assert_eq!(product.origin_price, 120.0);
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn test_product_serialize_wire_names() {
        let product = Product {
            title: "マフィン".to_string(),
            image_url: "main.png".to_string(),
            images_url: vec!["a.png".to_string()],
            is_enabled: true,
            ..Default::default()
        };

        let json = serde_json::to_value(&product).expect("シリアライズ失敗");
        assert_eq!(json["imageUrl"], "main.png");
        assert_eq!(json["imagesUrl"][0], "a.png");
        assert_eq!(json["is_enabled"], true);
        // 新規作成時はidを送らない
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("admin@example.com", "secret");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("admin@example.com"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_credentials_complete() {
        assert!(Credentials::new("a", "b").is_complete());
        assert!(!Credentials::new("  ", "b").is_complete());
        assert!(!Credentials::new("a", "").is_complete());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(100.0), "100");
        assert_eq!(format_price(99.5), "99.5");
    }
}
