//! 商品管理APIの契約
//!
//! - Endpoint: エンドポイントとHTTPメソッド
//! - HttpTransport: 送受信だけを担う層（CLIはreqwest、Webはfetch）
//! - CatalogClient: リクエスト組み立てとレスポンス解釈（共通）

use crate::error::{Error, Result};
use crate::session::SessionToken;
use crate::types::{Credentials, Product};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// API接続設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// `/v2/api/{api_path}/...` のパスセグメント
    pub api_path: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, api_path: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let api_path: String = api_path.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_path: api_path.trim_matches('/').to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.api_path.is_empty()
    }
}

/// HTTPメソッド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// エンドポイント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    SignIn,
    Check,
    Logout,
    Products,
    CreateProduct,
    UpdateProduct(&'a str),
    DeleteProduct(&'a str),
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Products => Method::Get,
            Endpoint::SignIn | Endpoint::Check | Endpoint::Logout | Endpoint::CreateProduct => {
                Method::Post
            }
            Endpoint::UpdateProduct(_) => Method::Put,
            Endpoint::DeleteProduct(_) => Method::Delete,
        }
    }

    pub fn url(&self, config: &ApiConfig) -> String {
        let base = &config.base_url;
        let path = &config.api_path;
        match self {
            Endpoint::SignIn => format!("{}/v2/admin/signin", base),
            Endpoint::Check => format!("{}/v2/api/{}/user/check", base, path),
            Endpoint::Logout => format!("{}/v2/logout", base),
            Endpoint::Products => format!("{}/v2/api/{}/admin/products", base, path),
            Endpoint::CreateProduct => format!("{}/v2/api/{}/admin/product", base, path),
            Endpoint::UpdateProduct(id) | Endpoint::DeleteProduct(id) => {
                format!("{}/v2/api/{}/admin/product/{}", base, path, path_segment(id))
            }
        }
    }
}

/// パスの1セグメントとしてエスケープする
fn path_segment(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// 送信するリクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// `Authorization` ヘッダーの値
    pub authorization: Option<String>,
    /// JSONボディ
    pub body: Option<String>,
}

/// 受信したレスポンス
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP送受信層
///
/// 接続できなかった場合のみ `Error::Network` を返し、
/// HTTPステータスの解釈は `CatalogClient` が行う。
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// 商品管理API
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    async fn sign_in(&self, credentials: &Credentials) -> Result<SessionToken>;

    async fn check(&self, session: &SessionToken) -> Result<()>;

    async fn logout(&self, session: &SessionToken) -> Result<()>;

    async fn list_products(&self, session: &SessionToken) -> Result<Vec<Product>>;

    async fn create_product(&self, session: &SessionToken, product: &Product) -> Result<ApiMessage>;

    async fn update_product(
        &self,
        session: &SessionToken,
        id: &str,
        product: &Product,
    ) -> Result<ApiMessage>;

    async fn delete_product(&self, session: &SessionToken, id: &str) -> Result<ApiMessage>;
}

/// 成功時の汎用レスポンス
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiMessage {
    pub success: Option<bool>,
    #[serde(deserialize_with = "message_from_any")]
    pub message: String,
}

/// 作成・更新時のボディ
#[derive(Debug, Serialize)]
pub struct ProductPayload<'a> {
    pub data: &'a Product,
}

/// 商品一覧レスポンス（配列またはID→商品のオブジェクト）
#[derive(Debug, Deserialize)]
struct ProductsResponse {
    #[serde(default)]
    products: ProductCollection,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProductCollection {
    List(Vec<Product>),
    Map(BTreeMap<String, Product>),
}

impl Default for ProductCollection {
    fn default() -> Self {
        ProductCollection::List(Vec::new())
    }
}

impl ProductCollection {
    fn into_vec(self) -> Vec<Product> {
        match self {
            ProductCollection::List(list) => list,
            ProductCollection::Map(map) => map
                .into_iter()
                .map(|(id, mut product)| {
                    if product.id.is_empty() {
                        product.id = id;
                    }
                    product
                })
                .collect(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorPayload {
    message: Option<Value>,
    /// `{ "message": ... }` または文字列
    error: Option<Value>,
}

/// メッセージは文字列または文字列配列で返る
fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let joined = items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join("、");
            (!joined.is_empty()).then_some(joined)
        }
        _ => None,
    }
}

fn message_from_any<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(message_text(&value).unwrap_or_default())
}

/// レスポンスを解釈する
///
/// - 2xx かつ `success != false`: ボディを `T` として読む（空ボディは `{}`）
/// - それ以外: `Error::Api`（タイトル=message、本文=error.message）
pub fn decode_response<T: DeserializeOwned>(response: &ApiResponse) -> Result<T> {
    let body = if response.body.trim().is_empty() {
        "{}"
    } else {
        response.body.as_str()
    };
    let is_ok = (200..300).contains(&response.status);

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) if is_ok => return Err(Error::Decode(e.to_string())),
        Err(_) => Value::Null,
    };

    let rejected = value.get("success").and_then(Value::as_bool) == Some(false);
    if is_ok && !rejected {
        return serde_json::from_value(value).map_err(|e| Error::Decode(e.to_string()));
    }

    let payload: ErrorPayload = serde_json::from_value(value).unwrap_or_default();
    let message = payload
        .message
        .as_ref()
        .and_then(message_text)
        .unwrap_or_else(|| format!("HTTP {}", response.status));
    Err(Error::Api {
        status: response.status,
        message,
        detail: payload.error.as_ref().and_then(|e| match e {
            Value::Object(map) => map.get("message").and_then(message_text),
            other => message_text(other),
        }),
    })
}

/// `HttpTransport` の上に組み立てたAPIクライアント
#[derive(Debug, Clone)]
pub struct CatalogClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: HttpTransport> CatalogClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call<R: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
        session: Option<&SessionToken>,
        body: Option<String>,
    ) -> Result<R> {
        let request = ApiRequest {
            method: endpoint.method(),
            url: endpoint.url(&self.config),
            authorization: session.map(|s| s.authorization().to_string()),
            body,
        };
        log::debug!("{} {}", request.method, request.url);

        let response = self.transport.send(request).await?;
        log::debug!("HTTP {} ({} bytes)", response.status, response.body.len());
        decode_response(&response)
    }
}

impl<T: HttpTransport> CatalogApi for CatalogClient<T> {
    async fn sign_in(&self, credentials: &Credentials) -> Result<SessionToken> {
        let body = serde_json::to_string(credentials)?;
        self.call(Endpoint::SignIn, None, Some(body)).await
    }

    async fn check(&self, session: &SessionToken) -> Result<()> {
        let _: ApiMessage = self.call(Endpoint::Check, Some(session), None).await?;
        Ok(())
    }

    async fn logout(&self, session: &SessionToken) -> Result<()> {
        let _: ApiMessage = self.call(Endpoint::Logout, Some(session), None).await?;
        Ok(())
    }

    async fn list_products(&self, session: &SessionToken) -> Result<Vec<Product>> {
        let response: ProductsResponse = self.call(Endpoint::Products, Some(session), None).await?;
        Ok(response.products.into_vec())
    }

    async fn create_product(&self, session: &SessionToken, product: &Product) -> Result<ApiMessage> {
        let body = serde_json::to_string(&ProductPayload { data: product })?;
        self.call(Endpoint::CreateProduct, Some(session), Some(body)).await
    }

    async fn update_product(
        &self,
        session: &SessionToken,
        id: &str,
        product: &Product,
    ) -> Result<ApiMessage> {
        let body = serde_json::to_string(&ProductPayload { data: product })?;
        self.call(Endpoint::UpdateProduct(id), Some(session), Some(body)).await
    }

    async fn delete_product(&self, session: &SessionToken, id: &str) -> Result<ApiMessage> {
        self.call(Endpoint::DeleteProduct(id), Some(session), None).await
    }
}
