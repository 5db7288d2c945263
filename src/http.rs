//! reqwest によるHTTP送信
//!
//! 送信とタイムアウトだけを受け持つ。レスポンスの解釈は共通ライブラリの
//! `decode_response` が行う。

use catalog_admin_common::{ApiConfig, ApiRequest, ApiResponse, CatalogClient, Error, HttpTransport, Method};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;

/// CLIで使う商品管理APIクライアント
pub type HttpCatalogApi = CatalogClient<ReqwestTransport>;

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> catalog_admin_common::Result<ApiResponse> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        if let Some(token) = &request.authorization {
            builder = builder.header(AUTHORIZATION, token.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_transport_error)?;
        tracing::debug!(status, bytes = body.len(), "response received");

        Ok(ApiResponse { status, body })
    }
}

/// APIクライアントを組み立てる
pub fn catalog_api(config: ApiConfig, timeout: Duration) -> Result<HttpCatalogApi, reqwest::Error> {
    Ok(CatalogClient::new(config, ReqwestTransport::new(timeout)?))
}

fn map_transport_error(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::Network(format!("タイムアウトしました: {}", error))
    } else {
        Error::Network(error.to_string())
    }
}
