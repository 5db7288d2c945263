//! fetch によるHTTP送信

use crate::config;
use catalog_admin_common::{ApiRequest, ApiResponse, CatalogClient, Error, HttpTransport, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// ブラウザで使う商品管理APIクライアント
pub type WebCatalogApi = CatalogClient<FetchTransport>;

/// ビルド時の接続先でクライアントを作る
pub fn catalog_api() -> WebCatalogApi {
    CatalogClient::new(config::api_config(), FetchTransport)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl HttpTransport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        fetch(&request)
            .await
            .map_err(|e| Error::Network(js_error_message(&e)))
    }
}

async fn fetch(request: &ApiRequest) -> std::result::Result<ApiResponse, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(request.method.as_str());
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &request.body {
        opts.set_body(&JsValue::from_str(body));
    }

    let req = Request::new_with_str_and_init(&request.url, &opts)?;
    if request.body.is_some() {
        req.headers().set("Content-Type", "application/json")?;
    }
    if let Some(token) = &request.authorization {
        req.headers().set("Authorization", token)?;
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window がありません"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&req)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let status = resp.status();
    let body = JsFuture::from(resp.text()?).await?.as_string().unwrap_or_default();
    log::debug!("{} {} -> {}", request.method, request.url, status);

    Ok(ApiResponse { status, body })
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{:?}", value))
}
