//! `document.cookie` によるセッション保存

use catalog_admin_common::session::{expired_cookie, token_from_cookie_header};
use catalog_admin_common::{Error, Result, SessionStore, SessionToken};
use chrono::{DateTime, Utc};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

#[derive(Debug, Clone, Copy, Default)]
pub struct CookieSessionStore;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

fn write_cookie(cookie: &str) -> Result<()> {
    let document = html_document().ok_or_else(|| Error::Storage("document がありません".into()))?;
    document
        .set_cookie(cookie)
        .map_err(|e| Error::Storage(format!("{:?}", e)))
}

impl SessionStore for CookieSessionStore {
    fn save(&mut self, token: &SessionToken) -> Result<()> {
        write_cookie(&token.to_cookie())
    }

    /// ブラウザは期限切れのCookieを返さないため、期限は無期限として扱う
    fn load(&self) -> Option<SessionToken> {
        let header = html_document()?.cookie().ok()?;
        let token = token_from_cookie_header(&header)?;
        Some(SessionToken::new(token, DateTime::<Utc>::MAX_UTC))
    }

    fn clear(&mut self) -> Result<()> {
        write_cookie(&expired_cookie())
    }
}
