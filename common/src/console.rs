//! 管理コンソール
//!
//! 画面の操作を1つずつアクションとして持つ。各アクションは
//! ローディング表示 → API呼び出し → 一覧の再取得 → アラート の順で進み、
//! 失敗時はアラートを出して直前の状態を保つ。
//!
//! リモート呼び出しを伴うアクションは `&mut self` を取るため、
//! 同じコンソールで2つの呼び出しが重なることはない。

use crate::api::CatalogApi;
use crate::detail::DetailViewer;
use crate::error::{Error, Result};
use crate::form::{FieldInput, FormMode, ProductDraft, ProductField};
use crate::session::{SessionPhase, SessionStore, SessionToken};
use crate::store::ProductList;
use crate::types::Credentials;
use chrono::{DateTime, Utc};

/// アラートの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// ユーザーへの通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub text: Option<String>,
}

impl Alert {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            title: title.into(),
            text: None,
        }
    }

    /// エラーから作成（サーバーの message をタイトル、詳細を本文に）
    pub fn error(error: &Error) -> Self {
        Self {
            kind: AlertKind::Error,
            title: error.title(),
            text: error.detail().map(str::to_string),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == AlertKind::Error
    }
}

/// 画面へのフィードバック（アラートとローディング表示）
pub trait Feedback {
    fn alert(&mut self, alert: Alert);

    fn set_loading(&mut self, loading: bool);
}

/// コンソールの画面状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsoleState {
    /// ログインフォームの入力
    pub credentials: Credentials,
    pub session: SessionPhase,
    pub products: ProductList,
    pub draft: ProductDraft,
    pub detail: DetailViewer,
    pub detail_open: bool,
    pub form_open: bool,
    pub loading: bool,
}

impl ConsoleState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

/// 管理コンソール本体
pub struct AdminConsole<A, S, F> {
    api: A,
    store: S,
    feedback: F,
    state: ConsoleState,
}

impl<A, S, F> AdminConsole<A, S, F>
where
    A: CatalogApi,
    S: SessionStore,
    F: Feedback,
{
    pub fn new(api: A, store: S, feedback: F) -> Self {
        Self {
            api,
            store,
            feedback,
            state: ConsoleState::default(),
        }
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    // ------------------------------------------------------------------
    // ログインフォーム
    // ------------------------------------------------------------------

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.state.credentials.username = username.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.state.credentials.password = password.into();
    }

    // ------------------------------------------------------------------
    // セッション
    // ------------------------------------------------------------------

    /// 入力中の資格情報でサインインし、続けてセッションを確認する
    ///
    /// サインイン成功時点でCookieを保存する。確認に失敗した場合は
    /// Cookieを消してサインアウト状態に戻す。
    pub async fn login(&mut self) -> Result<()> {
        if !self.state.credentials.is_complete() {
            return Err(self.fail(Error::Validation(
                "メールアドレスとパスワードを入力してください".into(),
            )));
        }

        log::info!("sign in: {}", self.state.credentials.username);
        self.begin();
        let result = self.api.sign_in(&self.state.credentials).await;
        let token = match result {
            Ok(token) => token,
            Err(e) => {
                self.end();
                return Err(self.fail(e));
            }
        };

        if let Err(e) = self.store.save(&token) {
            self.end();
            return Err(self.fail(e));
        }
        self.state.session = SessionPhase::Pending(token);
        self.end();

        self.check_session().await
    }

    /// 保持しているトークンを確認し、成功すればログイン状態にする
    pub async fn check_session(&mut self) -> Result<()> {
        let Some(token) = self.state.session.token().cloned() else {
            return Err(self.fail(Error::NotAuthenticated));
        };

        if let Err(e) = self.verify(token).await {
            // サインインの副作用を取り消す
            self.forget_stored_session();
            return Err(self.fail(e));
        }
        self.feedback.alert(Alert::success("おかえりなさい！"));
        self.state.credentials.clear();
        // 一覧取得の失敗は通知済み。ログイン自体は成立している
        let _ = self.refresh().await;
        Ok(())
    }

    /// 保存済みのCookieからセッションを再開する
    ///
    /// 期限切れのCookieとサーバーに拒否されたCookieは削除する。再開できた場合は `true`。
    /// 通信エラーなどで確認できなかった場合はCookieを残したままエラーを通知する。
    pub async fn resume(&mut self, now: DateTime<Utc>) -> Result<bool> {
        let Some(token) = self.store.load() else {
            return Ok(false);
        };
        if token.is_expired_at(now) {
            log::info!("stored session expired at {}", token.expires_at);
            if let Err(e) = self.store.clear() {
                return Err(self.fail(e));
            }
            return Ok(false);
        }

        self.state.session = SessionPhase::Pending(token.clone());
        match self.verify(token).await {
            Ok(()) => {}
            Err(e @ Error::Api { .. }) => {
                log::info!("stored session rejected: {}", e);
                self.forget_stored_session();
                return Ok(false);
            }
            Err(e) => return Err(self.fail(e)),
        }
        self.refresh().await?;
        Ok(true)
    }

    /// ログアウト
    ///
    /// サーバーへの通知が失敗しても、ローカルのCookieとトークンは必ず消す。
    pub async fn logout(&mut self) -> Result<()> {
        let result = match self.state.session.token().cloned() {
            Some(token) => {
                self.begin();
                let result = self.api.logout(&token).await;
                self.end();
                result
            }
            None => Ok(()),
        };

        self.clear_local_session();
        match result {
            Ok(()) => {
                self.feedback.alert(Alert::success("ログアウトしました"));
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    // ------------------------------------------------------------------
    // 商品一覧
    // ------------------------------------------------------------------

    /// 一覧をサーバーから取得して丸ごと置き換える
    pub async fn refresh(&mut self) -> Result<()> {
        let token = self.require_token()?;

        self.begin();
        let result = self.api.list_products(&token).await;
        self.end();

        match result {
            Ok(products) => {
                log::debug!("fetched {} products", products.len());
                self.state.products.replace(products);
                Ok(())
            }
            Err(e) => {
                log::error!("failed to fetch products: {}", e);
                Err(self.fail(e))
            }
        }
    }

    // ------------------------------------------------------------------
    // 商品フォーム
    // ------------------------------------------------------------------

    /// 空の下書きで追加フォームを開く
    pub fn open_create(&mut self) {
        self.state.draft = ProductDraft::create();
        self.state.form_open = true;
    }

    /// 一覧の商品を下書きにコピーして編集フォームを開く
    pub fn open_edit(&mut self, id: &str) -> Result<()> {
        let draft = match self.state.products.get(id) {
            Some(product) => ProductDraft::edit(product),
            None => Err(Error::ProductNotFound(id.to_string())),
        };
        match draft {
            Ok(draft) => {
                self.state.draft = draft;
                self.state.form_open = true;
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    pub fn close_form(&mut self) {
        self.state.form_open = false;
    }

    pub fn set_field(&mut self, field: ProductField, input: FieldInput) {
        self.state.draft.set_field(field, input);
    }

    pub fn set_field_by_name(&mut self, name: &str, input: FieldInput) -> Result<()> {
        let result = self.state.draft.set_field_by_name(name, input);
        result.map_err(|e| self.fail(e))
    }

    pub fn set_image_slot(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        let result = self.state.draft.set_image_slot(index, value);
        result.map_err(|e| self.fail(e))
    }

    /// 下書きを送信する（追加はPOST、編集はPUT）
    ///
    /// 成功時はフォームを閉じて一覧を再取得する。失敗時はフォームと下書きを残す。
    pub async fn submit(&mut self) -> Result<()> {
        let token = self.require_token()?;
        let product = match self.state.draft.to_product() {
            Ok(product) => product,
            Err(e) => return Err(self.fail(e)),
        };
        let mode = self.state.draft.mode();
        let id = self.state.draft.id().map(str::to_string);

        self.begin();
        let result = match (mode, id) {
            (FormMode::Edit, Some(id)) => self.api.update_product(&token, &id, &product).await,
            (FormMode::Edit, None) => Err(Error::Validation("編集対象のIDがありません".into())),
            (FormMode::Add, _) => self.api.create_product(&token, &product).await,
        };
        self.end();

        if let Err(e) = result {
            return Err(self.fail(e));
        }
        self.feedback.alert(Alert::success(mode.success_message()));
        self.state.form_open = false;
        let _ = self.refresh().await;
        Ok(())
    }

    /// 商品を削除する
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        let token = self.require_token()?;

        self.begin();
        let result = self.api.delete_product(&token, id).await;
        self.end();

        if let Err(e) = result {
            return Err(self.fail(e));
        }
        if self.state.detail.product().is_some_and(|p| p.id == id) {
            self.state.detail.clear();
            self.state.detail_open = false;
        }
        self.feedback.alert(Alert::success("削除しました！"));
        let _ = self.refresh().await;
        Ok(())
    }

    // ------------------------------------------------------------------
    // 詳細ビューア
    // ------------------------------------------------------------------

    pub fn open_detail(&mut self, id: &str) -> Result<()> {
        match self.state.products.get(id).cloned() {
            Some(product) => {
                self.state.detail.select(product);
                self.state.detail_open = true;
                Ok(())
            }
            None => Err(self.fail(Error::ProductNotFound(id.to_string()))),
        }
    }

    pub fn show_image(&mut self, url: impl Into<String>) {
        self.state.detail.show_image(url);
    }

    pub fn close_detail(&mut self) {
        self.state.detail_open = false;
    }

    // ------------------------------------------------------------------

    async fn verify(&mut self, token: SessionToken) -> Result<()> {
        self.begin();
        let result = self.api.check(&token).await;
        self.end();

        match result {
            Ok(()) => {
                self.state.session = SessionPhase::Active(token);
                Ok(())
            }
            Err(e) => {
                self.state.session = SessionPhase::SignedOut;
                Err(e)
            }
        }
    }

    fn forget_stored_session(&mut self) {
        if let Err(e) = self.store.clear() {
            log::warn!("failed to clear session cookie: {}", e);
        }
    }

    fn clear_local_session(&mut self) {
        if let Err(e) = self.store.clear() {
            log::warn!("failed to clear session cookie: {}", e);
        }
        self.state.session = SessionPhase::SignedOut;
        self.state.products.clear();
        self.state.detail.clear();
        self.state.detail_open = false;
        self.state.form_open = false;
    }

    fn require_token(&mut self) -> Result<SessionToken> {
        let token = match &self.state.session {
            SessionPhase::Active(token) => Some(token.clone()),
            _ => None,
        };
        token.ok_or_else(|| self.fail(Error::NotAuthenticated))
    }

    fn begin(&mut self) {
        self.state.loading = true;
        self.feedback.set_loading(true);
    }

    fn end(&mut self) {
        self.state.loading = false;
        self.feedback.set_loading(false);
    }

    /// エラーを通知して返す
    fn fail(&mut self, error: Error) -> Error {
        log::warn!("{}", error);
        self.feedback.alert(Alert::error(&error));
        error
    }
}
