//! サブコマンドの実行

use crate::config::Config;
use crate::error::{CatalogAdminError, Result};
use crate::http::{catalog_api, HttpCatalogApi};
use crate::prompt::{self, DashboardAction};
use crate::render;
use crate::session_file::FileSessionStore;
use crate::terminal::TerminalFeedback;
use catalog_admin_common::{AdminConsole, SessionStore};
use chrono::Utc;

/// 端末版の管理コンソール
pub type CliConsole = AdminConsole<HttpCatalogApi, FileSessionStore, TerminalFeedback>;

/// 接続先の上書き（--base-url / --api-path）
#[derive(Debug, Clone, Default)]
pub struct ApiOverride {
    pub base_url: Option<String>,
    pub api_path: Option<String>,
}

pub fn build_console(config: &Config, endpoint: &ApiOverride) -> Result<CliConsole> {
    let api_config = config.api_config(endpoint.base_url.as_deref(), endpoint.api_path.as_deref())?;
    tracing::debug!("API: {}/v2/api/{}", api_config.base_url, api_config.api_path);

    let api = catalog_api(api_config, config.timeout())?;
    let store = FileSessionStore::in_dir(&Config::config_dir()?);
    Ok(AdminConsole::new(api, store, TerminalFeedback::new()))
}

/// 保存済みセッションを再開する（ログインしていなければエラー）
pub async fn require_session(console: &mut CliConsole) -> Result<()> {
    if console.resume(Utc::now()).await? {
        Ok(())
    } else {
        Err(CatalogAdminError::NotLoggedIn)
    }
}

pub async fn login(console: &mut CliConsole, username: Option<String>) -> Result<()> {
    let (username, password) = prompt::prompt_credentials(username)?;
    console.set_username(username);
    console.set_password(password);
    console.login().await?;
    Ok(())
}

/// 保存済みセッションがなければログインフォームを出す
pub async fn resume_or_login(console: &mut CliConsole) -> Result<()> {
    if console.resume(Utc::now()).await? {
        return Ok(());
    }
    println!("ログインしてください");
    login(console, None).await
}

pub async fn logout(console: &mut CliConsole) -> Result<()> {
    if console.store().load().is_none() {
        println!("ログインしていません");
        return Ok(());
    }
    // 期限切れ・無効なセッションはresumeの時点で削除される
    console.resume(Utc::now()).await?;
    if !console.is_authenticated() {
        println!("✔ セッションを削除しました");
        return Ok(());
    }
    console.logout().await?;
    Ok(())
}

pub fn list(console: &CliConsole) {
    println!("{}", render::product_table(&console.state().products));
}

pub fn show(console: &mut CliConsole, id: &str, image: Option<usize>) -> Result<()> {
    console.open_detail(id)?;

    if let Some(index) = image {
        let url = console.state().detail.thumbnails().get(index).map(|url| url.to_string());
        match url {
            Some(url) => console.show_image(url),
            None => {
                return Err(CatalogAdminError::InvalidArgument(format!(
                    "画像番号が範囲外です: {}",
                    index
                )));
            }
        }
    }

    if let Some(text) = render::product_detail(&console.state().detail) {
        println!("{}", text);
    }
    Ok(())
}

pub async fn add(console: &mut CliConsole) -> Result<()> {
    console.open_create();
    fill_and_submit(console).await
}

pub async fn edit(console: &mut CliConsole, id: &str) -> Result<()> {
    console.open_edit(id)?;
    fill_and_submit(console).await
}

pub async fn delete(console: &mut CliConsole, id: &str, yes: bool) -> Result<()> {
    let title = console
        .state()
        .products
        .get(id)
        .map(|p| p.title.clone())
        .unwrap_or_else(|| id.to_string());

    if !yes && !prompt::confirm_delete(&title)? {
        println!("キャンセルしました");
        return Ok(());
    }
    console.delete(id).await?;
    Ok(())
}

/// 対話式の管理画面
pub async fn run_dashboard(console: &mut CliConsole) -> Result<()> {
    println!("{}", render::product_table(&console.state().products));

    loop {
        println!();
        let action = prompt::prompt_dashboard_action()?;
        tracing::debug!(?action, "dashboard action");

        // 操作の失敗はアラート表示済みのため画面に戻る
        match action {
            DashboardAction::Add => {
                console.open_create();
                report(fill_and_submit(console).await)?;
            }
            DashboardAction::Edit(id) => {
                if console.open_edit(&id).is_ok() {
                    report(fill_and_submit(console).await)?;
                }
            }
            DashboardAction::Delete(id) => report(delete(console, &id, false).await)?,
            DashboardAction::View(id) => report(show(console, &id, None))?,
            DashboardAction::Image(index) => {
                let url = console.state().detail.thumbnails().get(index).map(|url| url.to_string());
                match url {
                    Some(url) => {
                        console.show_image(url);
                        if let Some(text) = render::product_detail(&console.state().detail) {
                            println!("{}", text);
                        }
                    }
                    None => println!("✖ 画像番号が範囲外です: {}", index),
                }
                continue;
            }
            DashboardAction::Refresh => {
                let _ = console.refresh().await;
            }
            DashboardAction::Logout => {
                let _ = console.logout().await;
                return Ok(());
            }
            DashboardAction::Quit => return Ok(()),
            DashboardAction::Unknown(input) => {
                println!("不明な操作です: {}", input);
                continue;
            }
        }

        println!("{}", render::product_table(&console.state().products));
    }
}

pub fn configure(
    config: &mut Config,
    base_url: Option<String>,
    api_path: Option<String>,
    timeout: Option<u64>,
    show: bool,
) -> Result<()> {
    let changed = base_url.is_some() || api_path.is_some() || timeout.is_some();

    if let Some(url) = base_url {
        config.base_url = url.trim_end_matches('/').to_string();
        println!("✔ ベースURLを設定しました");
    }
    if let Some(path) = api_path {
        config.api_path = path.trim_matches('/').to_string();
        println!("✔ APIパスを設定しました");
    }
    if let Some(seconds) = timeout {
        config.timeout_seconds = seconds;
        println!("✔ タイムアウトを設定しました");
    }
    if changed {
        config.save()?;
    }

    if show || !changed {
        println!("設定:");
        println!("  ベースURL: {}", display_or_unset(&config.base_url));
        println!("  APIパス: {}", display_or_unset(&config.api_path));
        println!("  タイムアウト: {}秒", config.timeout_seconds);
        println!("  設定ファイル: {}", Config::config_path()?.display());
    }
    Ok(())
}

async fn fill_and_submit(console: &mut CliConsole) -> Result<()> {
    for (field, input) in prompt::fill_draft(&console.state().draft)? {
        console.set_field(field, input);
    }
    let urls = prompt::fill_image_slots(&console.state().draft)?;
    for (index, url) in urls.into_iter().enumerate() {
        console.set_image_slot(index, url)?;
    }
    console.submit().await?;
    Ok(())
}

/// 通知済みのエラーは握りつぶし、それ以外は返す
fn report(result: Result<()>) -> Result<()> {
    match result {
        Err(e) if e.is_reported() => Ok(()),
        Err(e @ CatalogAdminError::Prompt(_)) => Err(e),
        Err(e) => {
            println!("✖ {}", e);
            Ok(())
        }
        Ok(()) => Ok(()),
    }
}

fn display_or_unset(value: &str) -> &str {
    if value.is_empty() {
        "未設定"
    } else {
        value
    }
}
