//! 対話入力（ログイン・商品フォーム・ダッシュボード）

use crate::error::Result;
use catalog_admin_common::form::parse_price;
use catalog_admin_common::{FieldInput, ProductDraft, ProductField, IMAGE_SLOT_CAPACITY};
use dialoguer::{Confirm, Input, Password};

/// ダッシュボードの操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    Add,
    Edit(String),
    Delete(String),
    View(String),
    /// 詳細表示中のサムネイルを切り替える
    Image(usize),
    Refresh,
    Logout,
    Quit,
    Unknown(String),
}

pub const DASHBOARD_HELP: &str =
    "a:追加 e <ID>:編集 d <ID>:削除 v <ID>:詳細 i <番号>:画像切替 r:再読込 l:ログアウト q:終了";

/// ダッシュボードの入力を解釈する
pub fn parse_dashboard_action(input: &str) -> DashboardAction {
    let mut parts = input.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::to_string);

    match (command, arg) {
        ("a", None) => DashboardAction::Add,
        ("e", Some(id)) => DashboardAction::Edit(id),
        ("d", Some(id)) => DashboardAction::Delete(id),
        ("v", Some(id)) => DashboardAction::View(id),
        ("i", Some(n)) => match n.parse() {
            Ok(index) => DashboardAction::Image(index),
            Err(_) => DashboardAction::Unknown(input.trim().to_string()),
        },
        ("" | "r", None) => DashboardAction::Refresh,
        ("l", None) => DashboardAction::Logout,
        ("q" | "Q", None) => DashboardAction::Quit,
        _ => DashboardAction::Unknown(input.trim().to_string()),
    }
}

pub fn prompt_dashboard_action() -> Result<DashboardAction> {
    let input: String = Input::new()
        .with_prompt(DASHBOARD_HELP)
        .allow_empty(true)
        .interact_text()?;
    Ok(parse_dashboard_action(&input))
}

/// メールアドレスとパスワードを入力
pub fn prompt_credentials(username: Option<String>) -> Result<(String, String)> {
    let username = match username {
        Some(username) => username,
        None => Input::new().with_prompt("メールアドレス").interact_text()?,
    };
    let password = Password::new().with_prompt("パスワード").interact()?;
    Ok((username, password))
}

/// 下書きの各フィールドを入力（現在値を初期値にする）
pub fn fill_draft(draft: &ProductDraft) -> Result<Vec<(ProductField, FieldInput)>> {
    println!("\n{}", draft.mode().title());

    let mut inputs = Vec::with_capacity(ProductField::ALL.len());
    for field in ProductField::ALL {
        let input = if field.is_checkbox() {
            let checked = Confirm::new()
                .with_prompt(field.label())
                .default(draft.is_enabled)
                .interact()?;
            FieldInput::Checked(checked)
        } else {
            let mut prompt = Input::<String>::new()
                .with_prompt(field.label())
                .with_initial_text(draft.field_text(field))
                .allow_empty(true);
            if field.is_numeric() {
                prompt = prompt.validate_with(move |text: &String| -> std::result::Result<(), String> {
                    parse_price(field, text).map(|_| ()).map_err(|e| e.to_string())
                });
            }
            FieldInput::Text(prompt.interact_text()?)
        };
        inputs.push((field, input));
    }
    Ok(inputs)
}

/// 副画像スロットを入力
pub fn fill_image_slots(draft: &ProductDraft) -> Result<Vec<String>> {
    let mut urls = Vec::with_capacity(IMAGE_SLOT_CAPACITY);
    for index in 0..IMAGE_SLOT_CAPACITY {
        let url: String = Input::new()
            .with_prompt(format!("副画像{}", index + 1))
            .with_initial_text(draft.images.get(index).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        urls.push(url);
    }
    Ok(urls)
}

/// 削除の確認
pub fn confirm_delete(title: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(format!("「{}」を削除しますか？", title))
        .default(false)
        .interact()?;
    Ok(confirmed)
}
