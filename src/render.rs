//! 一覧・詳細のテキスト表示

use catalog_admin_common::{format_price, DetailViewer, Product, ProductList};
use std::fmt::Write;

/// 商品一覧の表
pub fn product_table(products: &ProductList) -> String {
    if products.is_empty() {
        return "商品がありません".to_string();
    }

    let id_width = products
        .iter()
        .map(|p| p.id.chars().count())
        .max()
        .unwrap_or(0)
        .max(2);

    let mut out = String::new();
    let _ = writeln!(out, "{:<id_width$}  {:<4}  {:>8}  {:>8}  タイトル", "ID", "状態", "原価", "売価");
    for product in products.iter() {
        let _ = writeln!(
            out,
            "{:<id_width$}  {:<4}  {:>8}  {:>8}  {}",
            product.id,
            product.status_label(),
            format_price(product.origin_price),
            format_price(product.price),
            product.title
        );
    }
    let _ = write!(out, "全{}件", products.len());
    out
}

/// 商品詳細（詳細ビューアの選択状態を表示）
pub fn product_detail(viewer: &DetailViewer) -> Option<String> {
    let product = viewer.product()?;
    let mut out = String::new();

    let _ = writeln!(out, "{} [{}]", product.title, product.status_label());
    let _ = writeln!(out, "  ID: {}", product.id);
    if !product.category.is_empty() {
        let _ = writeln!(out, "  カテゴリ: {}", product.category);
    }
    let _ = writeln!(out, "  価格: {} → {}{}", format_price(product.origin_price), format_price(product.price), unit_suffix(product));
    if !product.description.is_empty() {
        let _ = writeln!(out, "  説明: {}", product.description);
    }
    if !product.content.is_empty() {
        let _ = writeln!(out, "  内容: {}", product.content);
    }

    let current = viewer.current_image().unwrap_or_default();
    let _ = writeln!(out, "  表示中の画像: {}", if current.is_empty() { "(なし)" } else { current });
    for (index, url) in viewer.thumbnails().into_iter().enumerate() {
        let marker = if url == current { "*" } else { " " };
        let _ = writeln!(out, "  {}[{}] {}", marker, index, url);
    }

    Some(out.trim_end().to_string())
}

fn unit_suffix(product: &Product) -> String {
    if product.unit.is_empty() {
        String::new()
    } else {
        format!(" / {}", product.unit)
    }
}
