//! 表示テスト
//!
//! 一覧表と詳細表示の内容を検証

use catalog_admin::render::{product_detail, product_table};
use catalog_admin_common::{DetailViewer, Product, ProductList};

fn product(id: &str, title: &str, enabled: bool) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        origin_price: 200.0,
        price: 150.5,
        is_enabled: enabled,
        image_url: format!("{}.jpg", id),
        ..Default::default()
    }
}

/// 空の一覧
#[test]
fn test_empty_table() {
    assert_eq!(product_table(&ProductList::new()), "商品がありません");
}

/// 一覧の各行
#[test]
fn test_table_rows() {
    let mut list = ProductList::new();
    list.replace(vec![product("1", "ショートケーキ", true), product("22", "タルト", false)]);

    let table = product_table(&list);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("ID"));
    assert!(lines[1].contains("ショートケーキ"));
    assert!(lines[1].contains("有効"));
    assert!(lines[1].contains("200"));
    assert!(lines[1].contains("150.5"));
    assert!(lines[2].starts_with("22"));
    assert!(lines[2].contains("無効"));
    assert_eq!(lines[3], "全2件");
}

/// 未選択の詳細
#[test]
fn test_detail_without_selection() {
    assert!(product_detail(&DetailViewer::new()).is_none());
}

/// 詳細は表示中の画像に印を付ける
#[test]
fn test_detail_marks_current_image() {
    let mut item = product("7", "タルト", true);
    item.unit = "個".to_string();
    item.images_url = vec!["side.jpg".to_string(), "top.jpg".to_string()];

    let mut viewer = DetailViewer::new();
    viewer.select(item);
    viewer.show_image("top.jpg");

    let text = product_detail(&viewer).unwrap();
    assert!(text.starts_with("タルト [有効]"));
    assert!(text.contains("価格: 200 → 150.5 / 個"));
    assert!(text.contains("表示中の画像: top.jpg"));
    assert!(text.contains("  [0] 7.jpg"));
    assert!(text.contains(" *[2] top.jpg"));
}
