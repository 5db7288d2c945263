//! 商品詳細ビューア（ライトボックス）の状態

use crate::types::Product;

/// 選択中の商品と表示中の画像
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailViewer {
    product: Option<Product>,
    current_image: Option<String>,
}

impl DetailViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 商品を選択し、メイン画像を表示する
    pub fn select(&mut self, product: Product) {
        self.current_image = Some(product.image_url.clone());
        self.product = Some(product);
    }

    /// サムネイルをクリックして表示画像を切り替える（商品は変わらない）
    pub fn show_image(&mut self, url: impl Into<String>) {
        if self.product.is_some() {
            self.current_image = Some(url.into());
        }
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn current_image(&self) -> Option<&str> {
        self.current_image.as_deref()
    }

    /// メイン画像 → 副画像（空を除く）の順
    pub fn thumbnails(&self) -> Vec<&str> {
        let Some(product) = &self.product else {
            return Vec::new();
        };
        std::iter::once(product.image_url.as_str())
            .chain(product.images_url.iter().map(String::as_str))
            .filter(|url| !url.is_empty())
            .collect()
    }

    pub fn clear(&mut self) {
        self.product = None;
        self.current_image = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: "p1".to_string(),
            title: "タルト".to_string(),
            image_url: "main.jpg".to_string(),
            images_url: vec!["a.jpg".to_string(), String::new(), "c.jpg".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_select_shows_primary_image() {
        let mut viewer = DetailViewer::new();
        viewer.select(product());
        assert_eq!(viewer.current_image(), Some("main.jpg"));
        assert_eq!(viewer.product().map(|p| p.id.as_str()), Some("p1"));
    }

    #[test]
    fn test_show_image_keeps_product() {
        let mut viewer = DetailViewer::new();
        viewer.select(product());
        viewer.show_image("c.jpg");
        assert_eq!(viewer.current_image(), Some("c.jpg"));
        assert_eq!(viewer.product(), Some(&product()));

        viewer.show_image("main.jpg");
        assert_eq!(viewer.current_image(), Some("main.jpg"));
    }

    #[test]
    fn test_show_image_without_selection_is_ignored() {
        let mut viewer = DetailViewer::new();
        viewer.show_image("x.jpg");
        assert_eq!(viewer.current_image(), None);
    }

    #[test]
    fn test_thumbnails_skip_blank() {
        let mut viewer = DetailViewer::new();
        assert!(viewer.thumbnails().is_empty());
        viewer.select(product());
        assert_eq!(viewer.thumbnails(), vec!["main.jpg", "a.jpg", "c.jpg"]);
    }

    #[test]
    fn test_clear() {
        let mut viewer = DetailViewer::new();
        viewer.select(product());
        viewer.clear();
        assert!(viewer.product().is_none());
        assert!(viewer.current_image().is_none());
    }
}
