//! 商品一覧ストア
//!
//! サーバーから取得した一覧を丸ごと保持する。差分更新は行わない。

use crate::types::Product;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductList {
    products: Vec<Product>,
}

impl ProductList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 一覧を丸ごと置き換える
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn clear(&mut self) {
        self.products.clear();
    }
}
