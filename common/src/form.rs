//! 商品フォーム（新規作成・編集の下書き）
//!
//! - ImageSlots: 副画像URLの固定長スロット（容量5）
//! - ProductField / FieldInput: フィールド名と入力値
//! - ProductDraft: 送信前の下書き。送信時に価格を数値へ変換する

use crate::error::{Error, Result};
use crate::types::{format_price, Product};

/// 副画像スロット数
pub const IMAGE_SLOT_CAPACITY: usize = 5;

/// 副画像URLのスロット
///
/// 常に `IMAGE_SLOT_CAPACITY` 個のスロットを持ち、未入力は空文字列。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlots {
    slots: Vec<String>,
}

impl Default for ImageSlots {
    fn default() -> Self {
        Self {
            slots: vec![String::new(); IMAGE_SLOT_CAPACITY],
        }
    }
}

impl ImageSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// URL列から作成（容量を超える場合はエラー）
    pub fn from_urls(urls: &[String]) -> Result<Self> {
        if urls.len() > IMAGE_SLOT_CAPACITY {
            return Err(Error::Validation(format!(
                "副画像は最大{}枚です（{}枚登録されています）",
                IMAGE_SLOT_CAPACITY,
                urls.len()
            )));
        }
        let mut slots = Self::new();
        for (slot, url) in slots.slots.iter_mut().zip(urls) {
            slot.clone_from(url);
        }
        Ok(slots)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    /// 1スロットだけを書き換える
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(Error::ImageSlotOutOfRange { index, capacity })?;
        *slot = value.into();
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(String::as_str)
    }

    /// 送信用: 入力済みのスロットのみ（順序は保持）
    pub fn to_urls(&self) -> Vec<String> {
        self.slots
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// フォームのモード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Add,
    Edit,
}

impl FormMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMode::Add => "add",
            FormMode::Edit => "edit",
        }
    }

    /// モーダルのタイトル
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Add => "商品を追加",
            FormMode::Edit => "商品を編集",
        }
    }

    /// 送信ボタンのラベル
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Add => "追加",
            FormMode::Edit => "保存",
        }
    }

    /// 成功時のメッセージ
    pub fn success_message(&self) -> &'static str {
        match self {
            FormMode::Add => "追加しました！",
            FormMode::Edit => "更新しました！",
        }
    }
}

/// 編集可能なフィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Title,
    Category,
    OriginPrice,
    Price,
    Unit,
    Content,
    Description,
    IsEnabled,
    ImageUrl,
}

impl ProductField {
    pub const ALL: [ProductField; 9] = [
        ProductField::Title,
        ProductField::Category,
        ProductField::OriginPrice,
        ProductField::Price,
        ProductField::Unit,
        ProductField::Content,
        ProductField::Description,
        ProductField::IsEnabled,
        ProductField::ImageUrl,
    ];

    /// JSON上のフィールド名
    pub fn name(&self) -> &'static str {
        match self {
            ProductField::Title => "title",
            ProductField::Category => "category",
            ProductField::OriginPrice => "origin_price",
            ProductField::Price => "price",
            ProductField::Unit => "unit",
            ProductField::Content => "content",
            ProductField::Description => "description",
            ProductField::IsEnabled => "is_enabled",
            ProductField::ImageUrl => "imageUrl",
        }
    }

    /// 画面表示用のラベル
    pub fn label(&self) -> &'static str {
        match self {
            ProductField::Title => "品名",
            ProductField::Category => "カテゴリ",
            ProductField::OriginPrice => "定価",
            ProductField::Price => "販売価格",
            ProductField::Unit => "単位",
            ProductField::Content => "サイズ",
            ProductField::Description => "商品説明",
            ProductField::IsEnabled => "有効",
            ProductField::ImageUrl => "メイン画像URL",
        }
    }

    /// チェックボックス入力か
    pub fn is_checkbox(&self) -> bool {
        matches!(self, ProductField::IsEnabled)
    }

    /// 数値入力か
    pub fn is_numeric(&self) -> bool {
        matches!(self, ProductField::OriginPrice | ProductField::Price)
    }
}

impl std::str::FromStr for ProductField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ProductField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| Error::Validation(format!("不明なフィールド: {}", s)))
    }
}

/// フォームの入力値
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    Checked(bool),
}

impl FieldInput {
    pub fn text(value: impl Into<String>) -> Self {
        FieldInput::Text(value.into())
    }

    fn into_bool(self) -> bool {
        match self {
            FieldInput::Checked(b) => b,
            FieldInput::Text(s) => matches!(s.trim(), "true" | "1" | "on"),
        }
    }

    fn into_text(self) -> String {
        match self {
            FieldInput::Text(s) => s,
            FieldInput::Checked(b) => b.to_string(),
        }
    }
}

/// 商品の下書き
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    mode: FormMode,
    /// 編集元（id と画面で扱わないフィールドを保持）
    base: Product,
    pub title: String,
    pub category: String,
    /// 入力中の文字列。送信時に数値へ変換
    pub origin_price: String,
    pub price: String,
    pub unit: String,
    pub content: String,
    pub description: String,
    pub is_enabled: bool,
    pub image_url: String,
    pub images: ImageSlots,
}

impl ProductDraft {
    /// 新規作成用の空の下書き
    pub fn create() -> Self {
        Self::default()
    }

    /// 既存商品の編集用下書き
    pub fn edit(product: &Product) -> Result<Self> {
        Ok(Self {
            mode: FormMode::Edit,
            images: ImageSlots::from_urls(&product.images_url)?,
            title: product.title.clone(),
            category: product.category.clone(),
            origin_price: format_price(product.origin_price),
            price: format_price(product.price),
            unit: product.unit.clone(),
            content: product.content.clone(),
            description: product.description.clone(),
            is_enabled: product.is_enabled,
            image_url: product.image_url.clone(),
            base: product.clone(),
        })
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// 編集対象のID（新規作成時はNone）
    pub fn id(&self) -> Option<&str> {
        match self.mode {
            FormMode::Edit if !self.base.id.is_empty() => Some(self.base.id.as_str()),
            _ => None,
        }
    }

    /// 1フィールドを更新する（チェックボックスはboolに変換）
    pub fn set_field(&mut self, field: ProductField, input: FieldInput) {
        if field.is_checkbox() {
            self.is_enabled = input.into_bool();
            return;
        }
        let value = input.into_text();
        match field {
            ProductField::Title => self.title = value,
            ProductField::Category => self.category = value,
            ProductField::OriginPrice => self.origin_price = value,
            ProductField::Price => self.price = value,
            ProductField::Unit => self.unit = value,
            ProductField::Content => self.content = value,
            ProductField::Description => self.description = value,
            ProductField::ImageUrl => self.image_url = value,
            ProductField::IsEnabled => {}
        }
    }

    /// フィールド名で更新する
    pub fn set_field_by_name(&mut self, name: &str, input: FieldInput) -> Result<()> {
        let field: ProductField = name.parse()?;
        self.set_field(field, input);
        Ok(())
    }

    pub fn set_image_slot(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.images.set(index, value)
    }

    /// 入力欄に表示する値
    pub fn field_text(&self, field: ProductField) -> String {
        match field {
            ProductField::Title => self.title.clone(),
            ProductField::Category => self.category.clone(),
            ProductField::OriginPrice => self.origin_price.clone(),
            ProductField::Price => self.price.clone(),
            ProductField::Unit => self.unit.clone(),
            ProductField::Content => self.content.clone(),
            ProductField::Description => self.description.clone(),
            ProductField::IsEnabled => self.is_enabled.to_string(),
            ProductField::ImageUrl => self.image_url.clone(),
        }
    }

    /// 送信用の商品レコードを作る（価格は数値に変換）
    pub fn to_product(&self) -> Result<Product> {
        Ok(Product {
            title: self.title.clone(),
            category: self.category.clone(),
            origin_price: parse_price(ProductField::OriginPrice, &self.origin_price)?,
            price: parse_price(ProductField::Price, &self.price)?,
            unit: self.unit.clone(),
            content: self.content.clone(),
            description: self.description.clone(),
            is_enabled: self.is_enabled,
            image_url: self.image_url.clone(),
            images_url: self.images.to_urls(),
            ..self.base.clone()
        })
    }
}

/// 価格の文字列を数値に変換（空は0）
pub fn parse_price(field: ProductField, text: &str) -> Result<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0.0);
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(Error::Validation(format!(
            "{}は0以上の数値で入力してください: {}",
            field.label(),
            text
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_image_slots_default_are_empty() {
        let slots = ImageSlots::new();
        assert_eq!(slots.capacity(), IMAGE_SLOT_CAPACITY);
        assert!(slots.iter().all(str::is_empty));
        assert!(slots.to_urls().is_empty());
    }

    #[test]
    fn test_image_slot_update_is_local() {
        let mut slots = ImageSlots::from_urls(&urls(&["a", "b", "c", "d", "e"])).unwrap();
        slots.set(2, "changed").unwrap();

        let all: Vec<&str> = slots.iter().collect();
        assert_eq!(all, vec!["a", "b", "changed", "d", "e"]);
    }

    #[test]
    fn test_image_slot_out_of_range() {
        let mut slots = ImageSlots::new();
        let err = slots.set(5, "x").unwrap_err();
        assert!(matches!(err, Error::ImageSlotOutOfRange { index: 5, capacity: 5 }));
        assert!(slots.iter().all(str::is_empty));
    }

    #[test]
    fn test_image_slots_pad_short_list() {
        let slots = ImageSlots::from_urls(&urls(&["a"])).unwrap();
        assert_eq!(slots.get(0), Some("a"));
        assert_eq!(slots.get(4), Some(""));
        assert_eq!(slots.get(5), None);
    }

    #[test]
    fn test_image_slots_reject_overflow() {
        let result = ImageSlots::from_urls(&urls(&["1", "2", "3", "4", "5", "6"]));
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_image_slots_to_urls_skips_blank() {
        let mut slots = ImageSlots::new();
        slots.set(1, "b").unwrap();
        slots.set(3, "  ").unwrap();
        slots.set(4, "e").unwrap();
        assert_eq!(slots.to_urls(), urls(&["b", "e"]));
    }

    #[test]
    fn test_field_from_name() {
        assert_eq!("origin_price".parse::<ProductField>().unwrap(), ProductField::OriginPrice);
        assert_eq!("imageUrl".parse::<ProductField>().unwrap(), ProductField::ImageUrl);
        assert!("imagesUrl".parse::<ProductField>().is_err());
    }

    #[test]
    fn test_create_draft_prices_are_numeric() {
        let mut draft = ProductDraft::create();
        draft.set_field(ProductField::Title, FieldInput::text("ケーキ"));
        draft.set_field(ProductField::OriginPrice, FieldInput::text("100"));
        draft.set_field(ProductField::Price, FieldInput::text("80"));

        let product = draft.to_product().unwrap();
        assert_eq!(product.origin_price, 100.0);
        assert_eq!(product.price, 80.0);
        assert!(product.id.is_empty());

        let json = serde_json::to_value(&product).unwrap();
        assert!(json["origin_price"].is_number());
        assert!(json["price"].is_number());
    }

    #[test]
    fn test_empty_price_is_zero() {
        let draft = ProductDraft::create();
        let product = draft.to_product().unwrap();
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn test_invalid_price_rejected() {
        let mut draft = ProductDraft::create();
        draft.set_field(ProductField::Price, FieldInput::text("abc"));
        assert!(matches!(draft.to_product(), Err(Error::Validation(_))));

        draft.set_field(ProductField::Price, FieldInput::text("-1"));
        assert!(matches!(draft.to_product(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_checkbox_coerced_to_bool() {
        let mut draft = ProductDraft::create();
        draft.set_field(ProductField::IsEnabled, FieldInput::Checked(true));
        assert!(draft.is_enabled);
        draft.set_field_by_name("is_enabled", FieldInput::text("false")).unwrap();
        assert!(!draft.is_enabled);
        draft.set_field_by_name("is_enabled", FieldInput::text("on")).unwrap();
        assert!(draft.is_enabled);
    }

    #[test]
    fn test_edit_draft_keeps_id_and_extra_fields() {
        let mut product = Product {
            id: "p1".to_string(),
            title: "元".to_string(),
            origin_price: 300.0,
            price: 250.0,
            images_url: urls(&["x.png"]),
            ..Default::default()
        };
        product.extra.insert("num".to_string(), serde_json::Value::from(2));

        let mut draft = ProductDraft::edit(&product).unwrap();
        assert_eq!(draft.mode(), FormMode::Edit);
        assert_eq!(draft.id(), Some("p1"));
        assert_eq!(draft.origin_price, "300");
        assert_eq!(draft.images.get(0), Some("x.png"));

        draft.set_field(ProductField::Title, FieldInput::text("新"));
        let updated = draft.to_product().unwrap();
        assert_eq!(updated.id, "p1");
        assert_eq!(updated.title, "新");
        assert_eq!(updated.extra.get("num"), Some(&serde_json::Value::from(2)));
    }

    #[test]
    fn test_edit_rejects_too_many_images() {
        let product = Product {
            id: "p1".to_string(),
            images_url: urls(&["1", "2", "3", "4", "5", "6"]),
            ..Default::default()
        };
        assert!(ProductDraft::edit(&product).is_err());
    }

    #[test]
    fn test_create_draft_has_no_id() {
        assert_eq!(ProductDraft::create().id(), None);
        assert_eq!(ProductDraft::create().mode(), FormMode::Add);
    }
}
