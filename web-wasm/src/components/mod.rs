pub mod alert_modal;
pub mod detail_modal;
pub mod header;
pub mod loading_spinner;
pub mod login_form;
pub mod product_form_modal;
pub mod product_table;
