//! 商品カタログ管理コンソール（端末版）

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod prompt;
pub mod render;
pub mod session_file;
pub mod terminal;
