//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `send_email`: メール送信

pub mod health;
pub mod send_email;

pub use health::health_check;
pub use send_email::{SendEmailRequest, SendEmailState, send_email};
