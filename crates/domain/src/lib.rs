//! # mailrelay ドメイン層
//!
//! HTTP リクエストから組み立てる送信メールと、その検証ルールを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! mailrelay (app) → infra → domain
//! ```
//!
//! ドメイン層は SMTP や HTTP の詳細に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - 入力検証エラーの定義
//! - [`mail`] - 送信メールと送信エラー
//!
//! ## 使用例
//!
//! ```rust
//! use mailrelay_domain::{ValidationError, mail::EmailMessage};
//!
//! let result = EmailMessage::compose(None, None, Some("<p>hi</p>".to_string()));
//! assert!(matches!(result, Err(ValidationError::MissingRecipient)));
//! ```

pub mod error;
pub mod mail;

pub use error::ValidationError;
