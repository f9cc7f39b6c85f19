//! # mailrelay インフラ層
//!
//! SMTP サーバーとの通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! ドメイン層で定義された [`EmailMessage`](mailrelay_domain::mail::EmailMessage) を
//! 実際に送信する手段を提供する。送信方法は [`mail::MailSender`] trait の背後に隠し、
//! アプリケーション層は起動時に選ばれた実装を受け取るだけにする。
//!
//! ## 依存関係
//!
//! ```text
//! mailrelay (app) → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`mail`] - メール送信 trait と SMTP / Noop / 未設定の各実装
//! - `mock` - テスト用の記録付き送信実装（`test-utils` feature 有効時のみ）

pub mod mail;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use mail::{
    MailSender,
    NoopMailSender,
    SmtpMailSender,
    SmtpSecurity,
    SmtpSettings,
    UnconfiguredMailSender,
};
