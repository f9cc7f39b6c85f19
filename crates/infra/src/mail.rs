//! # メール送信
//!
//! リレーの送信経路を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `MailSender` trait でメール送信を抽象化
//! - **3 つの実装**: SMTP（本番）、Noop（送信抑止）、Unconfigured（設定不備）
//! - **環境変数切替**: `MAIL_BACKEND` でランタイム選択
//! - **起動時に一度だけ構築**: 送信実装はアプリケーション State に保持して使い回す

mod noop;
mod smtp;
mod unconfigured;

use async_trait::async_trait;
use mailrelay_domain::mail::{EmailMessage, MailError};
pub use noop::NoopMailSender;
pub use smtp::{SmtpMailSender, SmtpSecurity, SmtpSettings};
pub use unconfigured::UnconfiguredMailSender;

/// メール送信トレイト
///
/// 1 回の呼び出しで 1 通を送信し、送信完了または失敗まで待つ。
/// リトライは行わない。
#[async_trait]
pub trait MailSender: Send + Sync {
    /// メールを送信する
    async fn send_email(&self, email: &EmailMessage) -> Result<(), MailError>;
}
