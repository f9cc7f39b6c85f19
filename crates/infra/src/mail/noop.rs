//! Noop メール送信実装
//!
//! メールを実際に送信せず、ログ出力のみ行う。
//! `MAIL_BACKEND=noop` で送信を抑止したいときに使用する。

use async_trait::async_trait;
use mailrelay_domain::mail::{EmailMessage, MailError};

use super::MailSender;

/// Noop メール送信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopMailSender;

#[async_trait]
impl MailSender for NoopMailSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), MailError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            bcc = ?email.bcc,
            "Noop: メール送信をスキップ"
        );
        Ok(())
    }
}
