//! 設定不備時のメール送信実装
//!
//! SMTP 設定が揃っていない状態でもサーバーは起動させ、
//! 送信のたびに設定不備をエラーとして返す。

use async_trait::async_trait;
use mailrelay_domain::mail::{EmailMessage, MailError};

use super::MailSender;

/// 常に [`MailError::Misconfigured`] を返す送信実装
#[derive(Debug, Clone)]
pub struct UnconfiguredMailSender {
    reason: String,
}

impl UnconfiguredMailSender {
    /// 設定不備の理由を保持して作成する
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl MailSender for UnconfiguredMailSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), MailError> {
        tracing::warn!(to = %email.to, reason = %self.reason, "SMTP 未設定のため送信できません");
        Err(MailError::Misconfigured(self.reason.clone()))
    }
}
