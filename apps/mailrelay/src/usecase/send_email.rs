//! # メール送信ユースケース
//!
//! 検証 → メッセージ組み立て → BCC 付与 → 送信 を 1 リクエストにつき 1 回行う。
//! リトライや重複排除はしない。

use std::sync::Arc;

use mailrelay_domain::mail::EmailMessage;
use mailrelay_infra::MailSender;

use crate::error::RelayError;

/// 送信リクエストの入力
///
/// ハンドラで受け取った値をそのまま渡す。欠落の判定はドメイン層で行う。
#[derive(Debug, Clone, Default)]
pub struct SendEmailInput {
    pub recipient: Option<String>,
    pub subject:   Option<String>,
    pub html:      Option<String>,
}

/// メール送信ユースケースの実装
pub struct SendEmailUseCaseImpl {
    sender:      Arc<dyn MailSender>,
    bcc_address: Option<String>,
}

impl SendEmailUseCaseImpl {
    /// 新しいユースケースを作成する
    ///
    /// `bcc_address` が `Some` の場合、全メッセージにその宛先を BCC で付ける。
    pub fn new(sender: Arc<dyn MailSender>, bcc_address: Option<String>) -> Self {
        Self {
            sender,
            bcc_address,
        }
    }

    pub(crate) async fn execute(&self, input: SendEmailInput) -> Result<(), RelayError> {
        let mut email = EmailMessage::compose(input.recipient, input.subject, input.html)?;

        if let Some(bcc) = &self.bcc_address {
            email = email.with_bcc(bcc.as_str());
        }

        self.sender.send_email(&email).await?;

        tracing::info!(to = %email.to, subject = %email.subject, "メール送信完了");
        Ok(())
    }
}
