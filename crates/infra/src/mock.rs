//! # テスト用モック
//!
//! ハンドラやユースケースのテストで SMTP の代わりに注入する送信実装。
//! 送信されたメッセージを記録し、任意のエラーを返すよう設定できる。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mailrelay_domain::mail::{EmailMessage, MailError};

use crate::mail::MailSender;

/// 送信内容を記録するモック
///
/// `Clone` しても記録先は共有されるため、State に渡した後も
/// テスト側のハンドルから送信履歴を確認できる。
#[derive(Debug, Clone, Default)]
pub struct MockMailSender {
    sent:    Arc<Mutex<Vec<EmailMessage>>>,
    failure: Option<MailError>,
}

impl MockMailSender {
    /// 常に成功するモックを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に指定したエラーを返すモックを作成する
    ///
    /// 失敗した送信も試行として記録される。
    pub fn failing(error: MailError) -> Self {
        Self {
            sent:    Arc::default(),
            failure: Some(error),
        }
    }

    /// これまでに送信を試みたメッセージ
    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailSender for MockMailSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email.clone());
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
