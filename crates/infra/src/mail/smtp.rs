//! SMTP メール送信実装
//!
//! lettre の `AsyncSmtpTransport` を使用してメールを送信する。
//! トランスポートは起動時に一度だけ構築し、全リクエストで共有する。

use std::fmt;

use async_trait::async_trait;
use lettre::{
    Address,
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Mailbox, Message, MultiPart, SinglePart, header::ContentType},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
};
use mailrelay_domain::mail::{EmailMessage, MailError};

use super::MailSender;

/// SMTP 接続の暗号化方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpSecurity {
    /// 平文接続後に STARTTLS で昇格する（submission ポート向け）
    StartTls,
    /// 接続直後から TLS で包む（いわゆる SSL）
    Wrapper,
    /// 暗号化しない
    Plain,
}

impl SmtpSecurity {
    /// TLS / SSL フラグから暗号化方式を決定する
    ///
    /// 両方が有効な場合は SSL を優先する。
    pub fn from_flags(use_tls: bool, use_ssl: bool) -> Self {
        match (use_tls, use_ssl) {
            (_, true) => Self::Wrapper,
            (true, false) => Self::StartTls,
            (false, false) => Self::Plain,
        }
    }
}

/// SMTP 送信に必要な接続設定
///
/// アプリケーション層の設定から検証済みの値だけを詰めて渡す。
#[derive(Clone)]
pub struct SmtpSettings {
    /// SMTP サーバーのホスト名
    pub host:           String,
    /// SMTP サーバーのポート番号
    pub port:           u16,
    /// 認証ユーザー名
    pub username:       String,
    /// 認証パスワード
    pub password:       String,
    /// 送信元の表示名
    pub sender_name:    Option<String>,
    /// 送信元メールアドレス
    pub sender_address: String,
    /// 暗号化方式
    pub security:       SmtpSecurity,
}

impl fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"********")
            .field("sender_name", &self.sender_name)
            .field("sender_address", &self.sender_address)
            .field("security", &self.security)
            .finish()
    }
}

/// SMTP メール送信
///
/// `lettre::AsyncSmtpTransport<Tokio1Executor>` をラップする。
pub struct SmtpMailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from:      Mailbox,
}

impl SmtpMailSender {
    /// 接続設定からトランスポートを構築する
    ///
    /// この時点では SMTP サーバーに接続しない。接続・認証の失敗は送信時に
    /// [`MailError::SendFailed`] として返る。
    pub fn new(settings: &SmtpSettings) -> Result<Self, MailError> {
        let from = Mailbox::new(
            settings.sender_name.clone(),
            parse_address(&settings.sender_address)?,
        );

        let tls = match settings.security {
            SmtpSecurity::StartTls => Tls::Required(tls_parameters(&settings.host)?),
            SmtpSecurity::Wrapper => Tls::Wrapper(tls_parameters(&settings.host)?),
            SmtpSecurity::Plain => Tls::None,
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
            .port(settings.port)
            .tls(tls)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();

        Ok(Self { transport, from })
    }

    /// ドメインのメッセージを lettre のメッセージに変換する
    fn build_message(&self, email: &EmailMessage) -> Result<Message, MailError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(parse_mailbox(&email.to)?)
            .subject(email.subject.as_str());

        // 解釈できない BCC は省き、宛先への送信は続ける
        for bcc in &email.bcc {
            match parse_mailbox(bcc) {
                Ok(mailbox) => builder = builder.bcc(mailbox),
                Err(e) => {
                    tracing::warn!(bcc = %bcc, error = %e, "BCC アドレスを解釈できないため省略");
                }
            }
        }

        builder
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html_body.clone()),
                    ),
            )
            .map_err(|e| MailError::BuildFailed(e.to_string()))
    }
}

#[async_trait]
impl MailSender for SmtpMailSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), MailError> {
        let message = self.build_message(email)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| MailError::SendFailed(e.to_string()))?;

        tracing::debug!(
            to = %email.to,
            bcc = email.bcc.len(),
            code = %response.code(),
            "SMTP 送信完了"
        );

        Ok(())
    }
}

fn tls_parameters(host: &str) -> Result<TlsParameters, MailError> {
    TlsParameters::new(host.to_string())
        .map_err(|e| MailError::Misconfigured(format!("TLS parameters for {host:?}: {e}")))
}

fn parse_address(value: &str) -> Result<Address, MailError> {
    value.parse().map_err(|e: lettre::address::AddressError| MailError::InvalidAddress {
        address: value.to_string(),
        reason:  e.to_string(),
    })
}

fn parse_mailbox(value: &str) -> Result<Mailbox, MailError> {
    value.parse().map_err(|e: lettre::address::AddressError| MailError::InvalidAddress {
        address: value.to_string(),
        reason:  e.to_string(),
    })
}
