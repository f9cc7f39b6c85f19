//! # 送信メール
//!
//! リレーが 1 リクエストにつき 1 通組み立てるメールメッセージを定義する。
//!
//! ## 設計方針
//!
//! - **検証は組み立て時に一度だけ**: [`EmailMessage::compose`] が必須項目を確認し、
//!   以降のレイヤーは検証済みの値だけを扱う
//! - **送信方法はインフラ層の責務**: ここでは送信エラーの種類のみ定義する
//! - **永続化しない**: メッセージはリクエストの処理中だけ存在する

use thiserror::Error;

use crate::ValidationError;

/// 件名が指定されなかったときの件名
pub const DEFAULT_SUBJECT: &str = "No Subject";

/// HTML を表示できないクライアント向けのプレーンテキスト本文
pub const PLAIN_TEXT_FALLBACK: &str = "This email requires an HTML-compatible email client.";

/// メール送信エラー
///
/// 宛先の解析から SMTP 送信までの失敗をまとめて表す。
/// API 層ではいずれも 500 Internal Server Error に変換され、
/// メッセージはそのままレスポンスの `error` に入る。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailError {
    /// メールアドレスとして解釈できない
    #[error("invalid address {address:?}: {reason}")]
    InvalidAddress {
        /// 解釈に失敗した入力値
        address: String,
        /// パーサーが返した理由
        reason:  String,
    },

    /// メッセージの組み立てに失敗
    #[error("failed to build message: {0}")]
    BuildFailed(String),

    /// SMTP サーバーとの通信・認証・送信に失敗
    #[error("{0}")]
    SendFailed(String),

    /// 送信に必要な設定が揃っていない
    #[error("mail transport is not configured: {0}")]
    Misconfigured(String),
}

/// メールメッセージ
///
/// インフラ層の `MailSender` に渡される送信単位。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// 送信先メールアドレス
    pub to:        String,
    /// BCC で送るメールアドレス
    pub bcc:       Vec<String>,
    /// 件名
    pub subject:   String,
    /// HTML 本文
    pub html_body: String,
    /// プレーンテキスト本文
    pub text_body: String,
}

impl EmailMessage {
    /// リクエストの値からメッセージを組み立てる
    ///
    /// 検証は宛先 → HTML 本文の順で行い、最初の失敗で打ち切る。
    /// 件名が `None` の場合は [`DEFAULT_SUBJECT`] を使う（空文字はそのまま）。
    pub fn compose(
        recipient: Option<String>,
        subject: Option<String>,
        html: Option<String>,
    ) -> Result<Self, ValidationError> {
        let Some(to) = recipient.filter(|r| !r.is_empty()) else {
            return Err(ValidationError::MissingRecipient);
        };
        let Some(html_body) = html.filter(|h| !h.is_empty()) else {
            return Err(ValidationError::MissingHtmlBody);
        };

        Ok(Self {
            to,
            bcc: Vec::new(),
            subject: subject.unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            html_body,
            text_body: PLAIN_TEXT_FALLBACK.to_string(),
        })
    }

    /// BCC に宛先を追加する
    pub fn with_bcc(mut self, address: impl Into<String>) -> Self {
        self.bcc.push(address.into());
        self
    }
}
