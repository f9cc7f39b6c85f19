//! # メール送信ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /send-email` - JSON で受け取った内容を 1 通のメールとして送信
//!
//! ## リクエストボディ
//!
//! ```json
//! { "recipient": "a@example.com", "subject": "Welcome", "html": "<p>Hi</p>" }
//! ```
//!
//! `subject` は省略可能。未知のフィールドは無視する。
//! JSON として解釈できないボディは検証エラーではなく 500 として扱う。
//!
//! 各フィールドは型を決めずに受け取る。宛先 → HTML 本文の存在確認を先に行い、
//! `null`・空文字・`false`・`0`・空配列・空オブジェクトは欠落とみなす。
//! 文字列でない値は存在確認を通過した後で 500 として扱う。

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use mailrelay_domain::ValidationError;
use mailrelay_shared::MessageResponse;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::RelayError,
    usecase::{SendEmailInput, SendEmailUseCase},
};

/// 送信成功時のメッセージ
pub const SENT_MESSAGE: &str = "Email sent successfully";

/// メール送信ハンドラの共有状態
pub struct SendEmailState {
    pub usecase: Arc<dyn SendEmailUseCase>,
}

/// メール送信リクエスト
///
/// 省略されたフィールドは `None` になる。
#[derive(Debug, Deserialize)]
pub struct SendEmailRequest {
    pub recipient: Option<Value>,
    pub subject:   Option<Value>,
    pub html:      Option<Value>,
}

impl SendEmailRequest {
    /// 存在確認と型確認を行い、ユースケースの入力に変換する
    pub fn into_input(self) -> Result<SendEmailInput, RelayError> {
        let Some(recipient) = self.recipient.filter(is_present) else {
            return Err(ValidationError::MissingRecipient.into());
        };
        let Some(html) = self.html.filter(is_present) else {
            return Err(ValidationError::MissingHtmlBody.into());
        };

        Ok(SendEmailInput {
            recipient: Some(expect_string("recipient", recipient)?),
            subject:   match self.subject {
                None | Some(Value::Null) => None,
                Some(subject) => Some(expect_string("subject", subject)?),
            },
            html:      Some(expect_string("html", html)?),
        })
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn expect_string(field: &str, value: Value) -> Result<String, RelayError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(RelayError::Unexpected(format!(
            "{field} must be a string, got {other}"
        ))),
    }
}

/// POST /send-email
///
/// ## レスポンス
///
/// - `200 OK`: `{"message": "Email sent successfully"}`
/// - `400 Bad Request`: 宛先または HTML 本文の欠落
/// - `500 Internal Server Error`: 送信失敗・不正なボディ
#[tracing::instrument(skip_all)]
pub async fn send_email(
    State(state): State<Arc<SendEmailState>>,
    payload: Result<Json<SendEmailRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, RelayError> {
    let Json(request) = payload?;

    state.usecase.send(request.into_input()?).await?;

    Ok(Json(MessageResponse::new(SENT_MESSAGE)))
}
