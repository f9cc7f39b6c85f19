//! # mailrelay エラー定義
//!
//! リレー固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー | ステータス |
//! |--------|-----------|
//! | [`RelayError::Validation`] | 400 |
//! | [`RelayError::Mail`] | 500 |
//! | [`RelayError::Unexpected`] | 500 |
//!
//! ボディは常に `{"error": "<メッセージ>"}` の形をとる。

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mailrelay_domain::{ValidationError, mail::MailError};
use mailrelay_shared::ErrorResponse;
use thiserror::Error;

/// リレーで発生するエラー
#[derive(Debug, Error)]
pub enum RelayError {
    /// リクエストの必須項目が欠けている
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// メッセージの組み立て・送信に失敗した
    #[error(transparent)]
    Mail(#[from] MailError),

    /// 上記以外の予期しないエラー（不正な JSON ボディなど）
    #[error("{0}")]
    Unexpected(String),
}

impl From<JsonRejection> for RelayError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Unexpected(rejection.body_text())
    }
}

impl RelayError {
    /// 対応する HTTP ステータスコード
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Validation(_) => StatusCode::BAD_REQUEST,
            RelayError::Mail(_) | RelayError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            RelayError::Validation(e) => {
                tracing::debug!("リクエスト検証エラー: {e}");
            }
            RelayError::Mail(e) => {
                tracing::error!(error.kind = "mail", "メール送信エラー: {e}");
            }
            RelayError::Unexpected(msg) => {
                tracing::error!(error.kind = "unexpected", "予期しないエラー: {msg}");
            }
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
