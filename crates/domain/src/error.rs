//! # 入力検証エラー定義
//!
//! 送信リクエストの必須項目が欠けている場合のエラーを表現する。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | メッセージ |
//! |-----------|----------------|-----------|
//! | `MissingRecipient` | 400 Bad Request | `recipient is required` |
//! | `MissingHtmlBody` | 400 Bad Request | `html email body is required` |
//!
//! メッセージはクライアントとの契約の一部なので、文言を変更してはならない。

use thiserror::Error;

/// 入力検証エラー
///
/// 呼び出し元がリクエストを修正すれば回復できるエラー。
/// API 層で 400 Bad Request に変換する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 宛先が未指定または空文字
    #[error("recipient is required")]
    MissingRecipient,

    /// HTML 本文が未指定または空文字
    #[error("html email body is required")]
    MissingHtmlBody,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_displayがクライアント向けの文言を返す() {
        assert_eq!(
            ValidationError::MissingRecipient.to_string(),
            "recipient is required"
        );
        assert_eq!(
            ValidationError::MissingHtmlBody.to_string(),
            "html email body is required"
        );
    }
}
