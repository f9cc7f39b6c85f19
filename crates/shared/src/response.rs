//! # レスポンスボディ
//!
//! `/send-email` が返す JSON ボディを定義する。
//!
//! 呼び出し元は常に `message` か `error` のどちらか一方を持つ JSON を受け取る。
//! 空ボディや生のスタックトレースを返すことはない。
//!
//! ```text
//! 成功: { "message": "Email sent successfully" }
//! 失敗: { "error": "recipient is required" }
//! ```

use serde::{Deserialize, Serialize};

/// 成功レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// 新しい `MessageResponse` を作成する
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// エラーレスポンス
///
/// ステータスコードはレスポンスヘッダーで表し、ボディにはメッセージのみを載せる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// 新しい `ErrorResponse` を作成する
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_message_responseのjson形状() {
        let json = serde_json::to_value(MessageResponse::new("Email sent successfully")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "message": "Email sent successfully" })
        );
    }

    #[test]
    fn test_error_responseのjson形状() {
        let json = serde_json::to_value(ErrorResponse::new("recipient is required")).unwrap();

        assert_eq!(json, serde_json::json!({ "error": "recipient is required" }));
    }

    #[test]
    fn test_error_responseをjsonから復元できる() {
        let response: ErrorResponse =
            serde_json::from_str(r#"{"error": "html email body is required"}"#).unwrap();

        assert_eq!(response.error, "html email body is required");
    }
}
