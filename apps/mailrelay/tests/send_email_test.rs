//! # POST /send-email の結合テスト
//!
//! 実際のルーター（レイヤー込み）に対してリクエストを送り、
//! ステータス・ボディ・送信内容を検証する。SMTP の代わりに
//! [`MockMailSender`] を注入する。

use std::sync::Arc;

use axum::{Router, body::Body, response::Response};
use http::{Request, StatusCode, header};
use mailrelay::{
    app_builder::{build_app, build_mail_sender, build_state},
    config::AppConfig,
};
use mailrelay_domain::mail::{MailError, PLAIN_TEXT_FALLBACK};
use mailrelay_infra::mock::MockMailSender;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

const BCC_ADDRESS: &str = "relay@example.com";

fn config() -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "MAIL_SERVER" => Some("smtp.example.com".to_string()),
        "MAIL_PORT" => Some("587".to_string()),
        "MAIL_USERNAME" => Some(BCC_ADDRESS.to_string()),
        "MAIL_PASSWORD" => Some("secret".to_string()),
        _ => None,
    })
    .unwrap()
}

fn test_app(mock: &MockMailSender) -> Router {
    let state = build_state(Arc::new(mock.clone()), &config().mail);
    build_app(state)
}

fn json_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/send-email")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn response_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_宛先とhtmlがあれば送信して200を返す() {
    let mock = MockMailSender::new();
    let sut = test_app(&mock);

    let response = sut
        .oneshot(json_request(
            json!({"recipient": "a@example.com", "html": "<p>hi</p>"}).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_json(response).await,
        json!({"message": "Email sent successfully"})
    );

    let sent = mock.sent_emails();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "a@example.com");
    assert_eq!(sent[0].subject, "No Subject");
    assert_eq!(sent[0].bcc, vec![BCC_ADDRESS.to_string()]);
    assert_eq!(sent[0].html_body, "<p>hi</p>");
    assert_eq!(sent[0].text_body, PLAIN_TEXT_FALLBACK);
}

#[rstest]
#[case::missing_recipient(json!({"subject": "Welcome", "html": "<p>hi</p>"}), "recipient is required")]
#[case::empty_recipient(json!({"recipient": "", "html": "<p>hi</p>"}), "recipient is required")]
#[case::missing_html(json!({"recipient": "a@example.com"}), "html email body is required")]
#[case::null_html(json!({"recipient": "a@example.com", "html": null}), "html email body is required")]
#[case::empty_body(json!({}), "recipient is required")]
#[case::wrongly_typed_subject(json!({"subject": 5, "html": "<p>hi</p>"}), "recipient is required")]
#[case::empty_recipient_numeric_html(json!({"recipient": "", "html": 123}), "recipient is required")]
#[case::false_html(json!({"recipient": "a@example.com", "html": false}), "html email body is required")]
#[tokio::test]
async fn test_必須項目が欠けると400を返し送信しない(
    #[case] body: Value,
    #[case] expected: &str,
) {
    let mock = MockMailSender::new();
    let sut = test_app(&mock);

    let response = sut.oneshot(json_request(body.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response_json(response).await, json!({"error": expected}));
    assert!(mock.sent_emails().is_empty());
}

#[tokio::test]
async fn test_smtp認証エラーは500でエラー文字列を返す() {
    let mock = MockMailSender::failing(MailError::SendFailed(
        "permanent error (535): 5.7.8 authentication failed".to_string(),
    ));
    let sut = test_app(&mock);

    let response = sut
        .oneshot(json_request(
            json!({"recipient": "a@example.com", "html": "<p>hi</p>"}).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response_json(response).await,
        json!({"error": "permanent error (535): 5.7.8 authentication failed"})
    );
}

#[tokio::test]
async fn test_存在確認を通過した後の型の誤りは500を返す() {
    let mock = MockMailSender::new();
    let sut = test_app(&mock);

    let response = sut
        .oneshot(json_request(
            json!({"recipient": "a@example.com", "subject": 5, "html": "<p>hi</p>"}).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response_json(response).await,
        json!({"error": "subject must be a string, got 5"})
    );
    assert!(mock.sent_emails().is_empty());
}

#[tokio::test]
async fn test_不正なjsonは500を返す() {
    let mock = MockMailSender::new();
    let sut = test_app(&mock);

    let response = sut.oneshot(json_request("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert!(body["error"].is_string(), "error フィールドを持つこと: {body}");
    assert!(mock.sent_emails().is_empty());
}

#[tokio::test]
async fn test_content_typeがないと500を返す() {
    let mock = MockMailSender::new();
    let sut = test_app(&mock);

    let response = sut
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/send-email")
                .body(Body::from(
                    json!({"recipient": "a@example.com", "html": "<p>hi</p>"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert!(body["error"].is_string(), "error フィールドを持つこと: {body}");
    assert!(mock.sent_emails().is_empty());
}

#[tokio::test]
async fn test_未知のフィールドは無視して送信する() {
    let mock = MockMailSender::new();
    let sut = test_app(&mock);

    let response = sut
        .oneshot(json_request(
            json!({
                "recipient": "a@example.com",
                "subject": "Hi",
                "html": "<p>x</p>",
                "attachments": ["a.pdf"]
            })
            .to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(mock.sent_emails()[0].subject, "Hi");
}

#[tokio::test]
async fn test_同じリクエストを2回送ると2通送信される() {
    let mock = MockMailSender::new();
    let sut = test_app(&mock);
    let body = json!({"recipient": "a@example.com", "html": "<p>x</p>"}).to_string();

    for _ in 0..2 {
        let response = sut.clone().oneshot(json_request(body.clone())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(mock.sent_emails().len(), 2);
}

#[tokio::test]
async fn test_smtp未設定でも起動し送信時に500を返す() {
    let config = AppConfig::from_lookup(|_| None).unwrap();
    let sender = build_mail_sender(&config.mail);
    let sut = build_app(build_state(sender, &config.mail));

    let response = sut
        .oneshot(json_request(
            json!({"recipient": "a@example.com", "html": "<p>hi</p>"}).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response_json(response).await,
        json!({"error": "mail transport is not configured: MAIL_SERVER is not set"})
    );
}

#[tokio::test]
async fn test_healthは稼働状態を返す() {
    let sut = test_app(&MockMailSender::new());

    let response = sut
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_クロスオリジンのプリフライトを許可する() {
    let sut = test_app(&MockMailSender::new());

    let response = sut
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/send-email")
                .header(header::ORIGIN, "https://frontend.example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        "Access-Control-Allow-Origin が返ること"
    );
}

#[tokio::test]
async fn test_レスポンスにx_request_idヘッダーが含まれる() {
    let mock = MockMailSender::new();
    let sut = test_app(&mock);

    let response = sut
        .oneshot(json_request(
            json!({"recipient": "a@example.com", "html": "<p>hi</p>"}).to_string(),
        ))
        .await
        .unwrap();

    assert!(
        response.headers().contains_key("x-request-id"),
        "レスポンスに x-request-id ヘッダーが含まれること"
    );
}
