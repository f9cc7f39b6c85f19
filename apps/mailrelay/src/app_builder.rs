//! # mailrelay アプリケーション構築
//!
//! 送信実装・State の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use mailrelay_infra::{MailSender, NoopMailSender, SmtpMailSender, UnconfiguredMailSender};
use mailrelay_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    config::{MailBackend, MailConfig},
    handler::{SendEmailState, health_check, send_email},
    usecase::SendEmailUseCaseImpl,
};

/// 設定から送信実装を選ぶ
///
/// SMTP 設定が揃っていない場合でも起動は止めない。
/// 代わりに [`UnconfiguredMailSender`] を返し、送信ごとに 500 を返す。
pub fn build_mail_sender(config: &MailConfig) -> Arc<dyn MailSender> {
    match config.backend {
        MailBackend::Noop => {
            tracing::info!("MAIL_BACKEND=noop: メールは送信されません");
            Arc::new(NoopMailSender)
        }
        MailBackend::Smtp => match smtp_sender(config) {
            Ok(sender) => Arc::new(sender),
            Err(reason) => {
                tracing::warn!(%reason, "SMTP 設定が不完全です。送信リクエストは失敗します");
                Arc::new(UnconfiguredMailSender::new(reason))
            }
        },
    }
}

fn smtp_sender(config: &MailConfig) -> Result<SmtpMailSender, String> {
    let settings = config.smtp_settings().map_err(|e| e.to_string())?;
    tracing::debug!(?settings, "SMTP トランスポートを構築");
    SmtpMailSender::new(&settings).map_err(|e| e.to_string())
}

/// 送信実装から State を組み立てる
pub fn build_state(sender: Arc<dyn MailSender>, config: &MailConfig) -> Arc<SendEmailState> {
    Arc::new(SendEmailState {
        usecase: Arc::new(SendEmailUseCaseImpl::new(sender, config.bcc_address())),
    })
}

/// ルーターを構築する
///
/// 全オリジンからのクロスオリジン呼び出しを許可する。
pub fn build_app(state: Arc<SendEmailState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/send-email", post(send_email))
        .with_state(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(CorsLayer::permissive())
}
