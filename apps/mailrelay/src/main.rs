//! # mailrelay サーバー
//!
//! `POST /send-email` で受け取った宛先・件名・HTML 本文を、
//! 設定済みの SMTP サーバー経由で送信する。
//!
//! ```text
//! ┌──────────────┐  JSON   ┌──────────────┐  SMTP   ┌──────────────┐
//! │   Frontend   │────────▶│  mailrelay   │────────▶│ Mail Server  │
//! └──────────────┘         └──────────────┘         └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `MAIL_SERVER` | 送信時 | SMTP サーバーのホスト名 |
//! | `MAIL_PORT` | 送信時 | SMTP ポート（STARTTLS） |
//! | `MAIL_USERNAME` | 送信時 | 認証ユーザー名。BCC の宛先にもなる |
//! | `MAIL_PASSWORD` | 送信時 | 認証パスワード |
//! | `MAIL_NAME` | No | 送信元の表示名 |
//! | `MAIL_SENDER` | No | 送信元アドレス（デフォルト: `MAIL_USERNAME`） |
//! | `MAIL_BACKEND` | No | `smtp` / `noop`（デフォルト: `smtp`） |
//! | `RELAY_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `RELAY_PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! `MAIL_*` が欠けていても起動はする。送信リクエストが 500 で失敗する。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（実際には送信しない）
//! MAIL_BACKEND=noop cargo run -p mailrelay
//!
//! # 本番環境
//! MAIL_SERVER=smtp.example.com MAIL_PORT=587 MAIL_USERNAME=... MAIL_PASSWORD=... \
//!   cargo run -p mailrelay --release
//! ```

use mailrelay::{
    app_builder::{build_app, build_mail_sender, build_state},
    config::AppConfig,
};
use mailrelay_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// mailrelay サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    init_tracing(TracingConfig::from_env("mailrelay"));
    let _tracing_guard = tracing::info_span!("app", service = "mailrelay").entered();

    // 設定読み込み
    let config = AppConfig::from_env()?;
    tracing::info!(
        backend = %config.mail.backend,
        "mailrelay サーバーを起動します: {}:{}",
        config.server.host,
        config.server.port
    );

    let sender = build_mail_sender(&config.mail);
    let state = build_state(sender, &config.mail);
    let app = build_app(state);

    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    tracing::info!("mailrelay サーバーが起動しました: {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
