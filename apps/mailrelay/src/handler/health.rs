//! # ヘルスチェックハンドラ
//!
//! レスポンス型は [`mailrelay_shared::HealthResponse`] を参照。

use axum::Json;
use mailrelay_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// SMTP サーバーへの疎通は確認しない。
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
