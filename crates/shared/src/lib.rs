//! # mailrelay 共有ユーティリティ
//!
//! レスポンス形式とログ基盤など、リレー本体から切り出した共通部品を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は持たない（`IntoResponse` 変換はアプリケーション側の責務）
//! - tracing 関連は `observability` feature で有効化する

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod health;
pub mod observability;
pub mod response;

pub use health::HealthResponse;
pub use response::{ErrorResponse, MessageResponse};
