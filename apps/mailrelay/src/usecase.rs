//! # ユースケース層
//!
//! リレーのビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: ハンドラはトレイト経由でユースケースを呼ぶ
//! - **依存性注入**: メール送信実装は `Arc<dyn MailSender>` として外部から注入

pub mod send_email;

use async_trait::async_trait;
pub use send_email::{SendEmailInput, SendEmailUseCaseImpl};

use crate::error::RelayError;

/// メール送信ユースケーストレイト
#[async_trait]
pub trait SendEmailUseCase: Send + Sync {
    /// 入力からメッセージを組み立てて 1 通送信する
    ///
    /// ## 戻り値
    ///
    /// - `Ok(())`: 送信完了
    /// - `Err(RelayError::Validation)`: 宛先または HTML 本文が欠けている（送信しない）
    /// - `Err(RelayError::Mail)`: 組み立て・送信の失敗
    async fn send(&self, input: SendEmailInput) -> Result<(), RelayError>;
}

#[async_trait]
impl SendEmailUseCase for SendEmailUseCaseImpl {
    async fn send(&self, input: SendEmailInput) -> Result<(), RelayError> {
        self.execute(input).await
    }
}
