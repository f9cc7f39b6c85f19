//! # mailrelay 設定
//!
//! 環境変数からサーバーとメール送信の設定を読み込む。
//!
//! メール関連の値は読み込み時に検証しない。値の欠落や不正は
//! [`MailConfig::smtp_settings`] で検出され、送信時のエラーとして表面化する。
//! TLS / SSL フラグは環境変数では切り替えられない固定値。

use std::{env, fmt, str::FromStr};

use mailrelay_infra::{SmtpSecurity, SmtpSettings};
use thiserror::Error;

/// バインドアドレスのデフォルト（全インターフェース）
const DEFAULT_HOST: &str = "0.0.0.0";

/// ポート番号のデフォルト
const DEFAULT_PORT: u16 = 5000;

/// 設定エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} is not set")]
    Missing(&'static str),

    /// ポート番号として解釈できない
    #[error("{name} must be a valid port number, got {value:?}")]
    InvalidPort {
        name:  &'static str,
        value: String,
    },

    /// 未知の送信バックエンド
    #[error("MAIL_BACKEND must be \"smtp\" or \"noop\", got {0:?}")]
    InvalidBackend(String),
}

/// メール送信バックエンド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MailBackend {
    /// SMTP サーバー経由で送信する
    #[default]
    Smtp,
    /// 送信しない（ログ出力のみ）
    Noop,
}

/// アプリケーション全体の設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub mail:   MailConfig,
}

/// HTTP サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

/// メール送信の設定
///
/// 環境変数の値をそのまま保持する。
#[derive(Clone)]
pub struct MailConfig {
    /// SMTP サーバー（`MAIL_SERVER`）
    pub server:         Option<String>,
    /// SMTP ポート（`MAIL_PORT`、未検証の文字列）
    pub port:           Option<String>,
    /// SMTP ユーザー名（`MAIL_USERNAME`）。BCC の宛先にもなる
    pub username:       Option<String>,
    /// SMTP パスワード（`MAIL_PASSWORD`）
    pub password:       Option<String>,
    /// 送信元の表示名（`MAIL_NAME`）
    pub sender_name:    Option<String>,
    /// 送信元アドレス（`MAIL_SENDER`）
    pub sender_address: Option<String>,
    /// STARTTLS を使う（固定: `true`）
    pub use_tls:        bool,
    /// SSL で接続する（固定: `false`）
    pub use_ssl:        bool,
    /// 送信バックエンド（`MAIL_BACKEND`）
    pub backend:        MailBackend,
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "********"))
            .field("sender_name", &self.sender_name)
            .field("sender_address", &self.sender_address)
            .field("use_tls", &self.use_tls)
            .field("use_ssl", &self.use_ssl)
            .field("backend", &self.backend)
            .finish()
    }
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の取得関数から設定を読み込む
    ///
    /// 空文字の値は未設定として扱う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let port = match get("RELAY_PORT") {
            Some(value) => parse_port("RELAY_PORT", &value)?,
            None => DEFAULT_PORT,
        };

        let backend = match get("MAIL_BACKEND") {
            Some(value) => {
                MailBackend::from_str(&value).map_err(|_| ConfigError::InvalidBackend(value))?
            }
            None => MailBackend::default(),
        };

        Ok(Self {
            server: ServerConfig {
                host: get("RELAY_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
            },
            mail:   MailConfig {
                server: get("MAIL_SERVER"),
                port: get("MAIL_PORT"),
                username: get("MAIL_USERNAME"),
                password: get("MAIL_PASSWORD"),
                sender_name: get("MAIL_NAME"),
                sender_address: get("MAIL_SENDER"),
                use_tls: true,
                use_ssl: false,
                backend,
            },
        })
    }
}

impl MailConfig {
    /// 送信時に BCC で控えを受け取るアドレス
    pub fn bcc_address(&self) -> Option<String> {
        self.username.clone()
    }

    /// SMTP 送信に必要な設定を検証して取り出す
    ///
    /// 送信元アドレスが未設定の場合は `MAIL_USERNAME` を使う。
    pub fn smtp_settings(&self) -> Result<SmtpSettings, ConfigError> {
        let host = self.server.clone().ok_or(ConfigError::Missing("MAIL_SERVER"))?;
        let port = self.port.as_deref().ok_or(ConfigError::Missing("MAIL_PORT"))?;
        let port = parse_port("MAIL_PORT", port)?;
        let username = self.username.clone().ok_or(ConfigError::Missing("MAIL_USERNAME"))?;
        let password = self.password.clone().ok_or(ConfigError::Missing("MAIL_PASSWORD"))?;
        let sender_address = self.sender_address.clone().unwrap_or_else(|| username.clone());

        Ok(SmtpSettings {
            host,
            port,
            username,
            password,
            sender_name: self.sender_name.clone(),
            sender_address,
            security: SmtpSecurity::from_flags(self.use_tls, self.use_ssl),
        })
    }
}

fn parse_port(name: &'static str, value: &str) -> Result<u16, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidPort {
        name,
        value: value.to_string(),
    })
}
