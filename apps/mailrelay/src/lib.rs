//! # mailrelay
//!
//! JSON で受け取った内容を SMTP 経由で 1 通のメールとして送信する HTTP リレー。
//!
//! ## モジュール構成
//!
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - リレーのエラーと HTTP レスポンスへの変換
//! - [`handler`] - axum ハンドラ
//! - [`usecase`] - メッセージ組み立てと送信
//! - [`app_builder`] - 送信実装の選択とルーター構築

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
