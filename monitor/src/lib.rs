//! API Monitor
//!
//! 環境ごとのURLリストに対してヘルスチェックを行う対話型ツール

#![warn(missing_docs)]

/// CLIインターフェース
pub mod cli;

/// エラー型定義
pub mod error;

/// ヘルスチェック（単一エンドポイント）
pub mod health;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 監視パスの実行
pub mod runner;

/// 対話型メニュー
pub mod shell;

/// URLリストの読み込み
pub mod source;

pub use api_monitor_common::config::MonitorConfig;
pub use api_monitor_common::types::{Environment, HealthRecord};
pub use error::MonitorError;
