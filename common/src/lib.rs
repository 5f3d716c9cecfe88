//! API Monitor 共通ライブラリ
//!
//! 監視対象環境・ヘルスレコード・設定などの共有型

#![warn(missing_docs)]

/// 設定管理
pub mod config;

/// エラー型定義
pub mod error;

/// 共通型定義
pub mod types;
