//! ヘルスチェック
//!
//! 単一エンドポイントに GET を送り、レスポンスの `IsHealthy` を読み取る。
//! ステータスコードは判定に使わない。

/// 単一エンドポイントのプローバー
pub mod prober;

pub use prober::{decode_health, HealthProber};
