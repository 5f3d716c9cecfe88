//! ロギング初期化
//!
//! 標準出力はレポート専用のため、ログは標準エラー出力に書き出す。

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;

/// ログレベルを指定する環境変数
pub const LOG_LEVEL_ENV: &str = "API_MONITOR_LOG_LEVEL";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// ログフィルタを構築
///
/// `API_MONITOR_LOG_LEVEL`、`RUST_LOG` の順に参照し、どちらも無効なら `warn` を使う。
pub fn build_filter() -> EnvFilter {
    std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// グローバルロガーを初期化
pub fn init() -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(build_filter())
        .with(stderr_log)
        .try_init()
}
