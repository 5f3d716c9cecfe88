//! 設定管理
//!
//! MonitorConfig等の設定構造体

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// モニター設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonitorConfig {
    /// URLリストファイルを置くディレクトリ (デフォルト: ".")
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// リクエストタイムアウト（秒）(デフォルト: なし)
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// JSONデコード失敗をエラーとして扱う (デフォルト: false)
    #[serde(default)]
    pub strict_decode: bool,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from(".")
}

impl MonitorConfig {
    /// リクエストタイムアウト
    ///
    /// `0` はタイムアウトなしと同じ扱い。
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            request_timeout_secs: None,
            strict_decode: false,
        }
    }
}
