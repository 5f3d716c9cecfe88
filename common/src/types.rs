//! 共通型定義
//!
//! Environment, HealthRecord等のコアデータ型

use crate::error::CommonError;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// 監視対象環境
///
/// 環境ごとに読み込むURLリストファイルが決まる。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// サンドボックス環境
    Sandbox,
    /// 本番環境
    Production,
}

impl Environment {
    /// 全環境（メニュー表示順）
    pub const ALL: [Environment; 2] = [Environment::Sandbox, Environment::Production];

    /// 環境名
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Production => "production",
        }
    }

    /// URLリストのファイル名
    pub fn file_name(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox.txt",
            Environment::Production => "production.txt",
        }
    }

    /// メニュー表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Environment::Sandbox => "SANDBOX",
            Environment::Production => "PRODUCTION",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "production" => Ok(Environment::Production),
            _ => Err(CommonError::UnknownEnvironment(s.to_string())),
        }
    }
}

/// ヘルスチェックレスポンスのキー名
pub const IS_HEALTHY_KEY: &str = "IsHealthy";

/// ヘルスチェックレスポンス
///
/// `IsHealthy` 以外のフィールドは無視し、欠落時は `false` とみなす。
/// キー名は大文字小文字を区別しない（`isHealthy`, `ishealthy` も同じ扱い）。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct HealthRecord {
    /// 稼働状態
    #[serde(rename = "IsHealthy")]
    pub is_healthy: bool,
}

impl<'de> Deserialize<'de> for HealthRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(HealthRecordVisitor)
    }
}

struct HealthRecordVisitor;

impl<'de> Visitor<'de> for HealthRecordVisitor {
    type Value = HealthRecord;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object with an IsHealthy field")
    }

    // `null` はゼロ値のまま
    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(HealthRecord::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut record = HealthRecord::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case(IS_HEALTHY_KEY) {
                // 重複キーは後勝ち、`null` は値を変更しない
                if let Some(value) = map.next_value::<Option<bool>>()? {
                    record.is_healthy = value;
                }
            } else {
                map.next_value::<de::IgnoredAny>()?;
            }
        }
        Ok(record)
    }
}

impl HealthRecord {
    /// JSONバイト列からデコード
    pub fn from_slice(body: &[u8]) -> Result<Self, CommonError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// JSONバイト列からデコード（失敗時はゼロ値）
    pub fn from_slice_lenient(body: &[u8]) -> Self {
        Self::from_slice(body).unwrap_or_default()
    }
}
