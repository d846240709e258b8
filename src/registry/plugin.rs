//! レジストリのプラグインレコード

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// プラグインのタグ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub label: String,
    /// `#rrggbb` 形式の表示色
    #[serde(default)]
    pub color: String,
}

impl Tag {
    /// `#rrggbb` を RGB に分解
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

/// レジストリのテスト状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

/// plugins.json の1エントリ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginRecord {
    pub module_name: String,
    pub project_link: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub is_official: bool,
    #[serde(default, rename = "type")]
    pub plugin_type: Option<String>,
    /// None はすべてのアダプターに対応
    #[serde(default)]
    pub supported_adapters: Option<Vec<String>>,
    #[serde(default)]
    pub valid: bool,
    #[serde(default, deserialize_with = "deserialize_time")]
    pub time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub skip_test: bool,
}

impl PluginRecord {
    /// 小文字化済みのクエリで部分一致するか
    ///
    /// name / desc / author / module_name / project_link / タグラベルを検索する。
    pub fn matches_text(&self, needle: &str) -> bool {
        let contains = |s: &str| s.to_lowercase().contains(needle);
        contains(&self.name)
            || contains(&self.desc)
            || contains(&self.author)
            || contains(&self.module_name)
            || contains(&self.project_link)
            || self.tags.iter().any(|t| contains(&t.label))
    }

    /// 指定ラベルのタグを持つか
    pub fn has_tag(&self, label: &str) -> bool {
        self.tags.iter().any(|t| t.label == label)
    }

    pub fn test_status(&self) -> TestStatus {
        if self.skip_test {
            TestStatus::Skipped
        } else if self.valid {
            TestStatus::Passed
        } else {
            TestStatus::Failed
        }
    }

    /// nb-cli でのインストールコマンド
    pub fn install_command(&self) -> String {
        format!("nb plugin install {}", self.project_link)
    }

    pub fn pypi_url(&self) -> String {
        format!("https://pypi.org/project/{}/", self.project_link)
    }

    /// 表示用の更新日時
    pub fn display_time(&self) -> String {
        self.time
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// レジストリの時刻文字列をパース
///
/// RFC 3339 のほか、タイムゾーンなしの ISO 8601 は UTC とみなす。
pub fn parse_time(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|n| n.and_utc())
        })
}

/// パースできない時刻はエラーにせず None とする
fn deserialize_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_time))
}

#[cfg(test)]
#[path = "plugin_test.rs"]
mod plugin_test;
