//! 設定の読み込みと HTTP クライアント構築
//!
//! 優先順位: CLI フラグ > 環境変数 > 設定ファイル > デフォルト値

use crate::error::{Result, StoreError};
use crate::i18n::Locale;
use reqwest::Client;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// デフォルトのレジストリ URL
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.nonebot.dev";

/// 環境変数: レジストリ URL
pub const ENV_REGISTRY_URL: &str = "NBSTORE_REGISTRY_URL";

/// 環境変数: 表示言語
pub const ENV_LOCALE: &str = "NBSTORE_LOCALE";

/// 環境変数を取得（空文字列はNoneとして扱う）
pub fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "nbstore".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// 設定ファイル（~/.nbstore/config.toml）の内容
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    registry_url: Option<String>,
    locale: Option<String>,
    timeout_secs: Option<u64>,
}

/// ストア全体の設定
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub registry_url: String,
    pub locale: Locale,
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            locale: Locale::default(),
            timeout_secs: 30,
        }
    }
}

/// CLI から渡される上書き値
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub registry_url: Option<String>,
    pub locale: Option<Locale>,
}

impl StoreConfig {
    /// デフォルトの設定ファイルパス
    pub fn default_path() -> Option<PathBuf> {
        env_var("HOME").map(|home| PathBuf::from(home).join(".nbstore").join("config.toml"))
    }

    /// 全レイヤーを合成して設定を読み込む
    pub fn load(overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = match Self::default_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        config.apply_overrides(overrides);
        tracing::debug!(registry = %config.registry_url, locale = ?config.locale, "config loaded");
        Ok(config)
    }

    /// 設定ファイルを読み込む（存在しなければデフォルト値）
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut config = Self::default();
        if !path.exists() {
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content)
            .map_err(|e| StoreError::Config(format!("{}: {}", path.display(), e)))?;

        if let Some(url) = file.registry_url {
            config.registry_url = url;
        }
        if let Some(locale) = file.locale {
            config.locale = locale.parse()?;
        }
        if let Some(secs) = file.timeout_secs {
            config.timeout_secs = secs;
        }
        Ok(config)
    }

    /// 環境変数で上書き
    pub fn apply_env(&mut self) -> Result<()> {
        if let Some(url) = env_var(ENV_REGISTRY_URL) {
            self.registry_url = url;
        }
        if let Some(locale) = env_var(ENV_LOCALE) {
            self.locale = locale.parse()?;
        }
        Ok(())
    }

    /// CLI フラグで上書き
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(url) = &overrides.registry_url {
            self.registry_url = url.clone();
        }
        if let Some(locale) = overrides.locale {
            self.locale = locale;
        }
    }

    /// HTTP 設定に変換
    pub fn http(&self) -> HttpConfig {
        HttpConfig {
            timeout: Some(Duration::from_secs(self.timeout_secs)),
            ..HttpConfig::default()
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
