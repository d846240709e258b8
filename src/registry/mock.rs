//! テスト用モックレジストリとレコードビルダー

use super::*;
use crate::error::{Result, StoreError};
use chrono::{TimeZone, Utc};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};

/// テスト用レコードを作成
///
/// `day` は 2024-01-day の更新日時。None は更新日時なし。
pub fn record(module: &str, author: &str, tags: &[&str], day: Option<u32>) -> PluginRecord {
    PluginRecord {
        module_name: module.to_string(),
        project_link: module.replace('_', "-"),
        name: module.to_string(),
        desc: format!("{} description", module),
        author: author.to_string(),
        homepage: None,
        tags: tags
            .iter()
            .map(|t| Tag {
                label: t.to_string(),
                color: "#ea5252".to_string(),
            })
            .collect(),
        is_official: false,
        plugin_type: Some("application".to_string()),
        supported_adapters: None,
        valid: true,
        time: day.map(|d| Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()),
        version: Some("0.1.0".to_string()),
        skip_test: false,
    }
}

/// 連番レコードを n 件作成
pub fn numbered(n: usize) -> Vec<PluginRecord> {
    (0..n)
        .map(|i| record(&format!("plugin_{:02}", i), "author", &[], None))
        .collect()
}

/// 固定の結果を返すレジストリ
pub struct MockRegistry {
    records: Vec<PluginRecord>,
    failure: Option<u16>,
    calls: AtomicUsize,
}

impl MockRegistry {
    pub fn ok(records: Vec<PluginRecord>) -> Self {
        Self {
            records,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(status),
            calls: AtomicUsize::new(0),
        }
    }

    /// 呼び出し回数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RegistrySource for MockRegistry {
    fn fetch_collection<'a>(
        &'a self,
        kind: ResourceKind,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<PluginRecord>>> + Send + 'a>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let result = match self.failure {
            Some(status) => Err(StoreError::RegistryApi {
                status,
                url: format!("mock://{}s.json", kind),
            }),
            None => Ok(self.records.clone()),
        };
        Box::pin(async move { result })
    }
}
