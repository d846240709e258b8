//! レジストリ読み込み状態
//!
//! `Loading → Ready | Failed`。Ready / Failed は終端状態で、自動リトライはしない。

use crate::error::Result;
use crate::registry::{PluginRecord, RegistrySource, ResourceKind};
use std::sync::Arc;

/// 読み込み状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    /// 一覧なし・エラーなし
    #[default]
    Loading,
    /// 取得済みの一覧（レジストリ順）
    Ready(Vec<Arc<PluginRecord>>),
    /// 取得失敗（一覧なし）
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// 全件（未取得・失敗時は空）
    pub fn plugins(&self) -> &[Arc<PluginRecord>] {
        match self {
            LoadState::Ready(plugins) => plugins.as_slice(),
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// 取得結果を反映する
    ///
    /// Loading 以外からは遷移しない。遷移した場合 true。
    pub fn complete(&mut self, result: Result<Vec<PluginRecord>>) -> bool {
        if !self.is_loading() {
            tracing::warn!("registry result ignored: already settled");
            return false;
        }
        *self = match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), "plugins loaded");
                LoadState::Ready(records.into_iter().map(Arc::new).collect())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load plugins");
                LoadState::Failed(e.to_string())
            }
        };
        true
    }
}

/// プラグインコレクションを1回取得する
pub async fn load_plugins(source: &dyn RegistrySource) -> Result<Vec<PluginRecord>> {
    source.fetch_collection(ResourceKind::Plugin).await
}
