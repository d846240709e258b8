//! 並び順

use crate::i18n::MessageId;
use crate::registry::PluginRecord;
use std::sync::Arc;

/// 並び順モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortMode {
    /// レジストリの順序
    #[default]
    Default,
    /// 更新日時の降順
    #[value(name = "updated")]
    UpdateDesc,
}

impl SortMode {
    /// もう一方のモードへ切り替え
    pub fn toggled(self) -> Self {
        match self {
            SortMode::Default => SortMode::UpdateDesc,
            SortMode::UpdateDesc => SortMode::Default,
        }
    }

    pub fn label_id(self) -> MessageId {
        match self {
            SortMode::Default => MessageId::SorterDefault,
            SortMode::UpdateDesc => MessageId::SorterUpdateDesc,
        }
    }
}

/// 全件リストを並べ替えた新しいリストを返す
///
/// 安定ソート。更新日時のないレコードは最も古いものとして末尾に並ぶ。
pub fn sort_plugins(plugins: &[Arc<PluginRecord>], mode: SortMode) -> Vec<Arc<PluginRecord>> {
    let mut sorted = plugins.to_vec();
    if mode == SortMode::UpdateDesc {
        sorted.sort_by(|a, b| b.time.cmp(&a.time));
    }
    sorted
}

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;
