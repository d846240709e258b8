//! フィルタロジック
//!
//! プラグイン一覧を構造化フィルタとテキストクエリで絞り込む。

use crate::i18n::{tr, translate, Locale, MessageId};
use crate::registry::PluginRecord;
use std::sync::Arc;

/// 構造化フィルタ
///
/// 種別と値が等しいフィルタは重複とみなす。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Filter {
    /// 作者の完全一致
    Author(String),
    /// タグラベルの完全一致
    Tag(String),
    /// 確定済みのテキストクエリ
    Query(String),
    /// 公式プラグインのみ
    Official,
    /// レジストリのテストを通過したもののみ
    Valid,
}

impl Filter {
    /// レコードがフィルタを満たすか
    pub fn matches(&self, plugin: &PluginRecord) -> bool {
        match self {
            Filter::Author(author) => plugin.author == *author,
            Filter::Tag(label) => plugin.has_tag(label),
            Filter::Query(text) => query_matches(plugin, text),
            Filter::Official => plugin.is_official,
            Filter::Valid => plugin.valid,
        }
    }

    /// 検索欄に表示するラベル
    pub fn label(&self, locale: Locale) -> String {
        match self {
            Filter::Author(author) => {
                translate(locale, MessageId::FilterAuthor, &[("author", author.clone())])
            }
            Filter::Tag(tag) => translate(locale, MessageId::FilterTag, &[("tag", tag.clone())]),
            Filter::Query(text) => text.clone(),
            Filter::Official => tr(locale, MessageId::FilterOfficial),
            Filter::Valid => tr(locale, MessageId::FilterValid),
        }
    }
}

/// テキストクエリに一致するか
///
/// - 前後の空白を除いたクエリが空なら常に一致
/// - case-insensitive な部分一致（対象フィールドは `PluginRecord::matches_text`）
pub fn query_matches(plugin: &PluginRecord, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    plugin.matches_text(&query.to_lowercase())
}

/// すべてのフィルタ（AND）とクエリを満たすレコードを入力順で返す
pub fn apply_filters(
    plugins: &[Arc<PluginRecord>],
    filters: &[Filter],
    query: &str,
) -> Vec<Arc<PluginRecord>> {
    plugins
        .iter()
        .filter(|p| filters.iter().all(|f| f.matches(p)) && query_matches(p, query))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;
