//! 検索コントローラ
//!
//! 入力中のクエリと確定済みフィルタ（追加順）を保持する。

use super::filter::{apply_filters, Filter};
use crate::i18n::Locale;
use crate::registry::PluginRecord;
use std::sync::Arc;

/// 検索状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchControl {
    query: String,
    filters: Vec<Filter>,
}

impl SearchControl {
    /// 入力中のクエリ
    pub fn query(&self) -> &str {
        &self.query
    }

    /// 確定済みフィルタ（追加順）
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// クエリを置き換え
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// 入力中のクエリを Query フィルタとして確定
    ///
    /// 空白のみのクエリは何もしない。確定後はクエリを空にする。
    pub fn submit(&mut self) -> bool {
        let text = self.query.trim().to_string();
        if text.is_empty() {
            return false;
        }
        self.query.clear();
        self.add_filter(Filter::Query(text));
        true
    }

    /// Backspace
    ///
    /// クエリが空でなければ末尾の1文字を削除、空なら最後に追加したフィルタを削除する。
    pub fn backspace(&mut self) {
        if self.query.pop().is_none() {
            if let Some(removed) = self.filters.pop() {
                tracing::debug!(?removed, "filter removed by backspace");
            }
        }
    }

    /// クエリとフィルタをすべてクリア
    pub fn clear(&mut self) {
        self.query.clear();
        self.filters.clear();
    }

    /// フィルタを追加（重複は無視して false を返す）
    pub fn add_filter(&mut self, filter: Filter) -> bool {
        if self.filters.contains(&filter) {
            return false;
        }
        tracing::debug!(?filter, "filter added");
        self.filters.push(filter);
        true
    }

    /// 表示タグを index 指定で削除
    ///
    /// クエリが空白のみでなければ最後の表示タグはクエリ自身。
    pub fn remove_tag(&mut self, index: usize) -> bool {
        if index < self.filters.len() {
            let removed = self.filters.remove(index);
            tracing::debug!(?removed, "filter removed");
            true
        } else if index == self.filters.len() && !self.query.trim().is_empty() {
            self.query.clear();
            true
        } else {
            false
        }
    }

    /// 指定フィルタを削除
    pub fn remove_filter(&mut self, filter: &Filter) -> bool {
        match self.filters.iter().position(|f| f == filter) {
            Some(index) => self.remove_tag(index),
            None => false,
        }
    }

    /// 表示タグ（フィルタのラベル + 入力中クエリ）
    ///
    /// 空白のみのクエリはタグにしない。
    pub fn tags(&self, locale: Locale) -> Vec<String> {
        let mut tags: Vec<String> = self.filters.iter().map(|f| f.label(locale)).collect();
        let query = self.query.trim();
        if !query.is_empty() {
            tags.push(query.to_string());
        }
        tags
    }

    /// 何も絞り込んでいないか
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.filters.is_empty()
    }

    /// 絞り込み結果を返す
    pub fn apply(&self, plugins: &[Arc<PluginRecord>]) -> Vec<Arc<PluginRecord>> {
        apply_filters(plugins, &self.filters, &self.query)
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;
