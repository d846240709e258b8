//! ストアページの状態
//!
//! 各コントローラの遷移後に `recompute` で派生状態（絞り込み結果・ページ範囲）を
//! 同期的に作り直す。

use super::filter::Filter;
use super::loader::LoadState;
use super::modal::ModalState;
use super::pagination::Pagination;
use super::search::SearchControl;
use super::sort::{sort_plugins, SortMode};
use super::toolbar::toolbar_options;
use crate::error::Result;
use crate::i18n::{tr, translate, Locale, MessageId};
use crate::registry::PluginRecord;
use std::sync::Arc;

/// プラグインストアページ
#[derive(Debug, Clone, Default)]
pub struct StorePage {
    load: LoadState,
    sort_mode: SortMode,
    search: SearchControl,
    pagination: Pagination,
    modal: ModalState,
    toolbar: Vec<Filter>,
    filtered: Vec<Arc<PluginRecord>>,
}

impl StorePage {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // 読み込み
    // ------------------------------------------------------------------------

    /// レジストリ取得結果を反映
    pub fn complete_load(&mut self, result: Result<Vec<PluginRecord>>) {
        if self.load.complete(result) {
            self.toolbar = toolbar_options(self.load.plugins());
            self.recompute();
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.load.error()
    }

    // ------------------------------------------------------------------------
    // 派生状態
    // ------------------------------------------------------------------------

    /// 全件数
    pub fn plugin_count(&self) -> usize {
        self.load.plugins().len()
    }

    /// 絞り込み後の件数
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// 現在ページに表示するレコード
    pub fn visible(&self) -> &[Arc<PluginRecord>] {
        &self.filtered[self.pagination.range()]
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// 件数の説明文
    pub fn summary(&self, locale: Locale) -> String {
        let plugin_count = self.plugin_count().to_string();
        if self.plugin_count() == self.filtered_count() {
            translate(locale, MessageId::PluginInfo, &[("pluginCount", plugin_count)])
        } else {
            translate(
                locale,
                MessageId::PluginSearchInfo,
                &[
                    ("pluginCount", plugin_count),
                    ("filteredPluginCount", self.filtered_count().to_string()),
                ],
            )
        }
    }

    /// ページ表示（1 始まり）
    pub fn page_indicator(&self, locale: Locale) -> String {
        translate(
            locale,
            MessageId::PageIndicator,
            &[
                ("current", (self.pagination.current_page() + 1).to_string()),
                ("total", self.pagination.total_pages().to_string()),
            ],
        )
    }

    fn recompute(&mut self) {
        let sorted = sort_plugins(self.load.plugins(), self.sort_mode);
        self.filtered = self.search.apply(&sorted);
        self.pagination.set_total_items(self.filtered.len());
    }

    // ------------------------------------------------------------------------
    // 並び順
    // ------------------------------------------------------------------------

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn toggle_sort(&mut self) {
        self.set_sort_mode(self.sort_mode.toggled());
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
        self.recompute();
    }

    pub fn sorter_label(&self, locale: Locale) -> String {
        tr(locale, self.sort_mode.label_id())
    }

    // ------------------------------------------------------------------------
    // 検索
    // ------------------------------------------------------------------------

    pub fn search(&self) -> &SearchControl {
        &self.search
    }

    /// 入力中のクエリを置き換え
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.search.set_query(text);
        self.recompute();
    }

    pub fn submit_query(&mut self) {
        self.search.submit();
        self.recompute();
    }

    pub fn backspace(&mut self) {
        self.search.backspace();
        self.recompute();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.recompute();
    }

    /// フィルタを追加（重複は無視）
    pub fn add_filter(&mut self, filter: Filter) -> bool {
        let added = self.search.add_filter(filter);
        if added {
            self.recompute();
        }
        added
    }

    /// 表示タグを index 指定で削除
    pub fn remove_tag(&mut self, index: usize) -> bool {
        let removed = self.search.remove_tag(index);
        if removed {
            self.recompute();
        }
        removed
    }

    /// 有効なら外し、無効なら追加する
    pub fn toggle_filter(&mut self, filter: Filter) {
        if !self.search.remove_filter(&filter) {
            self.search.add_filter(filter);
        }
        self.recompute();
    }

    /// ツールバーのフィルタ候補（全件から算出）
    pub fn toolbar_options(&self) -> &[Filter] {
        &self.toolbar
    }

    // ------------------------------------------------------------------------
    // ページ移動
    // ------------------------------------------------------------------------

    pub fn next_page(&mut self) {
        self.pagination.next_page();
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous_page();
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    // ------------------------------------------------------------------------
    // ダイアログ
    // ------------------------------------------------------------------------

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut ModalState {
        &mut self.modal
    }

    /// 現在ページの index 番目を詳細表示
    pub fn open_detail_at(&mut self, index: usize) -> bool {
        match self.visible().get(index).cloned() {
            Some(record) => {
                self.modal.open_detail(record);
                true
            }
            None => false,
        }
    }

    pub fn close_detail(&mut self) {
        self.modal.close_detail();
    }

    pub fn open_publish(&mut self) {
        self.modal.open_publish();
    }

    pub fn close_publish(&mut self) {
        self.modal.close_publish();
    }

    /// 詳細ダイアログで選択中のリンクをフィルタに追加して閉じる
    pub fn apply_detail_link(&mut self) -> bool {
        let filter = self.modal.detail().and_then(|d| d.selected_filter());
        match filter {
            Some(filter) => {
                self.modal.close_detail();
                self.add_filter(filter);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;
