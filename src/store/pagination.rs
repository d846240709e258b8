//! ページ分割
//!
//! 件数が変わるたびに現在ページを [0, total_pages) に収める。

use std::ops::Range;

/// 1ページあたりの件数
pub const PAGE_SIZE: usize = 12;

/// ページ分割の状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    total_items: usize,
    page_size: usize,
    current_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pagination {
    /// 0 件・先頭ページで作成
    pub fn new(page_size: usize) -> Self {
        Self {
            total_items: 0,
            page_size: page_size.max(1),
            current_page: 0,
        }
    }

    /// 現在ページ（0 始まり）
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// 総ページ数（0 件でも 1）
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    /// 件数を更新し、現在ページを範囲内に戻す
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.clamp();
    }

    /// 表示範囲の開始 index
    pub fn start_index(&self) -> usize {
        (self.current_page * self.page_size).min(self.total_items)
    }

    /// 表示範囲の終了 index（排他的）
    pub fn end_index(&self) -> usize {
        (self.start_index() + self.page_size).min(self.total_items)
    }

    pub fn range(&self) -> Range<usize> {
        self.start_index()..self.end_index()
    }

    pub fn next_enabled(&self) -> bool {
        self.current_page + 1 < self.total_pages()
    }

    pub fn previous_enabled(&self) -> bool {
        self.current_page > 0
    }

    pub fn next_page(&mut self) {
        self.set_page(self.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1));
    }

    /// 指定ページへ移動（範囲外は端に丸める）
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
        self.clamp();
    }

    fn clamp(&mut self) {
        self.current_page = self.current_page.min(self.total_pages() - 1);
    }
}

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;
