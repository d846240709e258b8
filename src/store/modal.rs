//! ダイアログ状態
//!
//! 公開フォームと詳細ダイアログは独立して開閉する。
//! 詳細ダイアログは開いた時点のレコードを保持し、一覧の変化に影響されない。

use super::filter::Filter;
use super::publish::PublishForm;
use crate::registry::PluginRecord;
use std::sync::Arc;

/// 詳細ダイアログの状態
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    record: Arc<PluginRecord>,
    selected_link: usize,
}

impl DetailView {
    pub fn new(record: Arc<PluginRecord>) -> Self {
        Self {
            record,
            selected_link: 0,
        }
    }

    pub fn record(&self) -> &PluginRecord {
        &self.record
    }

    /// フィルタとして追加できるリンク（作者 → タグ）
    pub fn links(&self) -> Vec<Filter> {
        std::iter::once(Filter::Author(self.record.author.clone()))
            .chain(self.record.tags.iter().map(|t| Filter::Tag(t.label.clone())))
            .collect()
    }

    pub fn selected_link(&self) -> usize {
        self.selected_link
    }

    pub fn next_link(&mut self) {
        let len = self.links().len();
        self.selected_link = (self.selected_link + 1).min(len - 1);
    }

    pub fn previous_link(&mut self) {
        self.selected_link = self.selected_link.saturating_sub(1);
    }

    pub fn selected_filter(&self) -> Option<Filter> {
        self.links().get(self.selected_link).cloned()
    }
}

/// 前面に表示するダイアログ
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActiveModal<'a> {
    None,
    Publish(&'a PublishForm),
    Detail(&'a DetailView),
}

/// ダイアログ全体の状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    publish: Option<PublishForm>,
    detail: Option<DetailView>,
}

impl ModalState {
    #[cfg(test)]
    pub fn is_publish_open(&self) -> bool {
        self.publish.is_some()
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail.is_some()
    }

    #[cfg(test)]
    pub fn is_any_open(&self) -> bool {
        self.is_publish_open() || self.is_detail_open()
    }

    /// 公開フォームを空の状態で開く
    pub fn open_publish(&mut self) {
        self.publish = Some(PublishForm::default());
    }

    pub fn close_publish(&mut self) {
        self.publish = None;
    }

    /// 対象レコードを捕捉して詳細ダイアログを開く
    pub fn open_detail(&mut self, record: Arc<PluginRecord>) {
        self.detail = Some(DetailView::new(record));
    }

    /// 閉じる（Esc・背景クリックなど経路を問わない）
    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    #[cfg(test)]
    pub fn publish(&self) -> Option<&PublishForm> {
        self.publish.as_ref()
    }

    pub fn publish_mut(&mut self) -> Option<&mut PublishForm> {
        self.publish.as_mut()
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    pub fn detail_mut(&mut self) -> Option<&mut DetailView> {
        self.detail.as_mut()
    }

    /// 前面のダイアログ（詳細が公開フォームより手前）
    pub fn active(&self) -> ActiveModal<'_> {
        if let Some(detail) = &self.detail {
            ActiveModal::Detail(detail)
        } else if let Some(form) = &self.publish {
            ActiveModal::Publish(form)
        } else {
            ActiveModal::None
        }
    }
}
