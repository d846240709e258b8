//! プラグインストア TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: ページ状態 + フォーカス + カード選択
//! - `Msg`: アプリケーションへのメッセージ
//! - `update`: メッセージに応じた状態遷移

use super::common::modal_rect;
use crate::error::Result;
use crate::i18n::Locale;
use crate::registry::PluginRecord;
use crate::store::{ActiveModal, Filter, StorePage};
use crossterm::event::{KeyCode, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::ListState;

/// カードグリッドの列数
pub const GRID_COLUMNS: usize = 3;

// ============================================================================
// Focus（入力先）
// ============================================================================

/// キー入力の受け取り先（ダイアログが開いていないとき）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Focus {
    /// カードグリッド
    #[default]
    Grid,
    /// 検索欄
    Search,
    /// フィルタ選択ポップアップ
    Toolbar { state: ListState },
}

/// フィルタ選択ポップアップの1項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarEntry {
    pub filter: Filter,
    /// 有効なフィルタ（選択で解除）
    pub active: bool,
}

/// ポップアップ項目: 有効なフィルタ → 追加できる候補
pub fn toolbar_entries(page: &StorePage) -> Vec<ToolbarEntry> {
    let active = page.search().filters();
    let mut entries: Vec<ToolbarEntry> = active
        .iter()
        .map(|f| ToolbarEntry {
            filter: f.clone(),
            active: true,
        })
        .collect();
    entries.extend(
        page.toolbar_options()
            .iter()
            .filter(|f| !active.contains(f))
            .map(|f| ToolbarEntry {
                filter: f.clone(),
                active: false,
            }),
    );
    entries
}

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
pub enum Msg {
    /// 終了
    Quit,
    /// レジストリ取得完了
    Loaded(Result<Vec<PluginRecord>>),

    // グリッド
    SelectLeft,
    SelectRight,
    SelectUp,
    SelectDown,
    OpenDetail,
    AddAuthorFilter,
    ToggleSort,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    JumpPage(usize),
    /// ページ番号の入力（Enter で移動）
    PageDigit(char),
    PageInputBackspace,
    PageInputCancel,
    FocusSearch,
    OpenToolbar,
    OpenPublish,

    // 検索欄
    SearchInput(char),
    SearchSubmit,
    SearchBackspace,
    SearchClear,
    SearchUnfocus,
    /// 表示タグの選択移動
    SearchTagPrev,
    SearchTagNext,
    /// 選択中の表示タグを削除
    SearchRemoveTag,

    // フィルタ選択
    ToolbarUp,
    ToolbarDown,
    ToolbarSelect,
    ToolbarClose,

    // 詳細ダイアログ
    DetailPrevLink,
    DetailNextLink,
    DetailApplyLink,
    CloseDetail,

    // 公開フォーム
    FormInput(char),
    FormBackspace,
    FormNextField,
    FormPrevField,
    FormSubmit,
    ClosePublish,
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    /// ページのビューモデル
    pub page: StorePage,
    /// 表示言語
    pub locale: Locale,
    /// 入力先
    pub focus: Focus,
    /// 現在ページ内の選択カード
    pub selected: usize,
    /// 検索欄で選択中の表示タグ
    pub selected_tag: Option<usize>,
    /// 入力中のページ番号（1 始まり）
    pub page_input: String,
    /// 終了フラグ
    pub should_quit: bool,
}

impl Model {
    /// 読み込み中の状態で作成
    pub fn new(locale: Locale) -> Self {
        Self {
            page: StorePage::new(),
            locale,
            focus: Focus::Grid,
            selected: 0,
            selected_tag: None,
            page_input: String::new(),
            should_quit: false,
        }
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        match self.page.modal().active() {
            ActiveModal::Detail(_) => match key {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => Some(Msg::CloseDetail),
                KeyCode::Left | KeyCode::Char('h') => Some(Msg::DetailPrevLink),
                KeyCode::Right | KeyCode::Char('l') => Some(Msg::DetailNextLink),
                KeyCode::Enter => Some(Msg::DetailApplyLink),
                _ => None,
            },
            ActiveModal::Publish(form) if form.submitted_url().is_some() => match key {
                KeyCode::Esc | KeyCode::Enter => Some(Msg::ClosePublish),
                _ => None,
            },
            ActiveModal::Publish(_) => match key {
                KeyCode::Esc => Some(Msg::ClosePublish),
                KeyCode::Tab | KeyCode::Down => Some(Msg::FormNextField),
                KeyCode::BackTab | KeyCode::Up => Some(Msg::FormPrevField),
                KeyCode::Enter => Some(Msg::FormSubmit),
                KeyCode::Backspace => Some(Msg::FormBackspace),
                KeyCode::Char(c) => Some(Msg::FormInput(c)),
                _ => None,
            },
            ActiveModal::None => match &self.focus {
                Focus::Search => match key {
                    KeyCode::Enter => Some(Msg::SearchSubmit),
                    KeyCode::Backspace => Some(Msg::SearchBackspace),
                    KeyCode::Esc if !self.page.search().is_empty() => Some(Msg::SearchClear),
                    KeyCode::Esc | KeyCode::Down => Some(Msg::SearchUnfocus),
                    KeyCode::Left => Some(Msg::SearchTagPrev),
                    KeyCode::Right => Some(Msg::SearchTagNext),
                    KeyCode::Delete if self.selected_tag.is_some() => Some(Msg::SearchRemoveTag),
                    KeyCode::Char(c) => Some(Msg::SearchInput(c)),
                    _ => None,
                },
                Focus::Toolbar { .. } => match key {
                    KeyCode::Up | KeyCode::Char('k') => Some(Msg::ToolbarUp),
                    KeyCode::Down | KeyCode::Char('j') => Some(Msg::ToolbarDown),
                    KeyCode::Enter | KeyCode::Char(' ') => Some(Msg::ToolbarSelect),
                    KeyCode::Esc | KeyCode::Char('f') | KeyCode::Char('q') => {
                        Some(Msg::ToolbarClose)
                    }
                    _ => None,
                },
                Focus::Grid => match key {
                    KeyCode::Enter if !self.page_input.is_empty() => self
                        .page_input
                        .parse::<usize>()
                        .ok()
                        .map(|n| Msg::JumpPage(n.saturating_sub(1))),
                    KeyCode::Esc if !self.page_input.is_empty() => Some(Msg::PageInputCancel),
                    KeyCode::Backspace if !self.page_input.is_empty() => {
                        Some(Msg::PageInputBackspace)
                    }
                    KeyCode::Char('q') => Some(Msg::Quit),
                    KeyCode::Left | KeyCode::Char('h') => Some(Msg::SelectLeft),
                    KeyCode::Right | KeyCode::Char('l') => Some(Msg::SelectRight),
                    KeyCode::Up | KeyCode::Char('k') => Some(Msg::SelectUp),
                    KeyCode::Down | KeyCode::Char('j') => Some(Msg::SelectDown),
                    KeyCode::Enter => Some(Msg::OpenDetail),
                    KeyCode::Char('/') => Some(Msg::FocusSearch),
                    KeyCode::Char('f') => Some(Msg::OpenToolbar),
                    KeyCode::Char('a') => Some(Msg::AddAuthorFilter),
                    KeyCode::Char('s') => Some(Msg::ToggleSort),
                    KeyCode::Char('n') | KeyCode::PageDown => Some(Msg::NextPage),
                    KeyCode::Char('p') | KeyCode::PageUp => Some(Msg::PrevPage),
                    KeyCode::Home => Some(Msg::FirstPage),
                    KeyCode::End => Some(Msg::LastPage),
                    KeyCode::Char(c) if c.is_ascii_digit() => Some(Msg::PageDigit(c)),
                    KeyCode::Char('P') => Some(Msg::OpenPublish),
                    KeyCode::Backspace => Some(Msg::SearchBackspace),
                    _ => None,
                },
            },
        }
    }

    /// マウス入力をメッセージに変換
    ///
    /// 詳細ダイアログの外側をクリックすると閉じる。
    pub fn mouse_to_msg(&self, mouse: MouseEvent, area: Rect) -> Option<Msg> {
        if !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return None;
        }
        if !self.page.modal().is_detail_open() {
            return None;
        }
        let inside = modal_rect(area).contains(Position::new(mouse.column, mouse.row));
        (!inside).then_some(Msg::CloseDetail)
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// ページ番号の最大桁数
const PAGE_INPUT_DIGITS: usize = 4;

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) {
    // ページ番号入力は他の操作で破棄する
    if !matches!(
        msg,
        Msg::PageDigit(_) | Msg::PageInputBackspace | Msg::Loaded(_)
    ) {
        model.page_input.clear();
    }

    match msg {
        Msg::Quit => model.should_quit = true,
        Msg::Loaded(result) => model.page.complete_load(result),

        Msg::SelectLeft => model.selected = model.selected.saturating_sub(1),
        Msg::SelectRight => model.selected += 1,
        Msg::SelectUp => {
            if model.selected >= GRID_COLUMNS {
                model.selected -= GRID_COLUMNS;
            }
        }
        Msg::SelectDown => {
            if model.selected + GRID_COLUMNS < model.page.visible().len() {
                model.selected += GRID_COLUMNS;
            }
        }
        Msg::OpenDetail => {
            model.page.open_detail_at(model.selected);
        }
        Msg::AddAuthorFilter => {
            if let Some(plugin) = model.page.visible().get(model.selected) {
                let filter = Filter::Author(plugin.author.clone());
                model.page.add_filter(filter);
            }
        }
        Msg::ToggleSort => model.page.toggle_sort(),
        Msg::NextPage => change_page(model, |page| page.next_page()),
        Msg::PrevPage => change_page(model, |page| page.previous_page()),
        Msg::FirstPage => change_page(model, |page| page.set_page(0)),
        Msg::LastPage => change_page(model, |page| page.set_page(usize::MAX)),
        Msg::JumpPage(index) => change_page(model, |page| page.set_page(index)),
        Msg::PageDigit(c) => {
            if model.page_input.len() < PAGE_INPUT_DIGITS {
                model.page_input.push(c);
            }
        }
        Msg::PageInputBackspace => {
            model.page_input.pop();
        }
        Msg::PageInputCancel => {}
        Msg::FocusSearch => {
            // 読み込み中は検索欄を無効にする
            if !model.page.is_loading() {
                model.focus = Focus::Search;
            }
        }
        Msg::OpenToolbar => {
            let mut state = ListState::default();
            state.select(Some(0));
            model.focus = Focus::Toolbar { state };
        }
        Msg::OpenPublish => model.page.open_publish(),

        Msg::SearchInput(c) => {
            let query = model.page.search().query();
            // 先頭の空白は受け付けない
            if !(c.is_whitespace() && query.trim().is_empty()) {
                let text = format!("{}{}", query, c);
                model.page.set_query(text);
            }
            model.selected_tag = None;
        }
        Msg::SearchSubmit => {
            model.page.submit_query();
            model.selected_tag = None;
        }
        Msg::SearchBackspace => {
            model.page.backspace();
            model.selected_tag = None;
        }
        Msg::SearchClear => {
            model.page.clear_search();
            model.selected_tag = None;
        }
        Msg::SearchUnfocus => {
            model.focus = Focus::Grid;
            model.selected_tag = None;
        }
        Msg::SearchTagPrev => {
            let len = model.page.search().tags(model.locale).len();
            model.selected_tag = match model.selected_tag {
                _ if len == 0 => None,
                None => Some(len - 1),
                Some(index) => Some(index.saturating_sub(1)),
            };
        }
        Msg::SearchTagNext => {
            let len = model.page.search().tags(model.locale).len();
            model.selected_tag = model.selected_tag.and_then(|i| (i + 1 < len).then_some(i + 1));
        }
        Msg::SearchRemoveTag => {
            if let Some(index) = model.selected_tag {
                model.page.remove_tag(index);
            }
        }

        Msg::ToolbarUp => {
            if let Focus::Toolbar { state } = &mut model.focus {
                let current = state.selected().unwrap_or(0);
                state.select(Some(current.saturating_sub(1)));
            }
        }
        Msg::ToolbarDown => {
            let len = toolbar_entries(&model.page).len();
            if let Focus::Toolbar { state } = &mut model.focus {
                let current = state.selected().unwrap_or(0);
                state.select(Some((current + 1).min(len.saturating_sub(1))));
            }
        }
        Msg::ToolbarSelect => {
            let entries = toolbar_entries(&model.page);
            if let Focus::Toolbar { state } = &mut model.focus {
                if let Some(entry) = state.selected().and_then(|i| entries.get(i)) {
                    model.page.toggle_filter(entry.filter.clone());
                }
                let len = toolbar_entries(&model.page).len();
                let current = state.selected().unwrap_or(0);
                state.select(Some(current.min(len.saturating_sub(1))));
            }
        }
        Msg::ToolbarClose => model.focus = Focus::Grid,

        Msg::DetailPrevLink => {
            if let Some(detail) = model.page.modal_mut().detail_mut() {
                detail.previous_link();
            }
        }
        Msg::DetailNextLink => {
            if let Some(detail) = model.page.modal_mut().detail_mut() {
                detail.next_link();
            }
        }
        Msg::DetailApplyLink => {
            model.page.apply_detail_link();
        }
        Msg::CloseDetail => model.page.close_detail(),

        Msg::FormInput(c) => {
            if let Some(form) = model.page.modal_mut().publish_mut() {
                form.input_char(c);
            }
        }
        Msg::FormBackspace => {
            if let Some(form) = model.page.modal_mut().publish_mut() {
                form.backspace();
            }
        }
        Msg::FormNextField => {
            if let Some(form) = model.page.modal_mut().publish_mut() {
                form.next_field();
            }
        }
        Msg::FormPrevField => {
            if let Some(form) = model.page.modal_mut().publish_mut() {
                form.previous_field();
            }
        }
        Msg::FormSubmit => {
            if let Some(form) = model.page.modal_mut().publish_mut() {
                form.submit();
            }
        }
        Msg::ClosePublish => model.page.close_publish(),
    }

    clamp_selection(model);
    clamp_selected_tag(model);
}

/// ページ移動後は先頭カードを選択
fn change_page(model: &mut Model, f: impl FnOnce(&mut StorePage)) {
    f(&mut model.page);
    model.selected = 0;
}

/// 表示件数の変化後に選択カードを範囲内に戻す
fn clamp_selection(model: &mut Model) {
    let len = model.page.visible().len();
    model.selected = model.selected.min(len.saturating_sub(1));
}

/// タグの増減後に選択タグを範囲内に戻す
fn clamp_selected_tag(model: &mut Model) {
    let len = model.page.search().tags(model.locale).len();
    model.selected_tag = match model.selected_tag {
        Some(_) if len == 0 => None,
        Some(index) => Some(index.min(len - 1)),
        None => None,
    };
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
