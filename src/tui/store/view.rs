//! プラグインストア TUI の view（描画）

use super::app::{toolbar_entries, Focus, Model, GRID_COLUMNS};
use super::common::{centered_rect, modal_rect};
use crate::i18n::{tr, Locale, MessageId};
use crate::registry::{PluginRecord, Tag, TestStatus};
use crate::store::{ActiveModal, DetailView, FormField, PublishForm, PAGE_SIZE};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model) {
    let locale = model.locale;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 件数
            Constraint::Length(3), // 検索欄
            Constraint::Length(1), // ツールバー
            Constraint::Min(3),    // コンテンツ
            Constraint::Length(1), // ページ
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    let summary = Paragraph::new(model.page.summary(locale))
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(summary, chunks[0]);

    render_searcher(f, chunks[1], model);
    render_toolbar(f, chunks[2], model);

    if let Some(error) = model.page.error() {
        render_error_banner(f, chunks[3], error, locale);
    } else if model.page.is_loading() {
        let loading = Paragraph::new(tr(locale, MessageId::Loading))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(loading, chunks[3]);
    } else {
        render_grid(f, chunks[3], model);
    }

    render_paginator(f, chunks[4], model);
    render_help(f, chunks[5], model);

    if let Focus::Toolbar { state } = &model.focus {
        render_toolbar_popup(f, model, state.clone());
    }

    match model.page.modal().active() {
        ActiveModal::Detail(detail) => render_detail(f, detail, locale),
        ActiveModal::Publish(form) => render_publish(f, form, locale),
        ActiveModal::None => {}
    }
}

/// 検索欄（フィルタタグ + 入力中クエリ）
fn render_searcher(f: &mut Frame, area: Rect, model: &Model) {
    let locale = model.locale;
    let focused = model.focus == Focus::Search;
    let search = model.page.search();

    // 最後のタグは入力中クエリ（フィルタの数より後ろ）
    let tags = search.tags(locale);
    let filter_count = search.filters().len();
    let mut spans: Vec<Span> = Vec::new();
    for (index, tag) in tags.into_iter().enumerate() {
        let style = if focused && model.selected_tag == Some(index) {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else if index < filter_count {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default()
        };
        if index < filter_count {
            spans.push(Span::styled(format!(" {} ", tag), style));
            spans.push(Span::raw(" "));
        } else {
            spans.push(Span::styled(tag, style));
        }
    }

    let query = search.query();
    if query.trim().is_empty() && !focused {
        spans.push(Span::styled(
            tr(locale, MessageId::SearchPlaceholder),
            Style::default().fg(Color::DarkGray),
        ));
    } else if focused {
        // 入力直後の末尾空白
        let trimmed = query.trim_end();
        if !trimmed.is_empty() {
            spans.push(Span::raw(query[trimmed.len()..].to_string()));
        }
    }
    if focused {
        spans.push(Span::styled("|", Style::default().fg(Color::Yellow)));
    }

    let border = if model.page.is_loading() {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let searcher = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" / ")
            .borders(Borders::ALL)
            .border_style(border),
    );
    f.render_widget(searcher, area);
}

/// ツールバー（並び順 | フィルタ | 公開）
fn render_toolbar(f: &mut Frame, area: Rect, model: &Model) {
    let locale = model.locale;
    let sorter_style = if model.page.sort_mode() == crate::store::SortMode::UpdateDesc {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let line = Line::from(vec![
        Span::styled(format!("[s] {}", model.page.sorter_label(locale)), sorter_style),
        Span::raw("  "),
        Span::raw(format!("[f] {}", tr(locale, MessageId::ToolbarTitle))),
        Span::raw("  "),
        Span::styled(
            format!("[P] + {}", tr(locale, MessageId::PublishAction)),
            Style::default().fg(Color::Magenta),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// 読み込み失敗のバナー
fn render_error_banner(f: &mut Frame, area: Rect, error: &str, locale: Locale) {
    let banner = Paragraph::new(error.to_string())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .title(format!(" {} ", tr(locale, MessageId::LoadFailedTitle)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(banner, area);
}

/// カードグリッド
fn render_grid(f: &mut Frame, area: Rect, model: &Model) {
    let visible = model.page.visible();
    if visible.is_empty() {
        let empty = Paragraph::new(tr(model.locale, MessageId::NoMatch))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, area);
        return;
    }

    let rows = PAGE_SIZE.div_ceil(GRID_COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    for (row_index, row_area) in row_areas.iter().enumerate() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);
        for (col_index, card_area) in col_areas.iter().enumerate() {
            let index = row_index * GRID_COLUMNS + col_index;
            if let Some(plugin) = visible.get(index) {
                let selected = index == model.selected && model.focus == Focus::Grid;
                render_card(f, *card_area, plugin, selected);
            }
        }
    }
}

/// プラグインカード
fn render_card(f: &mut Frame, area: Rect, plugin: &PluginRecord, selected: bool) {
    let mut title = vec![Span::styled(
        format!(" {} ", plugin.name),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if plugin.is_official {
        title.push(Span::styled("★ ", Style::default().fg(Color::Yellow)));
    }

    let lines = vec![
        Line::from(Span::styled(
            plugin.desc.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(tag_spans(&plugin.tags)),
        Line::from(vec![
            Span::styled(format!("@{}", plugin.author), Style::default().fg(Color::Cyan)),
            Span::raw("  "),
            Span::styled(plugin.display_time(), Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let border = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Line::from(title))
            .borders(Borders::ALL)
            .border_style(border),
    );
    f.render_widget(card, area);
}

/// タグを色付きで並べる
fn tag_spans(tags: &[Tag]) -> Vec<Span<'static>> {
    tags.iter()
        .flat_map(|tag| {
            let color = tag
                .rgb()
                .map(|(r, g, b)| Color::Rgb(r, g, b))
                .unwrap_or(Color::Gray);
            [
                Span::styled(format!("#{}", tag.label), Style::default().fg(color)),
                Span::raw(" "),
            ]
        })
        .collect()
}

/// ページ表示
fn render_paginator(f: &mut Frame, area: Rect, model: &Model) {
    let pagination = model.page.pagination();
    let arrow = |enabled: bool, text: &'static str| {
        if enabled {
            Span::styled(text, Style::default().fg(Color::White))
        } else {
            Span::styled(text, Style::default().fg(Color::DarkGray))
        }
    };
    let mut spans = vec![
        arrow(pagination.previous_enabled(), "◀ "),
        Span::raw(model.page.page_indicator(model.locale)),
        arrow(pagination.next_enabled(), " ▶"),
    ];
    if !model.page_input.is_empty() {
        spans.push(Span::styled(
            format!("  {} {}_", tr(model.locale, MessageId::PageJumpPrompt), model.page_input),
            Style::default().fg(Color::Yellow),
        ));
    }
    let line = Line::from(spans);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// ヘルプ
fn render_help(f: &mut Frame, area: Rect, model: &Model) {
    let id = match model.page.modal().active() {
        ActiveModal::Detail(_) => MessageId::HelpDetail,
        ActiveModal::Publish(_) => MessageId::HelpForm,
        ActiveModal::None => match model.focus {
            Focus::Grid => MessageId::HelpGrid,
            Focus::Search => MessageId::HelpSearch,
            Focus::Toolbar { .. } => MessageId::HelpToolbar,
        },
    };
    let help = Paragraph::new(tr(model.locale, id)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// フィルタ選択ポップアップ
fn render_toolbar_popup(f: &mut Frame, model: &Model, mut state: ListState) {
    let locale = model.locale;
    let entries = toolbar_entries(&model.page);
    let height = (entries.len() as u16 + 2).min(f.area().height);
    let area = centered_rect(40, height, f.area());
    f.render_widget(Clear, area);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let (mark, style) = if entry.active {
                ("✕ ", Style::default().fg(Color::Cyan))
            } else {
                ("+ ", Style::default())
            };
            ListItem::new(Line::from(vec![
                Span::styled(mark, style),
                Span::styled(entry.filter.label(locale), style),
            ]))
        })
        .collect();

    let title = format!(
        " {} ({} ✕ / {} +) ",
        tr(locale, MessageId::ToolbarTitle),
        tr(locale, MessageId::ToolbarActive),
        tr(locale, MessageId::ToolbarAvailable),
    );
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut state);
}

/// 詳細ダイアログ
fn render_detail(f: &mut Frame, detail: &DetailView, locale: Locale) {
    let area = modal_rect(f.area());
    f.render_widget(Clear, area);

    let plugin = detail.record();
    let label = |id: MessageId| {
        Span::styled(
            format!("{}: ", tr(locale, id)),
            Style::default().fg(Color::DarkGray),
        )
    };
    let adapters = match &plugin.supported_adapters {
        Some(list) => list.join(", "),
        None => tr(locale, MessageId::DetailAllAdapters),
    };
    let (status, status_color) = match plugin.test_status() {
        TestStatus::Passed => (tr(locale, MessageId::TestPassed), Color::Green),
        TestStatus::Failed => (tr(locale, MessageId::TestFailed), Color::Red),
        TestStatus::Skipped => (tr(locale, MessageId::TestSkipped), Color::Yellow),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            plugin.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(plugin.desc.clone()),
        Line::raw(""),
        Line::from(vec![
            label(MessageId::DetailHomepage),
            Span::raw(plugin.homepage.clone().unwrap_or_else(|| "-".to_string())),
        ]),
        Line::from(vec![
            label(MessageId::DetailVersion),
            Span::raw(plugin.version.clone().unwrap_or_else(|| "-".to_string())),
        ]),
        Line::from(vec![
            label(MessageId::DetailType),
            Span::raw(plugin.plugin_type.clone().unwrap_or_else(|| "-".to_string())),
        ]),
        Line::from(vec![label(MessageId::DetailAdapters), Span::raw(adapters)]),
        Line::from(vec![
            label(MessageId::DetailTestStatus),
            Span::styled(status, Style::default().fg(status_color)),
        ]),
        Line::from(vec![
            label(MessageId::DetailUpdatedAt),
            Span::raw(plugin.display_time()),
        ]),
        Line::from(vec![
            label(MessageId::DetailPypi),
            Span::raw(plugin.pypi_url()),
        ]),
        Line::raw(""),
        Line::from(vec![
            label(MessageId::DetailInstall),
            Span::styled(plugin.install_command(), Style::default().fg(Color::Green)),
        ]),
        Line::raw(""),
    ];

    // 作者とタグはフィルタとして追加できる
    let mut links = vec![label(MessageId::DetailAuthor)];
    for (index, filter) in detail.links().iter().enumerate() {
        let style = if index == detail.selected_link() {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::Cyan)
        };
        links.push(Span::styled(format!(" {} ", filter.label(locale)), style));
        links.push(Span::raw(" "));
    }
    lines.push(Line::from(links));

    let dialog = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!(" {} ", tr(locale, MessageId::DetailTitle)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(dialog, area);
}

/// 公開フォームダイアログ
fn render_publish(f: &mut Frame, form: &PublishForm, locale: Locale) {
    let area = modal_rect(f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![Line::raw("")];
    if let Some(url) = form.submitted_url() {
        lines.push(Line::raw(format!("  {}", tr(locale, MessageId::FormSubmitted))));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", url),
            Style::default().fg(Color::Cyan),
        )));
    } else {
        for field in FormField::all() {
            let focused = *field == form.focus();
            let value_style = if focused {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let cursor = if focused { "|" } else { "" };
            lines.push(Line::from(vec![
                Span::raw(if focused { "> " } else { "  " }),
                Span::styled(
                    format!("{}: ", tr(locale, field.label_id())),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("{}{}", form.value(*field), cursor), value_style),
            ]));
        }
        if let Some(error) = form.error() {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                format!("  {}", error),
                Style::default().fg(Color::Red),
            )));
        }
    }

    let dialog = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!(" {} ", tr(locale, MessageId::PublishAction)))
            .borders(Borders::ALL),
    );
    f.render_widget(dialog, area);
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
