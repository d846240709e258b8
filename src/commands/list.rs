//! nbstore list コマンド
//!
//! レジストリのプラグイン一覧を、ストア画面と同じ並び順・絞り込み・ページ分割で表示する。

use crate::config::StoreConfig;
use crate::i18n::{tr, Locale, MessageId};
use crate::output;
use crate::registry::PluginRecord;
use crate::store::{Filter, SortMode, StorePage};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use std::sync::Arc;

#[derive(Debug, Parser)]
pub struct Args {
    /// Text query (matches name, description, author, module, PyPI project and tags)
    #[arg(long, short = 'q')]
    pub query: Vec<String>,

    /// Filter by tag label
    #[arg(long)]
    pub tag: Vec<String>,

    /// Filter by author
    #[arg(long)]
    pub author: Vec<String>,

    /// Show only official plugins
    #[arg(long)]
    pub official: bool,

    /// Show only plugins whose tests passed
    #[arg(long)]
    pub valid: bool,

    /// Sort order
    #[arg(long, value_enum, default_value = "default")]
    pub sort: SortMode,

    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// 引数をフィルタ列に変換（重複は StorePage 側で除かれる）
    fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if self.official {
            filters.push(Filter::Official);
        }
        if self.valid {
            filters.push(Filter::Valid);
        }
        filters.extend(self.tag.iter().map(|t| Filter::Tag(t.clone())));
        filters.extend(self.author.iter().map(|a| Filter::Author(a.clone())));
        filters.extend(
            self.query
                .iter()
                .map(|q| q.trim())
                .filter(|q| !q.is_empty())
                .map(|q| Filter::Query(q.to_string())),
        );
        filters
    }
}

pub async fn run(args: Args, config: &StoreConfig) -> Result<(), String> {
    let records = super::fetch_plugins(config).await?;
    let page = build_page(records, &args);

    if args.json {
        print_json(page.visible())?;
    } else {
        print_table(&page, config.locale);
    }

    Ok(())
}

/// 取得結果と引数からページ状態を作る
fn build_page(records: Vec<PluginRecord>, args: &Args) -> StorePage {
    let mut page = StorePage::new();
    page.complete_load(Ok(records));
    page.set_sort_mode(args.sort);
    for filter in args.filters() {
        page.add_filter(filter);
    }
    page.set_page(args.page.saturating_sub(1));
    page
}

fn print_json(plugins: &[Arc<PluginRecord>]) -> Result<(), String> {
    let records: Vec<&PluginRecord> = plugins.iter().map(|p| p.as_ref()).collect();
    serde_json::to_string_pretty(&records)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize plugins: {}", e))
}

fn print_table(page: &StorePage, locale: Locale) {
    if page.visible().is_empty() {
        println!("{}", output::notice(&tr(locale, MessageId::NoMatch)));
    } else {
        println!("{}", render_table(page.visible()));
    }
    println!(
        "{}",
        output::summary_line(&page.summary(locale), &page.page_indicator(locale))
    );
}

fn render_table(plugins: &[Arc<PluginRecord>]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Module", "Author", "Tags", "Updated", "Official"]);

    for plugin in plugins {
        table.add_row(vec![
            plugin.name.clone(),
            plugin.module_name.clone(),
            plugin.author.clone(),
            format_tags(plugin),
            plugin.display_time(),
            if plugin.is_official { "✓" } else { "" }.to_string(),
        ]);
    }
    table
}

/// タグをカンマ区切りに
fn format_tags(plugin: &PluginRecord) -> String {
    if plugin.tags.is_empty() {
        return "-".to_string();
    }
    plugin
        .tags
        .iter()
        .map(|t| t.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;
