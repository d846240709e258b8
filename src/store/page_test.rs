use super::*;
use crate::error::StoreError;
use crate::registry::mock::{numbered, record};
use crate::registry::HttpRegistry;
use crate::config::HttpConfig;
use crate::store::loader::load_plugins;
use crate::store::modal::ActiveModal;

fn ready(records: Vec<PluginRecord>) -> StorePage {
    let mut page = StorePage::new();
    page.complete_load(Ok(records));
    page
}

fn modules(plugins: &[Arc<PluginRecord>]) -> Vec<&str> {
    plugins.iter().map(|p| p.module_name.as_str()).collect()
}

fn catalog() -> Vec<PluginRecord> {
    vec![
        record("old_chat", "alice", &["chat"], Some(1)),
        record("new_chat", "bob", &["chat"], Some(9)),
        record("weather", "alice", &["api"], Some(5)),
    ]
}

// ============================================================================
// 読み込み
// ============================================================================

#[test]
fn new_page_is_loading_with_one_empty_page() {
    let page = StorePage::new();
    assert!(page.is_loading());
    assert!(page.visible().is_empty());
    assert_eq!(page.pagination().total_pages(), 1);
}

#[test]
fn ready_page_shows_registry_order() {
    let page = ready(catalog());
    assert_eq!(modules(page.visible()), vec!["old_chat", "new_chat", "weather"]);
    assert_eq!(page.summary(Locale::ZhCn), "当前共有 3 个插件");
}

#[tokio::test]
async fn fetch_failure_shows_banner_and_single_page() {
    let registry = HttpRegistry::new("http://127.0.0.1:1", &HttpConfig::default());
    let mut page = StorePage::new();
    page.complete_load(load_plugins(&registry).await);

    let message = page.error().unwrap();
    assert!(message.starts_with("Network error"));
    assert!(page.visible().is_empty());
    assert_eq!(page.pagination().total_pages(), 1);
    assert!(!page.pagination().next_enabled());
    assert!(!page.pagination().previous_enabled());
}

#[test]
fn failed_page_ignores_later_results() {
    let mut page = StorePage::new();
    page.complete_load(Err(StoreError::Config("boom".to_string())));
    page.complete_load(Ok(numbered(3)));
    assert_eq!(page.plugin_count(), 0);
    assert!(page.error().is_some());
}

// ============================================================================
// 並び順と絞り込み
// ============================================================================

#[test]
fn sort_applies_before_filter() {
    let mut page = ready(catalog());
    page.add_filter(Filter::Tag("chat".to_string()));
    assert_eq!(modules(page.visible()), vec!["old_chat", "new_chat"]);

    page.toggle_sort();
    assert_eq!(page.sort_mode(), SortMode::UpdateDesc);
    assert_eq!(modules(page.visible()), vec!["new_chat", "old_chat"]);

    page.toggle_sort();
    assert_eq!(modules(page.visible()), vec!["old_chat", "new_chat"]);
}

#[test]
fn sorter_label_follows_mode() {
    let mut page = ready(catalog());
    assert_eq!(page.sorter_label(Locale::ZhCn), "默认顺序");
    page.toggle_sort();
    assert_eq!(page.sorter_label(Locale::ZhCn), "更新时间倒序");
}

#[test]
fn summary_switches_to_search_info_when_filtered() {
    let mut page = ready(catalog());
    page.add_filter(Filter::Author("alice".to_string()));
    assert_eq!(page.filtered_count(), 2);
    assert_eq!(page.summary(Locale::En), "2 / 3 plugins");
}

#[test]
fn duplicate_filter_is_not_counted_twice() {
    let mut page = ready(catalog());
    assert!(page.add_filter(Filter::Tag("chat".to_string())));
    assert!(!page.add_filter(Filter::Tag("chat".to_string())));
    assert_eq!(page.search().filters().len(), 1);
}

#[test]
fn live_query_filters_immediately() {
    let mut page = ready(catalog());
    page.set_query("w");
    page.set_query("we");
    assert_eq!(modules(page.visible()), vec!["weather"]);

    page.submit_query();
    assert_eq!(page.search().query(), "");
    assert_eq!(modules(page.visible()), vec!["weather"]);
}

#[test]
fn remove_tag_recomputes_visible_records() {
    let mut page = ready(catalog());
    page.add_filter(Filter::Author("alice".to_string()));
    page.set_query("chat");
    assert_eq!(modules(page.visible()), vec!["old_chat"]);

    // 最後のタグは入力中クエリ
    assert!(page.remove_tag(1));
    assert_eq!(page.search().query(), "");
    assert_eq!(page.filtered_count(), 2);

    assert!(page.remove_tag(0));
    assert_eq!(page.filtered_count(), 3);
    assert!(!page.remove_tag(0));
}

#[test]
fn backspace_on_empty_query_removes_most_recent_filter_only() {
    let mut page = ready(catalog());
    page.add_filter(Filter::Author("alice".to_string()));
    page.add_filter(Filter::Tag("api".to_string()));
    assert_eq!(page.filtered_count(), 1);

    page.backspace();
    assert_eq!(page.search().filters(), &[Filter::Author("alice".to_string())]);
    assert_eq!(page.filtered_count(), 2);

    page.backspace();
    page.backspace();
    assert_eq!(page.filtered_count(), 3);
}

#[test]
fn toggle_filter_adds_then_removes() {
    let mut page = ready(catalog());
    page.toggle_filter(Filter::Author("bob".to_string()));
    assert_eq!(page.filtered_count(), 1);
    page.toggle_filter(Filter::Author("bob".to_string()));
    assert_eq!(page.filtered_count(), 3);
}

#[test]
fn clear_search_restores_full_list() {
    let mut page = ready(catalog());
    page.add_filter(Filter::Official);
    page.set_query("zzz");
    assert_eq!(page.filtered_count(), 0);
    page.clear_search();
    assert_eq!(page.filtered_count(), 3);
}

#[test]
fn toolbar_is_derived_from_full_list() {
    let mut page = ready(catalog());
    page.add_filter(Filter::Author("bob".to_string()));
    assert!(page
        .toolbar_options()
        .contains(&Filter::Author("alice".to_string())));
}

// ============================================================================
// ページ移動
// ============================================================================

#[test]
fn thirteen_plugins_paginate_twelve_and_one() {
    let mut page = ready(numbered(13));
    assert_eq!(page.pagination().total_pages(), 2);
    assert_eq!(page.visible().len(), 12);
    assert_eq!(page.visible()[11].module_name, "plugin_11");

    page.next_page();
    assert_eq!(modules(page.visible()), vec!["plugin_12"]);
    assert_eq!(page.page_indicator(Locale::En), "Page 2 / 2");
}

#[test]
fn narrowing_filter_clamps_current_page() {
    let mut records = numbered(30);
    records[0].author = "solo".to_string();
    let mut page = ready(records);
    page.set_page(2);
    assert_eq!(page.pagination().current_page(), 2);

    page.add_filter(Filter::Author("solo".to_string()));
    assert_eq!(page.pagination().current_page(), 0);
    assert_eq!(modules(page.visible()), vec!["plugin_00"]);
}

// ============================================================================
// ダイアログ
// ============================================================================

#[test]
fn detail_keeps_snapshot_when_record_leaves_list() {
    let mut page = ready(catalog());
    assert!(page.open_detail_at(2));
    page.add_filter(Filter::Tag("chat".to_string()));
    assert!(!modules(page.visible()).contains(&"weather"));

    match page.modal().active() {
        ActiveModal::Detail(detail) => assert_eq!(detail.record().module_name, "weather"),
        other => panic!("Expected detail modal, got {:?}", other),
    }
}

#[test]
fn open_detail_out_of_range_is_rejected() {
    let mut page = ready(catalog());
    assert!(!page.open_detail_at(10));
    assert!(!page.modal().is_detail_open());
}

#[test]
fn detail_link_adds_filter_and_closes() {
    let mut page = ready(catalog());
    page.open_detail_at(0);
    page.modal_mut().detail_mut().unwrap().next_link();
    assert!(page.apply_detail_link());

    assert!(!page.modal().is_detail_open());
    assert_eq!(page.search().filters(), &[Filter::Tag("chat".to_string())]);
    assert_eq!(page.filtered_count(), 2);
}

#[test]
fn publish_dialog_opens_and_closes() {
    let mut page = ready(catalog());
    page.open_publish();
    assert!(page.modal().is_publish_open());
    page.close_publish();
    assert!(!page.modal().is_any_open());
}
