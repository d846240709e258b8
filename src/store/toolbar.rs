//! ツールバーのフィルタ候補
//!
//! 絞り込み前の全件から候補を作る。

use super::filter::Filter;
use crate::registry::PluginRecord;
use std::collections::HashMap;
use std::sync::Arc;

/// フィルタ候補を列挙
///
/// Official → Valid → タグ → 作者。タグと作者は出現数の降順、同数は名前順。
pub fn toolbar_options(plugins: &[Arc<PluginRecord>]) -> Vec<Filter> {
    let mut tag_counts: HashMap<&str, usize> = HashMap::new();
    let mut author_counts: HashMap<&str, usize> = HashMap::new();

    for plugin in plugins {
        for tag in &plugin.tags {
            *tag_counts.entry(tag.label.as_str()).or_default() += 1;
        }
        if !plugin.author.is_empty() {
            *author_counts.entry(plugin.author.as_str()).or_default() += 1;
        }
    }

    let mut options = vec![Filter::Official, Filter::Valid];
    options.extend(
        by_frequency(tag_counts)
            .into_iter()
            .map(|t| Filter::Tag(t.to_string())),
    );
    options.extend(
        by_frequency(author_counts)
            .into_iter()
            .map(|a| Filter::Author(a.to_string())),
    );
    options
}

fn by_frequency(counts: HashMap<&str, usize>) -> Vec<&str> {
    let mut entries: Vec<(&str, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries.into_iter().map(|(name, _)| name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::mock::record;

    #[test]
    fn empty_list_has_only_toggles() {
        assert_eq!(toolbar_options(&[]), vec![Filter::Official, Filter::Valid]);
    }

    #[test]
    fn tags_and_authors_ordered_by_frequency_then_name() {
        let plugins = vec![
            Arc::new(record("a", "zed", &["chat", "api"], None)),
            Arc::new(record("b", "amy", &["api"], None)),
            Arc::new(record("c", "zed", &["game"], None)),
        ];
        assert_eq!(
            toolbar_options(&plugins),
            vec![
                Filter::Official,
                Filter::Valid,
                Filter::Tag("api".to_string()),
                Filter::Tag("chat".to_string()),
                Filter::Tag("game".to_string()),
                Filter::Author("zed".to_string()),
                Filter::Author("amy".to_string()),
            ]
        );
    }

    #[test]
    fn empty_author_is_skipped() {
        let plugins = vec![Arc::new(record("a", "", &[], None))];
        assert_eq!(toolbar_options(&plugins).len(), 2);
    }
}
