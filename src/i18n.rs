//! 表示文字列の国際化
//!
//! メッセージID と補間値から表示文字列を解決する純粋なルックアップ。

use crate::error::StoreError;
use std::str::FromStr;

/// 表示言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Locale {
    #[default]
    #[value(name = "zh-cn")]
    ZhCn,
    #[value(name = "en")]
    En,
}

impl FromStr for Locale {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "zh-cn" | "zh" | "zh-hans" => Ok(Locale::ZhCn),
            "en" | "en-us" => Ok(Locale::En),
            other => Err(StoreError::Config(format!("Unsupported locale: {}", other))),
        }
    }
}

/// メッセージID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageId {
    PluginInfo,
    PluginSearchInfo,
    SorterDefault,
    SorterUpdateDesc,
    LoadFailedTitle,
    Loading,
    NoMatch,
    PublishAction,
    DetailTitle,
    PageIndicator,
    FilterOfficial,
    FilterValid,
    FilterTag,
    FilterAuthor,
    ToolbarTitle,
    ToolbarActive,
    ToolbarAvailable,
    SearchPlaceholder,
    DetailAuthor,
    DetailHomepage,
    DetailVersion,
    DetailType,
    DetailAdapters,
    DetailAllAdapters,
    DetailTestStatus,
    TestPassed,
    TestFailed,
    TestSkipped,
    DetailUpdatedAt,
    DetailInstall,
    DetailPypi,
    FormName,
    FormPypi,
    FormModule,
    FormTags,
    FormSubmitted,
    HelpGrid,
    HelpSearch,
    HelpDetail,
    HelpForm,
    HelpToolbar,
    PageJumpPrompt,
}

impl MessageId {
    fn template(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::ZhCn => self.zh_cn(),
            Locale::En => self.en(),
        }
    }

    fn zh_cn(&self) -> &'static str {
        match self {
            MessageId::PluginInfo => "当前共有 {pluginCount} 个插件",
            MessageId::PluginSearchInfo => "当前共有 {filteredPluginCount} / {pluginCount} 个插件",
            MessageId::SorterDefault => "默认顺序",
            MessageId::SorterUpdateDesc => "更新时间倒序",
            MessageId::LoadFailedTitle => "加载失败",
            MessageId::Loading => "加载中...",
            MessageId::NoMatch => "没有找到匹配的插件",
            MessageId::PublishAction => "发布插件",
            MessageId::DetailTitle => "插件详情",
            MessageId::PageIndicator => "第 {current} / {total} 页",
            MessageId::FilterOfficial => "官方插件",
            MessageId::FilterValid => "测试通过",
            MessageId::FilterTag => "标签: {tag}",
            MessageId::FilterAuthor => "作者: {author}",
            MessageId::ToolbarTitle => "筛选",
            MessageId::ToolbarActive => "已启用",
            MessageId::ToolbarAvailable => "可添加",
            MessageId::SearchPlaceholder => "搜索插件",
            MessageId::DetailAuthor => "作者",
            MessageId::DetailHomepage => "主页",
            MessageId::DetailVersion => "版本",
            MessageId::DetailType => "类型",
            MessageId::DetailAdapters => "适配器",
            MessageId::DetailAllAdapters => "所有适配器",
            MessageId::DetailTestStatus => "测试状态",
            MessageId::TestPassed => "通过",
            MessageId::TestFailed => "未通过",
            MessageId::TestSkipped => "已跳过",
            MessageId::DetailUpdatedAt => "更新时间",
            MessageId::DetailInstall => "安装",
            MessageId::DetailPypi => "PyPI",
            MessageId::FormName => "插件名称",
            MessageId::FormPypi => "PyPI 项目名",
            MessageId::FormModule => "import 包名",
            MessageId::FormTags => "标签（逗号分隔）",
            MessageId::FormSubmitted => "请在浏览器中打开以下链接完成发布:",
            MessageId::HelpGrid => {
                " ←↑↓→: 选择 | Enter: 详情 | /: 搜索 | f: 筛选 | a: 作者 | s: 排序 | n/p: 翻页 | 0-9 Enter: 跳转 | P: 发布 | q: 退出"
            }
            MessageId::HelpSearch => {
                " Enter: 提交 | Backspace: 删除 | ←→: 选择标签 | Delete: 移除标签 | Esc: 清空 | ↓: 返回列表"
            }
            MessageId::HelpDetail => " ←→: 选择链接 | Enter: 添加筛选 | Esc: 关闭",
            MessageId::HelpForm => " Tab/↑↓: 切换字段 | Enter: 提交 | Esc: 关闭",
            MessageId::HelpToolbar => " ↑↓: 选择 | Enter: 添加/移除 | Esc: 关闭",
            MessageId::PageJumpPrompt => "跳转到",
        }
    }

    fn en(&self) -> &'static str {
        match self {
            MessageId::PluginInfo => "{pluginCount} plugins in total",
            MessageId::PluginSearchInfo => "{filteredPluginCount} / {pluginCount} plugins",
            MessageId::SorterDefault => "Default order",
            MessageId::SorterUpdateDesc => "Recently updated",
            MessageId::LoadFailedTitle => "Failed to load",
            MessageId::Loading => "Loading...",
            MessageId::NoMatch => "No plugins match",
            MessageId::PublishAction => "Publish plugin",
            MessageId::DetailTitle => "Plugin details",
            MessageId::PageIndicator => "Page {current} / {total}",
            MessageId::FilterOfficial => "Official",
            MessageId::FilterValid => "Tests passed",
            MessageId::FilterTag => "Tag: {tag}",
            MessageId::FilterAuthor => "Author: {author}",
            MessageId::ToolbarTitle => "Filters",
            MessageId::ToolbarActive => "Active",
            MessageId::ToolbarAvailable => "Available",
            MessageId::SearchPlaceholder => "Search plugins",
            MessageId::DetailAuthor => "Author",
            MessageId::DetailHomepage => "Homepage",
            MessageId::DetailVersion => "Version",
            MessageId::DetailType => "Type",
            MessageId::DetailAdapters => "Adapters",
            MessageId::DetailAllAdapters => "All adapters",
            MessageId::DetailTestStatus => "Test status",
            MessageId::TestPassed => "Passed",
            MessageId::TestFailed => "Failed",
            MessageId::TestSkipped => "Skipped",
            MessageId::DetailUpdatedAt => "Updated",
            MessageId::DetailInstall => "Install",
            MessageId::DetailPypi => "PyPI",
            MessageId::FormName => "Plugin name",
            MessageId::FormPypi => "PyPI project",
            MessageId::FormModule => "Import module",
            MessageId::FormTags => "Tags (comma separated)",
            MessageId::FormSubmitted => "Open this link in a browser to finish publishing:",
            MessageId::HelpGrid => {
                " ←↑↓→: select | Enter: details | /: search | f: filters | a: author | s: sort | n/p: page | 0-9 Enter: go to page | P: publish | q: quit"
            }
            MessageId::HelpSearch => {
                " Enter: submit | Backspace: delete | ←→: pick tag | Delete: remove tag | Esc: clear | ↓: back to list"
            }
            MessageId::HelpDetail => " ←→: pick link | Enter: add filter | Esc: close",
            MessageId::HelpForm => " Tab/↑↓: next field | Enter: submit | Esc: close",
            MessageId::HelpToolbar => " ↑↓: select | Enter: add/remove | Esc: close",
            MessageId::PageJumpPrompt => "Go to",
        }
    }
}

/// メッセージを解決し `{name}` プレースホルダを補間する
///
/// 未知のプレースホルダはそのまま残す。
pub fn translate(locale: Locale, id: MessageId, values: &[(&str, String)]) -> String {
    let mut text = id.template(locale).to_string();
    for (key, value) in values {
        text = text.replace(&format!("{{{}}}", key), value);
    }
    text
}

/// 補間値なしで解決
pub fn tr(locale: Locale, id: MessageId) -> String {
    translate(locale, id, &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_str() {
        assert_eq!("zh-CN".parse::<Locale>().unwrap(), Locale::ZhCn);
        assert_eq!("zh_cn".parse::<Locale>().unwrap(), Locale::ZhCn);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_translate_interpolates_values() {
        let text = translate(
            Locale::ZhCn,
            MessageId::PluginSearchInfo,
            &[
                ("pluginCount", "30".to_string()),
                ("filteredPluginCount", "4".to_string()),
            ],
        );
        assert_eq!(text, "当前共有 4 / 30 个插件");
    }

    #[test]
    fn test_translate_english() {
        let text = translate(Locale::En, MessageId::PluginInfo, &[("pluginCount", "7".to_string())]);
        assert_eq!(text, "7 plugins in total");
    }

    #[test]
    fn test_unknown_placeholder_is_left_verbatim() {
        let text = translate(Locale::En, MessageId::PageIndicator, &[("current", "2".to_string())]);
        assert_eq!(text, "Page 2 / {total}");
    }

    #[test]
    fn test_help_lists_page_number_jump() {
        assert!(tr(Locale::En, MessageId::HelpGrid).contains("0-9 Enter: go to page"));
        assert!(tr(Locale::ZhCn, MessageId::HelpGrid).contains("0-9 Enter: 跳转"));
    }
}
