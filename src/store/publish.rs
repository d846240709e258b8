//! プラグイン公開フォーム
//!
//! 入力を検証し、公開用 issue の URL を組み立てる。ネットワーク通信はしない。

use crate::error::{Result, StoreError};
use crate::i18n::MessageId;
use crate::registry::Tag;
use regex::Regex;
use reqwest::Url;

/// 公開 issue の作成先
pub const PUBLISH_ISSUE_URL: &str = "https://github.com/nonebot/nonebot2/issues/new";

/// issue テンプレート名
pub const PUBLISH_TEMPLATE: &str = "plugin_publish.yml";

const MAX_TAGS: usize = 3;
const MAX_TAG_LEN: usize = 10;

const PYPI_PATTERN: &str = r"^[A-Za-z0-9]([A-Za-z0-9._-]*[A-Za-z0-9])?$";
const MODULE_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

const TAG_PALETTE: [&str; 6] = [
    "#ea5252", "#ef9c4d", "#e9c258", "#52b6ea", "#aeeaa8", "#b05fea",
];

/// フォームの入力欄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Pypi,
    Module,
    Tags,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Name,
            FormField::Pypi,
            FormField::Module,
            FormField::Tags,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            FormField::Name => 0,
            FormField::Pypi => 1,
            FormField::Module => 2,
            FormField::Tags => 3,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => FormField::Name,
            1 => FormField::Pypi,
            2 => FormField::Module,
            _ => FormField::Tags,
        }
    }

    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Self {
        Self::from_index(self.index() + 3)
    }

    pub fn label_id(&self) -> MessageId {
        match self {
            FormField::Name => MessageId::FormName,
            FormField::Pypi => MessageId::FormPypi,
            FormField::Module => MessageId::FormModule,
            FormField::Tags => MessageId::FormTags,
        }
    }
}

/// 検証済みの公開リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub name: String,
    pub pypi: String,
    pub module: String,
    pub tags: Vec<Tag>,
}

impl PublishRequest {
    /// 入力値を検証して作成
    pub fn new(name: &str, pypi: &str, module: &str, tags: &[String]) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidForm("plugin name is required".to_string()));
        }

        let pypi = pypi.trim();
        if !matches_pattern(PYPI_PATTERN, pypi)? {
            return Err(StoreError::InvalidForm(format!(
                "invalid PyPI project name: '{}'",
                pypi
            )));
        }

        let module = module.trim();
        if !matches_pattern(MODULE_PATTERN, module)? {
            return Err(StoreError::InvalidForm(format!(
                "invalid module name: '{}'",
                module
            )));
        }

        let labels: Vec<&str> = tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        if labels.len() > MAX_TAGS {
            return Err(StoreError::InvalidForm(format!(
                "at most {} tags are allowed",
                MAX_TAGS
            )));
        }
        if let Some(long) = labels.iter().find(|t| t.chars().count() > MAX_TAG_LEN) {
            return Err(StoreError::InvalidForm(format!(
                "tag '{}' is longer than {} characters",
                long, MAX_TAG_LEN
            )));
        }

        Ok(Self {
            name: name.to_string(),
            pypi: pypi.to_string(),
            module: module.to_string(),
            tags: labels
                .into_iter()
                .map(|label| Tag {
                    label: label.to_string(),
                    color: tag_color(label).to_string(),
                })
                .collect(),
        })
    }

    /// 公開 issue の URL
    pub fn issue_url(&self) -> Result<String> {
        let tags = serde_json::to_string(&self.tags)?;
        let title = format!("Plugin: {}", self.name);
        let url = Url::parse_with_params(
            PUBLISH_ISSUE_URL,
            &[
                ("template", PUBLISH_TEMPLATE),
                ("title", title.as_str()),
                ("labels", "Plugin"),
                ("pypi", self.pypi.as_str()),
                ("module", self.module.as_str()),
                ("tags", tags.as_str()),
            ],
        )
        .map_err(|e| StoreError::InvalidForm(e.to_string()))?;
        Ok(url.to_string())
    }
}

fn matches_pattern(pattern: &str, value: &str) -> Result<bool> {
    let re = Regex::new(pattern).map_err(|e| StoreError::InvalidForm(e.to_string()))?;
    Ok(re.is_match(value))
}

/// ラベルから決まる表示色
fn tag_color(label: &str) -> &'static str {
    let sum: usize = label.bytes().map(usize::from).sum();
    TAG_PALETTE[sum % TAG_PALETTE.len()]
}

/// カンマ区切りのタグ入力を分割
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split([',', '，'])
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// 公開フォームの入力状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishForm {
    pub name: String,
    pub pypi: String,
    pub module: String,
    pub tags: String,
    focus: FormField,
    submitted_url: Option<String>,
    error: Option<String>,
}

impl PublishForm {
    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Pypi => &self.pypi,
            FormField::Module => &self.module,
            FormField::Tags => &self.tags,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Pypi => &mut self.pypi,
            FormField::Module => &mut self.module,
            FormField::Tags => &mut self.tags,
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.error = None;
        let focus = self.focus;
        self.value_mut(focus).push(c);
    }

    pub fn backspace(&mut self) {
        self.error = None;
        let focus = self.focus;
        self.value_mut(focus).pop();
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn previous_field(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn submitted_url(&self) -> Option<&str> {
        self.submitted_url.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn to_request(&self) -> Result<PublishRequest> {
        PublishRequest::new(&self.name, &self.pypi, &self.module, &split_tags(&self.tags))
    }

    /// 検証して URL かエラーメッセージを保持する
    pub fn submit(&mut self) -> bool {
        match self.to_request().and_then(|r| r.issue_url()) {
            Ok(url) => {
                tracing::info!(%url, "publish url generated");
                self.submitted_url = Some(url);
                self.error = None;
                true
            }
            Err(e) => {
                self.submitted_url = None;
                self.error = Some(e.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "publish_test.rs"]
mod publish_test;
