//! NoneBot レジストリ
//!
//! - `plugin`: レジストリのレコード型
//! - `fetcher`: コレクション取得（HTTP）

mod fetcher;
mod plugin;

pub use fetcher::{HttpRegistry, RegistrySource};
pub use plugin::{PluginRecord, Tag, TestStatus};

/// レジストリのコレクション種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Plugin,
}

impl ResourceKind {
    /// コレクション名を返す
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Plugin => "plugin",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
pub mod mock;
