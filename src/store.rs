//! ストアページのビューモデル
//!
//! 描画層から独立した状態遷移モジュール群。
//! データフロー: 全件 → sort → filter → paginate → 描画
//!
//! - `loader`: レジストリ読み込み状態
//! - `sort`: 並び順
//! - `filter`: フィルタ述語
//! - `search`: 検索クエリとフィルタ集合
//! - `pagination`: ページ分割
//! - `modal`: ダイアログ状態
//! - `toolbar`: ツールバーのフィルタ候補
//! - `publish`: プラグイン公開フォーム
//! - `page`: 上記を束ねるページ状態

mod filter;
mod loader;
mod modal;
mod page;
mod pagination;
mod publish;
mod search;
mod sort;
mod toolbar;

pub use filter::Filter;
pub use loader::load_plugins;
pub use modal::{ActiveModal, DetailView};
pub use page::StorePage;
pub use pagination::PAGE_SIZE;
pub use publish::{split_tags, FormField, PublishForm, PublishRequest};
pub use sort::SortMode;
