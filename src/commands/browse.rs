//! nbstore browse コマンド
//!
//! プラグインストアの TUI を起動する。サブコマンド省略時もこれを実行する。

use crate::config::StoreConfig;
use crate::registry::RegistrySource;
use crate::tui;
use std::sync::Arc;

pub async fn run(config: &StoreConfig) -> Result<(), String> {
    let source: Arc<dyn RegistrySource> = Arc::new(super::registry(config));
    let locale = config.locale;

    // 描画ループはスレッドをブロックする
    tokio::task::block_in_place(|| tui::store::run(source, locale)).map_err(|e| e.to_string())
}
