use crate::cli::{Cli, Command};
use crate::config::StoreConfig;
use crate::i18n::{tr, MessageId};
use crate::registry::{HttpRegistry, PluginRecord};
use crate::store::load_plugins;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub mod browse;
pub mod info;
pub mod list;
pub mod publish;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    let config = StoreConfig::load(&cli.overrides()).map_err(|e| e.to_string())?;

    match cli.command {
        None | Some(Command::Browse) => browse::run(&config).await,
        Some(Command::List(args)) => list::run(args, &config).await,
        Some(Command::Info(args)) => info::run(args, &config).await,
        Some(Command::Publish(args)) => publish::run(args, &config).await,
    }
}

/// 設定からレジストリクライアントを作成
pub fn registry(config: &StoreConfig) -> HttpRegistry {
    HttpRegistry::new(config.registry_url.clone(), &config.http())
}

/// スピナーを表示しながらプラグイン一覧を取得
pub async fn fetch_plugins(config: &StoreConfig) -> Result<Vec<PluginRecord>, String> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(tr(config.locale, MessageId::Loading));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = load_plugins(&registry(config)).await;

    pb.finish_and_clear();
    result.map_err(|e| e.to_string())
}
