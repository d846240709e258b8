use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{info, list, publish};
use crate::config::ConfigOverrides;
use crate::i18n::Locale;

#[derive(Debug, Parser)]
#[command(name = "nbstore")]
#[command(about = "NoneBot Plugin Store CLI", long_about = None)]
pub struct Cli {
    /// Registry base URL (default: https://registry.nonebot.dev)
    #[arg(long, global = true)]
    pub registry: Option<String>,

    /// Display language
    #[arg(long, value_enum, global = true)]
    pub locale: Option<Locale>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to this file (browse only; default: ~/.nbstore/browse.log)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// 設定ファイル・環境変数より優先する値
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            registry_url: self.registry.clone(),
            locale: self.locale,
        }
    }

    /// 対話 UI を起動するか
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Command::Browse))
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the plugin store interactively
    Browse,

    /// List plugins from the registry
    List(list::Args),

    /// Show details of a plugin
    Info(info::Args),

    /// Validate a plugin and print its publication URL
    Publish(publish::Args),
}

