//! nbstore info コマンド
//!
//! レジストリ上のプラグイン1件の詳細を表示する。

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::i18n::{tr, Locale, MessageId};
use crate::output;
use crate::registry::{PluginRecord, TestStatus};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
pub struct Args {
    /// Module name or PyPI project name of the plugin
    pub name: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args, config: &StoreConfig) -> Result<(), String> {
    let records = super::fetch_plugins(config).await?;
    let plugin = find_plugin(&records, &args.name)
        .ok_or_else(|| StoreError::PluginNotFound(args.name.clone()).to_string())?;

    if args.json {
        serde_json::to_string_pretty(plugin)
            .map(|json| println!("{json}"))
            .map_err(|e| format!("Failed to serialize plugin: {}", e))?;
    } else {
        println!("{}", render_table(plugin, config.locale));
        println!();
        let install = tr(config.locale, MessageId::DetailInstall);
        println!("{}", output::command_hint(&install, &plugin.install_command()));
    }

    Ok(())
}

/// module_name か project_link が一致するプラグインを探す
fn find_plugin<'a>(records: &'a [PluginRecord], name: &str) -> Option<&'a PluginRecord> {
    let name = name.trim();
    records
        .iter()
        .find(|p| p.module_name == name || p.project_link == name)
}

fn render_table(plugin: &PluginRecord, locale: Locale) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![tr(locale, MessageId::DetailTitle), plugin.name.clone()]);

    let or_dash = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    let adapters = match &plugin.supported_adapters {
        Some(list) => list.join(", "),
        None => tr(locale, MessageId::DetailAllAdapters),
    };
    let status = match plugin.test_status() {
        TestStatus::Passed => MessageId::TestPassed,
        TestStatus::Failed => MessageId::TestFailed,
        TestStatus::Skipped => MessageId::TestSkipped,
    };
    let tags = plugin
        .tags
        .iter()
        .map(|t| t.label.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let label = |id: MessageId| tr(locale, id);
    let rows = [
        ("Module".to_string(), plugin.module_name.clone()),
        ("Description".to_string(), plugin.desc.clone()),
        (label(MessageId::DetailAuthor), plugin.author.clone()),
        (label(MessageId::DetailHomepage), or_dash(&plugin.homepage)),
        (label(MessageId::DetailVersion), or_dash(&plugin.version)),
        (label(MessageId::DetailType), or_dash(&plugin.plugin_type)),
        (label(MessageId::DetailAdapters), adapters),
        ("Tags".to_string(), if tags.is_empty() { "-".to_string() } else { tags }),
        (label(MessageId::DetailTestStatus), label(status)),
        (label(MessageId::DetailUpdatedAt), plugin.display_time()),
        (label(MessageId::DetailPypi), plugin.pypi_url()),
    ];
    for (field, value) in rows {
        table.add_row(vec![field, value]);
    }
    table
}

#[cfg(test)]
#[path = "info_test.rs"]
mod info_test;
