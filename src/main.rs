mod cli;
mod commands;
mod config;
mod error;
mod i18n;
mod logging;
mod output;
mod registry;
mod store;
mod tui;

use clap::Parser;
use logging::LogTarget;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // 対話 UI では代替画面を崩さないようファイルに出す（出力先がなければ無効）
    let target = if cli.is_interactive() {
        cli.log_file
            .clone()
            .or_else(logging::default_log_file)
            .map(LogTarget::File)
    } else {
        Some(LogTarget::Stderr)
    };
    if let Some(target) = target {
        if let Err(err) = logging::init(cli.verbose, target) {
            eprintln!("{}", output::failure(&err.to_string()));
        }
    }

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{}", output::failure(&err));
        std::process::exit(1);
    }
}
