//! 非対話コマンドの装飾付き出力

use owo_colors::OwoColorize;

/// 件数とページ表示の行
pub fn summary_line(summary: &str, page_indicator: &str) -> String {
    format!("{}  {}", summary.bold(), page_indicator.dimmed())
}

/// 結果なしなどの通知
pub fn notice(message: &str) -> String {
    format!("{} {}", "•".yellow(), message)
}

pub fn success(message: &str) -> String {
    format!("{} {}", "✓".green(), message)
}

/// 失敗の表示（main のエラー出力）
pub fn failure(message: &str) -> String {
    format!("{} {}", "✗".red(), message)
}

/// 実行できるコマンドの案内
pub fn command_hint(label: &str, command: &str) -> String {
    format!("{}: {}", label, command.cyan())
}
