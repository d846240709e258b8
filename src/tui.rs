//! TUI (Terminal User Interface) コンポーネント
//!
//! ratatui/crossterm を使用したプラグインストア画面を提供する。

pub mod store;
