//! tracing の初期化
//!
//! `RUST_LOG` があればそれを優先し、なければ `--verbose` で debug、通常は warn。
//! TUI 実行中は代替画面を崩さないようファイルへ出力する。

use crate::config::env_var;
use crate::error::{Result, StoreError};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// ログの出力先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// browse 用のデフォルトログファイル（~/.nbstore/browse.log）
pub fn default_log_file() -> Option<PathBuf> {
    env_var("HOME").map(|home| PathBuf::from(home).join(".nbstore").join("browse.log"))
}

/// 出力レベルのフィルタ
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    })
}

/// サブスクライバを登録
pub fn init(verbose: bool, target: LogTarget) -> Result<()> {
    let filter = build_filter(verbose);

    let (stderr_layer, file_layer) = match target {
        LogTarget::Stderr => (
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            ),
            None,
        ),
        LogTarget::File(path) => {
            let file = open_log_file(&path)?;
            (
                None,
                Some(
                    fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                ),
            )
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| StoreError::Config(format!("failed to initialize logging: {}", e)))
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}
