//! プラグインストア TUI
//!
//! レジストリの取得を tokio タスクで行い、結果をチャネル経由で `Msg::Loaded` として受け取る。
//!
//! ## モジュール構成
//!
//! - `app`: Model / Msg / update
//! - `view`: 画面描画
//! - `common`: レイアウト計算

mod app;
mod common;
mod view;

use crate::error::Result;
use crate::i18n::Locale;
use crate::registry::{PluginRecord, RegistrySource};
use crate::store::load_plugins;
use app::{update, Model, Msg};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{stdout, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// イベント待ちの間隔
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// TUI を実行
///
/// tokio ランタイム上のブロッキング可能なスレッドから呼び出す。
pub fn run(source: Arc<dyn RegistrySource>, locale: Locale) -> Result<()> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let result = load_plugins(source.as_ref()).await;
        // 受信側が先に終了していたら結果は捨てる
        let _ = tx.send(result);
    });

    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, Model::new(locale), rx);

    // ターミナルを復元
    terminal::disable_raw_mode()?;
    stdout().execute(DisableMouseCapture)?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut model: Model,
    mut rx: mpsc::UnboundedReceiver<Result<Vec<PluginRecord>>>,
) -> Result<()> {
    let mut area = Rect::default();

    // メインループ
    while !model.should_quit {
        terminal.draw(|f| {
            area = f.area();
            view::view(f, &model);
        })?;

        if let Ok(result) = rx.try_recv() {
            update(&mut model, Msg::Loaded(result));
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let msg = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => model.key_to_msg(key.code),
            Event::Mouse(mouse) => model.mouse_to_msg(mouse, area),
            _ => None,
        };
        if let Some(msg) = msg {
            update(&mut model, msg);
        }
    }

    Ok(())
}
