//! 描画処理の共通ユーティリティ

use ratatui::prelude::Rect;

/// 領域中央に指定サイズの矩形を配置（領域からはみ出さない）
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// 詳細・公開ダイアログの領域
pub fn modal_rect(area: Rect) -> Rect {
    let width = (area.width as u32 * 7 / 10) as u16;
    let height = (area.height as u32 * 8 / 10) as u16;
    centered_rect(width.max(40), height.max(12), area)
}
