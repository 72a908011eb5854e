use anyhow::{Context, Result};
use base64::{Engine, engine::general_purpose};

/// 嵌入图标声明的尺寸 (IHDR), 仅作参考, 程序不解析 PNG 结构
pub const ICON_WIDTH: u32 = 16;
pub const ICON_HEIGHT: u32 = 16;

pub const ICON_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAABAAAAAQCAYAAAAf8/9hAAAAEUlEQVR42mNkYPhfz8DAwMAANokBAAn8A23jF8xYAAAAAElFTkSuQmCC";

pub fn decode_icon() -> Result<Vec<u8>> {
    general_purpose::STANDARD
        .decode(ICON_PNG_BASE64)
        .context("failed to decode embedded icon payload")
}
