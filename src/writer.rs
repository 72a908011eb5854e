use anyhow::{Context, Result};
use log::{debug, warn};
use std::{fs, path::Path};

use crate::icon_data::{ICON_HEIGHT, ICON_WIDTH, decode_icon};

pub const ICON_PATH: &str = "assets/icons/app_icon.png";

/// 将嵌入的图标写入 `assets/icons/app_icon.png`.
///
/// `width` / `height` 不影响输出, 写入的始终是固定的 16x16 图标.
/// 目标目录不存在时返回错误, 不会自动创建.
pub fn write_png(width: u32, height: u32) -> Result<()> {
    write_png_to(ICON_PATH, width, height)
}

pub fn write_png_to(path: impl AsRef<Path>, width: u32, height: u32) -> Result<()> {
    let path = path.as_ref();
    debug!("write_png requested {width}x{height}");
    if (width, height) != (ICON_WIDTH, ICON_HEIGHT) {
        warn!(
            "requested size {width}x{height} is ignored, embedded icon is {ICON_WIDTH}x{ICON_HEIGHT}"
        );
    }

    let bytes = decode_icon()?;
    debug!("writing {} bytes to {}", bytes.len(), path.display());

    // 覆盖已有文件
    fs::write(path, &bytes).with_context(|| format!("failed to write icon to {}", path.display()))?;
    Ok(())
}
