use anyhow::Result;
use log::info;

use app_icon::writer::{ICON_PATH, write_png};

fn main() -> Result<()> {
    env_logger::init();

    write_png(16, 16)?;
    info!("icon written to {ICON_PATH}");

    Ok(())
}
