//! 表盘底图加载：解码 PNG、校验方形、转成 egui 像素数据

use std::path::Path;

use anyhow::{Context, Result, bail};
use egui::ColorImage;

/// 表盘底图的固定相对路径
pub const FACE_PATH: &str = "images/clock.png";

/// 已解码的方形表盘底图
#[derive(Debug)]
pub struct Face {
    /// 边长（像素），同时决定窗口尺寸
    pub size: u32,
    pub image: ColorImage,
}

impl Face {
    /// 读取并解码底图。文件缺失、解码失败或非方形都是致命错误，
    /// 由调用方带着诊断信息退出进程
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path)
            .with_context(|| format!("failed to load clock face '{}'", path.display()))?
            .into_rgba8();
        let (width, height) = decoded.dimensions();
        if width != height {
            bail!(
                "clock face '{}' must be square, got {}x{}",
                path.display(),
                width,
                height
            );
        }
        let image =
            ColorImage::from_rgba_unmultiplied([width as usize, height as usize], decoded.as_raw());
        Ok(Self { size: width, image })
    }
}
