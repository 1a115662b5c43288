//! Clock Timer 带倒计时刻度环的模拟表盘桌面小工具（Rust + egui）

mod app;
mod face;
mod timer;

use anyhow::{Result, anyhow};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Stdout)
        .init();

    // 参数校验只产生日志，永远给出合法配置
    let config = timer::validate(std::env::args().skip(1));

    // 底图缺失或非方形是致命错误，在开窗之前就退出
    let face = face::Face::load(face::FACE_PATH)?;
    let side = face.size as f32;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side, side])
            .with_resizable(false)
            .with_title("TIMER - Press ESC to exit.")
            .with_icon(egui::IconData::default()),
        ..Default::default()
    };
    eframe::run_native(
        "clock-timer",
        options,
        Box::new(move |cc| Ok(Box::new(app::ClockApp::new(cc, config, face)))),
    )
    .map_err(|e| anyhow!("eframe: {e}"))
}
