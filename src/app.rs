//! egui 主界面：表盘绘制与每 10 秒一次的重绘调度

use std::time::Duration;

use chrono::{Local, Timelike};
use eframe::egui;

use crate::face::Face;
use crate::timer::{self, TimerConfig, palette};

/// 两次重绘之间的间隔
const REDRAW_EVERY: Duration = Duration::from_secs(10);

/// 指针与刻度的线宽
const STROKE_WIDTH: f32 = 5.0;

pub struct ClockApp {
    config: TimerConfig,
    /// 表盘边长（逻辑像素），等于底图边长
    size: f32,
    face: egui::TextureHandle,
}

impl ClockApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: TimerConfig, face: Face) -> Self {
        let texture =
            cc.egui_ctx
                .load_texture("clock-face", face.image, egui::TextureOptions::LINEAR);
        log::info!("Timer activated ...");
        log::info!("Use Esc to exit the application ...");
        Self {
            config,
            size: face.size as f32,
            face: texture,
        }
    }

    /// 画一帧：背景、底图、两根指针、倒计时刻度环
    fn render(&self, painter: &egui::Painter, rect: egui::Rect) {
        let now = Local::now();
        let minute = now.minute();
        let minutes_of_day = now.hour() * 60 + minute;
        let size = self.size;
        let to_screen = |p: egui::Pos2| rect.min + p.to_vec2();

        // 背景：到达截止时刻后整体转红
        painter.rect_filled(
            rect,
            egui::CornerRadius::ZERO,
            self.config.background(minutes_of_day),
        );

        // 表盘底图，铺满整个表面，画在指针下面
        painter.image(
            self.face.id(),
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        // 指针
        let center = to_screen(egui::pos2(size / 2.0, size / 2.0));
        let hand = egui::Stroke::new(STROKE_WIDTH, palette::HAND);
        painter.line_segment(
            [
                center,
                to_screen(timer::pointer(size, timer::minute_angle(minute), size / 3.0)),
            ],
            hand,
        );
        painter.line_segment(
            [
                center,
                to_screen(timer::pointer(
                    size,
                    timer::hour_angle(now.hour(), minute),
                    size / 4.0,
                )),
            ],
            hand,
        );

        // 倒计时刻度环：每 0.1 分钟一格，画到截止时刻为止
        let stop = self.config.stop() as f32;
        let mut i = 0.0_f32;
        while minutes_of_day as f32 + i < stop {
            i += 0.1;
            let angle = (minute as f32 + i) * 6.0;
            let outer = to_screen(timer::pointer(size, angle, size / 2.0 - 5.0));
            let inner = to_screen(timer::pointer(size, angle, size / 2.0 - 20.0));
            let color = self.config.tick_color(minutes_of_day as f32 + i);
            painter.line_segment([outer, inner], egui::Stroke::new(STROKE_WIDTH, color));
        }
    }
}

impl eframe::App for ClockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Esc 作为显式的关闭请求，走 eframe 正常退出路径
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect =
                    egui::Rect::from_min_size(ui.max_rect().min, egui::vec2(self.size, self.size));
                self.render(ui.painter(), rect);
            });

        // 下一帧在这里显式调度；窗口一关闭调度就随之消失，没有后台线程
        ctx.request_repaint_after(REDRAW_EVERY);
    }
}
