//! 倒计时配置与表盘几何：参数校验、指针角度、刻度配色

use chrono::{Local, NaiveTime, Timelike};
use egui::{Color32, Pos2};

/// 默认倒计时时长（分钟）
pub const DEFAULT_INTERVAL: u32 = 15;

/// 表盘配色
pub mod palette {
    use egui::Color32;

    /// 尚未到起点的刻度：浅绿
    pub const TICK_FRESH: Color32 = Color32::from_rgb(0x7A, 0xFF, 0x71);
    /// 已经过的刻度：深绿
    pub const TICK_ELAPSED: Color32 = Color32::from_rgb(0x0A, 0x6D, 0x04);
    /// 预警与超时：红
    pub const ALERT: Color32 = Color32::from_rgb(255, 0, 0);
    /// 平时背景：浅灰
    pub const BACKGROUND: Color32 = Color32::from_rgb(0xC4, 0xC4, 0xC4);
    /// 时针与分针：绿
    pub const HAND: Color32 = Color32::from_rgb(0, 128, 0);
}

/// 倒计时配置，启动时构造一次后不再变更。
/// 时刻一律用「当日分钟数」表示（0..=1439）。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerConfig {
    /// 倒计时起点
    pub start: u32,
    /// 倒计时时长（分钟，1..=60）
    pub interval: u32,
}

impl TimerConfig {
    pub fn new(start: u32, interval: u32) -> Self {
        Self { start, interval }
    }

    /// 截止时刻。可能超过 1439，不做跨午夜回绕
    pub fn stop(&self) -> u32 {
        self.start + self.interval
    }

    /// 预警阈值：时长走过 80% 处
    pub fn alert(&self) -> f32 {
        self.start as f32 + self.interval as f32 * 0.8
    }

    /// 背景色：到达截止时刻后整个底色转红
    pub fn background(&self, minutes_of_day: u32) -> Color32 {
        if minutes_of_day >= self.stop() {
            palette::ALERT
        } else {
            palette::BACKGROUND
        }
    }

    /// 刻度配色：起点前浅绿，越过起点深绿，越过预警阈值转红。
    /// `position` 为该刻度对应的当日分钟数（含 0.1 分钟步进的小数部分）
    pub fn tick_color(&self, position: f32) -> Color32 {
        if position > self.alert() {
            palette::ALERT
        } else if position > self.start as f32 {
            palette::TICK_ELAPSED
        } else {
            palette::TICK_FRESH
        }
    }
}

/// 表盘坐标：0° 指向 12 点方向、顺时针增长（先减 90° 再转弧度），
/// 原点取表面中心 (size/2, size/2)
pub fn pointer(size: f32, angle_deg: f32, radius: f32) -> Pos2 {
    let a = (angle_deg - 90.0) * std::f32::consts::PI / 180.0;
    Pos2::new(size / 2.0 + a.cos() * radius, size / 2.0 + a.sin() * radius)
}

/// 分针角度：每分钟 6°
pub fn minute_angle(minute: u32) -> f32 {
    minute as f32 * 6.0
}

/// 时针角度：每小时 30°，加上分钟带来的连续偏移（每分钟 0.4°）
pub fn hour_angle(hour: u32, minute: u32) -> f32 {
    let hour12 = if hour > 12 { hour - 12 } else { hour };
    hour12 as f32 * 30.0 + minute as f32 * 0.4
}

/// 解析命令行 token，得到倒计时配置。
/// 非法或缺失的值一律回退默认并打日志，任何输入都不会让错误冒出去
pub fn validate<I, S>(args: I) -> TimerConfig
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    validate_at(args, Local::now().time())
}

/// 同 [`validate`]，但注入「当前时刻」，便于测试固定时间
pub fn validate_at<I, S>(args: I, now: NaiveTime) -> TimerConfig
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut start: Option<u32> = None;
    let mut interval: Option<u32> = None;

    for arg in args {
        let arg = arg.as_ref();
        if let Some(value) = arg.strip_prefix("now=") {
            if start.is_none() {
                match parse_start(value) {
                    Some((h, m)) => {
                        log::info!("Time status [ {}:{:02}:00 ]", h, m);
                        start = Some(h * 60 + m);
                    }
                    None => log::warn!("Time error, ignoring '{arg}'"),
                }
            }
        } else if let Some(value) = arg.strip_prefix("minutes=") {
            if interval.is_none() {
                match parse_interval(value) {
                    Some(n) => {
                        log::info!("Interval status [ {n} ]");
                        interval = Some(n);
                    }
                    None => log::warn!("Wrong interval value, ignoring '{arg}'"),
                }
            }
        }
        // 其余 token 静默忽略
    }

    let start = start.unwrap_or_else(|| {
        log::info!(
            "Current time [ {}:{:02}:{:02} ]",
            now.hour(),
            now.minute(),
            now.second()
        );
        now.hour() * 60 + now.minute()
    });
    let interval = interval.unwrap_or_else(|| {
        log::info!("Interval default [ {DEFAULT_INTERVAL} ]");
        DEFAULT_INTERVAL
    });

    TimerConfig::new(start, interval)
}

/// `H` 或 `H:M`，时在 0..=23、分在 0..=59，其余视为非法
fn parse_start(value: &str) -> Option<(u32, u32)> {
    let mut parts = value.splitn(2, ':');
    let hour: u32 = parts.next()?.trim().parse().ok()?;
    let minute: u32 = match parts.next() {
        Some(m) => m.trim().parse().ok()?,
        None => 0,
    };
    (hour <= 23 && minute <= 59).then_some((hour, minute))
}

/// 区间 (0, 60] 内的整数分钟数
fn parse_interval(value: &str) -> Option<u32> {
    let n: i64 = value.trim().parse().ok()?;
    (n > 0 && n <= 60).then_some(n as u32)
}

#[cfg(test)]
mod test {
    use super::*;

    fn at_8_30() -> NaiveTime {
        NaiveTime::from_hms_opt(8, 30, 0).unwrap()
    }

    #[test]
    fn empty_args_use_defaults() {
        let config = validate_at::<_, &str>([], at_8_30());
        assert_eq!(config.start, 8 * 60 + 30);
        assert_eq!(config.interval, DEFAULT_INTERVAL);
    }

    #[test]
    fn unknown_tokens_are_ignored() {
        let config = validate_at(["test", "--verbose", "minutes"], at_8_30());
        assert_eq!(config.start, 8 * 60 + 30);
        assert_eq!(config.interval, DEFAULT_INTERVAL);
    }

    #[test]
    fn valid_interval_is_kept() {
        for (token, expected) in [("minutes=1", 1), ("minutes=5", 5), ("minutes=60", 60)] {
            let config = validate_at([token], at_8_30());
            assert_eq!(config.interval, expected, "token {token}");
        }
    }

    #[test]
    fn malformed_interval_falls_back_to_default() {
        for token in ["minutes=-1", "minutes=0", "minutes=61", "minutes=70", "minutes=a5", "minutes="] {
            let config = validate_at([token], at_8_30());
            assert_eq!(config.interval, DEFAULT_INTERVAL, "token {token}");
        }
    }

    #[test]
    fn padded_interval_is_accepted() {
        let config = validate_at(["minutes= 5"], at_8_30());
        assert_eq!(config.interval, 5);
    }

    #[test]
    fn valid_start_is_kept() {
        let config = validate_at(["now=10:10", "minutes=5"], at_8_30());
        assert_eq!(config.start, 10 * 60 + 10);
        assert_eq!(config.interval, 5);
    }

    #[test]
    fn hour_only_start_means_minute_zero() {
        let config = validate_at(["now=16", "minutes=5"], at_8_30());
        assert_eq!(config.start, 16 * 60);

        let config = validate_at(["now=1", "minutes=5"], at_8_30());
        assert_eq!(config.start, 60);
    }

    #[test]
    fn malformed_start_falls_back_to_now() {
        for token in ["now=hour:minute", "now=24:10", "now=10:60", "now=-1:10", "now="] {
            let config = validate_at([token, "minutes=5"], at_8_30());
            assert_eq!(config.start, 8 * 60 + 30, "token {token}");
        }
    }

    #[test]
    fn first_valid_occurrence_wins() {
        let config = validate_at(["minutes=5", "minutes=10"], at_8_30());
        assert_eq!(config.interval, 5);

        // 非法的第一个 token 不占位，后面合法的仍然生效
        let config = validate_at(["minutes=99", "minutes=10"], at_8_30());
        assert_eq!(config.interval, 10);

        let config = validate_at(["now=25:00", "now=10:10"], at_8_30());
        assert_eq!(config.start, 10 * 60 + 10);
    }

    #[test]
    fn stop_and_alert_derive_from_interval() {
        let config = TimerConfig::new(600, 5);
        assert_eq!(config.stop(), 605);
        assert_eq!(config.alert(), 604.0);
    }

    #[test]
    fn background_turns_red_at_stop() {
        let config = TimerConfig::new(600, 5);
        assert_eq!(config.background(604), palette::BACKGROUND);
        assert_eq!(config.background(605), palette::ALERT);
        assert_eq!(config.background(700), palette::ALERT);
    }

    #[test]
    fn tick_color_boundaries() {
        // start=600, interval=10 → alert=608
        let config = TimerConfig::new(600, 10);
        assert_eq!(config.tick_color(599.9), palette::TICK_FRESH);
        assert_eq!(config.tick_color(600.0), palette::TICK_FRESH);
        assert_eq!(config.tick_color(600.1), palette::TICK_ELAPSED);
        assert_eq!(config.tick_color(608.0), palette::TICK_ELAPSED);
        assert_eq!(config.tick_color(608.1), palette::ALERT);
    }

    #[test]
    fn pointer_at_zero_degrees_points_straight_up() {
        let p = pointer(400.0, 0.0, 100.0);
        assert!((p.x - 200.0).abs() < 1e-3, "x = {}", p.x);
        assert!((p.y - 100.0).abs() < 1e-3, "y = {}", p.y);
    }

    #[test]
    fn pointer_stays_on_its_radius() {
        for angle in [0.0, 30.0, 45.0, 90.0, 137.5, 180.0, 270.0, 359.0] {
            let p = pointer(400.0, angle, 120.0);
            let d = ((p.x - 200.0).powi(2) + (p.y - 200.0).powi(2)).sqrt();
            assert!((d - 120.0).abs() < 1e-3, "angle {angle}: distance {d}");
        }
    }

    #[test]
    fn hand_angles() {
        assert_eq!(minute_angle(0), 0.0);
        assert_eq!(minute_angle(15), 90.0);
        assert_eq!(hour_angle(3, 0), 90.0);
        // 下午的钟点回绕到 12 小时制
        assert_eq!(hour_angle(15, 0), 90.0);
        assert_eq!(hour_angle(10, 10), 304.0);
    }
}
