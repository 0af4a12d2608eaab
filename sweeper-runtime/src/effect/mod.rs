//! # Effect 模块
//!
//! 帧驱动的一次性视觉/音频特效，以及持有它们的 [`Effects`] 管理器。
//!
//! ## 核心组件
//!
//! - [`Effect`]：特效接口（逐帧 `update` + 只读 `draw`）
//! - [`RingWave`]：从中心扩散的圆环
//! - [`ScreenFlash`]：覆盖整个视口的闪屏
//! - [`ExplosionSound`]：一次性爆炸音效
//! - [`Effects`]：按注册顺序更新/绘制，并自动回收已结束的特效
//!
//! ## 时长模型
//!
//! 时长按帧计数而非按时间积分：构造时把秒数按 [`FRAMES_PER_SECOND`] 换算成帧数，
//! 之后每次 `update` 固定前进一帧，传入的 `dt` 不参与进度计算。

mod explosion_sound;
mod manager;
mod ring_wave;
mod screen_flash;

pub use explosion_sound::{DEFAULT_EXPLOSION_VOLUME, ExplosionSound};
pub use manager::Effects;
pub use ring_wave::{RING_OUTLINE_THICKNESS, RingWave};
pub use screen_flash::ScreenFlash;

use std::any::Any;

use crate::render::Surface;

/// 秒数换算帧数时使用的固定帧率
pub const FRAMES_PER_SECOND: u32 = 60;

/// 秒数 → 帧数
///
/// `round(seconds * 60)`，最少 1 帧；非正数（以及 NaN）一律为 1 帧。
pub fn lifetime_to_frames(seconds: f32) -> u32 {
    if !(seconds > 0.0) {
        return 1;
    }
    let frames = (seconds * FRAMES_PER_SECOND as f32).round();
    // `as` 对超大值饱和
    (frames as u32).max(1)
}

/// 向下转型支持（供 [`Effects::spawn`] 返回具体类型引用）
pub trait AsAnyMut {
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAnyMut for T {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// 特效接口
pub trait Effect: AsAnyMut {
    /// 前进一帧
    ///
    /// `delta_seconds` 仅作为接口参数保留，不影响进度。
    ///
    /// # 返回
    ///
    /// - `true`：特效已结束，调用方应将其销毁
    /// - `false`：仍在进行中
    fn update(&mut self, delta_seconds: f32) -> bool;

    /// 绘制当前状态（可重复调用）
    fn draw(&self, surface: &mut dyn Surface);
}

/// 帧计数器
///
/// `lived` 从 0 单调递增到 `total`，到达 `total` 即结束。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCounter {
    lived: u32,
    total: u32,
}

impl FrameCounter {
    /// 指定总帧数（最少 1 帧）
    pub fn new(total: u32) -> Self {
        Self {
            lived: 0,
            total: total.max(1),
        }
    }

    /// 由秒数换算
    pub fn from_seconds(seconds: f32) -> Self {
        Self::new(lifetime_to_frames(seconds))
    }

    /// 前进一帧，返回是否已结束
    pub fn advance(&mut self) -> bool {
        if self.lived < self.total {
            self.lived += 1;
        }
        self.is_finished()
    }

    /// 当前进度（0.0 - 1.0）
    pub fn progress(&self) -> f32 {
        (self.lived as f32 / self.total as f32).clamp(0.0, 1.0)
    }

    pub fn lived(&self) -> u32 {
        self.lived
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_finished(&self) -> bool {
        self.lived >= self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_to_frames() {
        assert_eq!(lifetime_to_frames(1.0), 60);
        assert_eq!(lifetime_to_frames(0.5), 30);
        // 0.11 * 60 = 6.6 → 7
        assert_eq!(lifetime_to_frames(0.11), 7);
        // 0.1 * 60 = 6.000000x → 6
        assert_eq!(lifetime_to_frames(0.1), 6);
        // 不足半帧仍至少 1 帧
        assert_eq!(lifetime_to_frames(0.001), 1);
    }

    #[test]
    fn test_non_positive_lifetime_is_one_frame() {
        assert_eq!(lifetime_to_frames(0.0), 1);
        assert_eq!(lifetime_to_frames(-3.0), 1);
        assert_eq!(lifetime_to_frames(f32::NAN), 1);
    }

    #[test]
    fn test_frame_counter_finishes_exactly_at_total() {
        let mut counter = FrameCounter::new(3);
        assert_eq!(counter.progress(), 0.0);
        assert!(!counter.advance());
        assert!(!counter.advance());
        assert!(counter.advance());
        assert_eq!(counter.lived(), 3);
        assert_eq!(counter.progress(), 1.0);

        // 结束后不再增长
        assert!(counter.advance());
        assert_eq!(counter.lived(), 3);
    }

    #[test]
    fn test_frame_counter_minimum_one_frame() {
        let mut counter = FrameCounter::new(0);
        assert_eq!(counter.total(), 1);
        assert!(counter.advance());

        let mut counter = FrameCounter::from_seconds(-1.0);
        assert!(counter.advance());
    }
}
