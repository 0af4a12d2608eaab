//! # RingWave
//!
//! 从固定中心向外（或向内）扩散的描边圆环。

use super::{Effect, FrameCounter};
use crate::render::{CircleShape, Color, Shape, Surface, Vec2};

/// 圆环描边宽度
pub const RING_OUTLINE_THICKNESS: f32 = 6.0;

/// 扩散圆环
///
/// 半径在 `start_radius → end_radius` 间按帧线性插值；
/// 每帧把 origin 重设为 `(radius, radius)`，使圆心始终停在 `center`。
#[derive(Debug, Clone)]
pub struct RingWave {
    start_radius: f32,
    end_radius: f32,
    counter: FrameCounter,
    shape: CircleShape,
}

impl RingWave {
    /// 创建圆环
    ///
    /// # 参数
    ///
    /// - `center`: 圆心（世界坐标）
    /// - `start_radius` / `end_radius`: 起止半径
    /// - `lifetime_seconds`: 持续时间（秒），按 60 帧/秒换算
    /// - `outline_color`: 描边颜色
    pub fn new(
        center: Vec2,
        start_radius: f32,
        end_radius: f32,
        lifetime_seconds: f32,
        outline_color: Color,
    ) -> Self {
        let mut shape = CircleShape::new(start_radius);
        shape.fill_color = Color::TRANSPARENT;
        shape.outline_thickness = RING_OUTLINE_THICKNESS;
        shape.outline_color = outline_color;
        shape.position = center;
        shape.origin = Vec2::splat(start_radius);

        Self {
            start_radius,
            end_radius,
            counter: FrameCounter::from_seconds(lifetime_seconds),
            shape,
        }
    }

    /// 指定进度下的半径
    pub fn radius_at(&self, progress: f32) -> f32 {
        let progress = progress.clamp(0.0, 1.0);
        self.start_radius + (self.end_radius - self.start_radius) * progress
    }

    /// 当前半径
    pub fn radius(&self) -> f32 {
        self.shape.radius
    }

    /// 圆心
    pub fn center(&self) -> Vec2 {
        self.shape.center()
    }

    /// 修改描边颜色
    pub fn set_outline_color(&mut self, color: Color) {
        self.shape.outline_color = color;
    }

    pub fn counter(&self) -> &FrameCounter {
        &self.counter
    }
}

impl Effect for RingWave {
    fn update(&mut self, _delta_seconds: f32) -> bool {
        // 先按当前帧设置半径，再推进计数
        let radius = self.radius_at(self.counter.progress());
        self.shape.radius = radius;
        self.shape.origin = Vec2::splat(radius);

        self.counter.advance()
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_shape(&Shape::Circle(self.shape.clone()));
    }
}
