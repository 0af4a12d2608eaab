//! # ScreenFlash
//!
//! 覆盖整个视口的纯色闪屏。

use super::{Effect, FrameCounter};
use crate::render::{Color, RectShape, Shape, Surface, Vec2};

/// 闪屏
///
/// 持续期间始终以 `fill_color` 满幅填充，不做淡入淡出。
/// 几何信息在每次绘制时从当前视口重新计算，视口变化后仍能完整覆盖。
#[derive(Debug, Clone)]
pub struct ScreenFlash {
    fill_color: Color,
    counter: FrameCounter,
}

impl ScreenFlash {
    pub fn new(fill_color: Color, lifetime_seconds: f32) -> Self {
        Self {
            fill_color,
            counter: FrameCounter::from_seconds(lifetime_seconds),
        }
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn counter(&self) -> &FrameCounter {
        &self.counter
    }
}

impl Effect for ScreenFlash {
    fn update(&mut self, _delta_seconds: f32) -> bool {
        self.counter.advance()
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let view = surface.view();
        let mut rect = RectShape::new(view.size);
        rect.origin = Vec2::new(view.size.x * 0.5, view.size.y * 0.5);
        rect.position = view.center;
        rect.fill_color = self.fill_color;
        surface.draw_shape(&Shape::Rect(rect));
    }
}
