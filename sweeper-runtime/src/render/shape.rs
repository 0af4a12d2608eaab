//! # Shape 模块
//!
//! 可提交给 [`Surface`](super::Surface) 的几何图元。
//!
//! 坐标约定与常见 2D 图形库一致：`position` 是 `origin` 在世界坐标中的落点，
//! `origin` 相对于图元包围盒左上角。

use super::{Color, Vec2};

/// 圆形（可填充 + 描边）
///
/// 描边从 `radius` 处向外扩展 `outline_thickness`。
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub position: Vec2,
    pub origin: Vec2,
    pub radius: f32,
    pub fill_color: Color,
    pub outline_color: Color,
    pub outline_thickness: f32,
}

impl CircleShape {
    pub fn new(radius: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            origin: Vec2::ZERO,
            radius,
            fill_color: Color::WHITE,
            outline_color: Color::WHITE,
            outline_thickness: 0.0,
        }
    }

    /// 圆心在世界坐标中的位置
    pub fn center(&self) -> Vec2 {
        self.position - self.origin + Vec2::splat(self.radius)
    }
}

/// 实心矩形
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub position: Vec2,
    pub origin: Vec2,
    pub size: Vec2,
    pub fill_color: Color,
}

impl RectShape {
    pub fn new(size: Vec2) -> Self {
        Self {
            position: Vec2::ZERO,
            origin: Vec2::ZERO,
            size,
            fill_color: Color::WHITE,
        }
    }

    /// 左上角在世界坐标中的位置
    pub fn top_left(&self) -> Vec2 {
        self.position - self.origin
    }
}

/// 图元
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(CircleShape),
    Rect(RectShape),
}
