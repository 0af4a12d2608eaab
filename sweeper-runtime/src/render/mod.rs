//! # Render 模块
//!
//! 特效与宿主绘制层之间的契约。
//!
//! Runtime 不持有任何窗口或纹理，特效只通过 [`Surface`] 提交图元；
//! 具体的光栅化由 Host 层实现（见 `sweeper-host` 的 `Canvas`）。

mod color;
mod shape;

pub use color::{Color, Vec2};
pub use shape::{CircleShape, RectShape, Shape};

/// 当前视口
///
/// `size` 与 `center` 均为世界坐标。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub center: Vec2,
    pub size: Vec2,
}

impl View {
    /// 以左上角为原点、覆盖 `width × height` 的视口
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            center: Vec2::new(width * 0.5, height * 0.5),
            size: Vec2::new(width, height),
        }
    }
}

/// 可绘制表面
pub trait Surface {
    /// 以指定颜色清屏
    fn clear(&mut self, color: Color);

    /// 绘制一个图元
    fn draw_shape(&mut self, shape: &Shape);

    /// 当前视口（每次绘制时查询，不应被缓存）
    fn view(&self) -> View;
}

/// 记录所有绘制调用的表面（测试用）
#[cfg(test)]
pub(crate) struct RecordingSurface {
    pub view: View,
    pub shapes: Vec<Shape>,
    pub clears: Vec<Color>,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            view: View::from_size(width, height),
            shapes: Vec::new(),
            clears: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.clears.push(color);
    }

    fn draw_shape(&mut self, shape: &Shape) {
        self.shapes.push(shape.clone());
    }

    fn view(&self) -> View {
        self.view
    }
}
