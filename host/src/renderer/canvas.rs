//! # Canvas 模块
//!
//! 基于 `image::RgbaImage` 的软件渲染表面，实现 runtime 的 [`Surface`] 契约。
//!
//! ## 坐标映射
//!
//! 世界坐标经 [`View`] 映射到像素：视口左上角对齐像素 `(0, 0)`，
//! 视口尺寸拉伸到整个画布。默认视口与画布像素一一对应。

use image::{Rgba, RgbaImage};
use std::path::Path;
use sweeper_runtime::{CircleShape, Color, RectShape, Shape, Surface, Vec2, View};

use crate::resources::ResourceError;

/// 软件画布
pub struct Canvas {
    image: RgbaImage,
    view: View,
}

impl Canvas {
    /// 创建黑色画布，视口覆盖整个画布
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, to_rgba(Color::BLACK)),
            view: View::from_size(width as f32, height as f32),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// 替换视口
    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// 恢复为与像素一一对应的默认视口
    pub fn reset_view(&mut self) {
        self.view = View::from_size(self.width() as f32, self.height() as f32);
    }

    /// 读取像素；越界返回 `None`
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let Rgba([r, g, b, a]) = *self.image.get_pixel(x, y);
        Some(Color::rgba(r, g, b, a))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// 以原始尺寸绘制图像，左上角位于世界坐标 `position`
    pub fn draw_image(&mut self, source: &RgbaImage, position: Vec2) {
        let (ox, oy) = self.world_to_pixel(position);
        let (ox, oy) = (ox.round() as i64, oy.round() as i64);

        for (sx, sy, pixel) in source.enumerate_pixels() {
            let x = ox + sx as i64;
            let y = oy + sy as i64;
            if x < 0 || y < 0 {
                continue;
            }
            let Rgba([r, g, b, a]) = *pixel;
            self.blend(x as u32, y as u32, Color::rgba(r, g, b, a));
        }
    }

    /// 导出为 PNG
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), ResourceError> {
        let path = path.as_ref();
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| ResourceError::WriteFailed {
                path: path.to_string_lossy().to_string(),
                message: e.to_string(),
            })
    }

    // ========== 坐标映射 ==========

    fn scale(&self) -> (f32, f32) {
        (
            self.width() as f32 / self.view.size.x,
            self.height() as f32 / self.view.size.y,
        )
    }

    fn world_to_pixel(&self, point: Vec2) -> (f32, f32) {
        let (sx, sy) = self.scale();
        let left = self.view.center.x - self.view.size.x * 0.5;
        let top = self.view.center.y - self.view.size.y * 0.5;
        ((point.x - left) * sx, (point.y - top) * sy)
    }

    fn pixel_to_world(&self, x: u32, y: u32) -> Vec2 {
        let (sx, sy) = self.scale();
        let left = self.view.center.x - self.view.size.x * 0.5;
        let top = self.view.center.y - self.view.size.y * 0.5;
        // 取像素中心
        Vec2::new(left + (x as f32 + 0.5) / sx, top + (y as f32 + 0.5) / sy)
    }

    /// 世界坐标矩形 → 像素范围（半开区间，已裁剪到画布）
    fn pixel_span(&self, min: Vec2, max: Vec2) -> Option<(u32, u32, u32, u32)> {
        let (x0, y0) = self.world_to_pixel(min);
        let (x1, y1) = self.world_to_pixel(max);
        let clamp_x = |v: f32| v.round().clamp(0.0, self.width() as f32) as u32;
        let clamp_y = |v: f32| v.round().clamp(0.0, self.height() as f32) as u32;
        let span = (clamp_x(x0), clamp_y(y0), clamp_x(x1), clamp_y(y1));
        (span.0 < span.2 && span.1 < span.3).then_some(span)
    }

    // ========== 光栅化 ==========

    fn blend(&mut self, x: u32, y: u32, color: Color) {
        if color.is_transparent() || x >= self.width() || y >= self.height() {
            return;
        }
        let dst = self.image.get_pixel_mut(x, y);
        if color.a == 255 {
            *dst = to_rgba(color);
            return;
        }

        let alpha = color.a as f32 / 255.0;
        let mix = |src: u8, dst: u8| (src as f32 * alpha + dst as f32 * (1.0 - alpha)).round() as u8;
        let Rgba([r, g, b, a]) = *dst;
        *dst = Rgba([
            mix(color.r, r),
            mix(color.g, g),
            mix(color.b, b),
            (color.a as f32 + a as f32 * (1.0 - alpha)).round().min(255.0) as u8,
        ]);
    }

    fn fill_rect(&mut self, rect: &RectShape) {
        if rect.fill_color.is_transparent() {
            return;
        }
        let min = rect.top_left();
        let Some((x0, y0, x1, y1)) = self.pixel_span(min, min + rect.size) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, rect.fill_color);
            }
        }
    }

    fn draw_circle(&mut self, circle: &CircleShape) {
        let center = circle.center();
        let radius = circle.radius.max(0.0);
        let outer = radius + circle.outline_thickness.max(0.0);
        let reach = Vec2::splat(outer);
        let Some((x0, y0, x1, y1)) = self.pixel_span(center - reach, center + reach) else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                let p = self.pixel_to_world(x, y);
                let distance = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
                if distance <= radius {
                    self.blend(x, y, circle.fill_color);
                } else if distance <= outer {
                    self.blend(x, y, circle.outline_color);
                }
            }
        }
    }
}

impl Surface for Canvas {
    fn clear(&mut self, color: Color) {
        let pixel = to_rgba(color);
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    fn draw_shape(&mut self, shape: &Shape) {
        match shape {
            Shape::Rect(rect) => self.fill_rect(rect),
            Shape::Circle(circle) => self.draw_circle(circle),
        }
    }

    fn view(&self) -> View {
        self.view
    }
}

fn to_rgba(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, color.a])
}
