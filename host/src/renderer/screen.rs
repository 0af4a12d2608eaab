//! # Screen 模块
//!
//! 整屏背景与单个格子贴图的绘制辅助。

use sweeper_runtime::{Color, Surface, Vec2};

use super::Canvas;
use crate::resources::{ResourceError, TextureCache};

/// 清屏为黑色并绘制整屏背景
///
/// 取图像左上角与画布同尺寸的区域，绘制在原点。
pub fn load_screen(
    canvas: &mut Canvas,
    textures: &mut TextureCache,
    path: &str,
) -> Result<(), ResourceError> {
    canvas.clear(Color::BLACK);
    let (width, height) = (canvas.width(), canvas.height());
    let texture = textures.region(path, width, height)?;
    canvas.draw_image(texture, Vec2::ZERO);
    Ok(())
}

/// 在 `(x, y)` 处绘制图像左上角 `width × height` 的区域
pub fn draw_tile(
    canvas: &mut Canvas,
    textures: &mut TextureCache,
    path: &str,
    width: u32,
    height: u32,
    x: f32,
    y: f32,
) -> Result<(), ResourceError> {
    let texture = textures.region(path, width, height)?;
    canvas.draw_image(texture, Vec2::new(x, y));
    Ok(())
}
