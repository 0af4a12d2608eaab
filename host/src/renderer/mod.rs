//! # Renderer 模块
//!
//! 宿主侧渲染：软件画布 + 背景/格子贴图辅助。
//!
//! ## 渲染层顺序
//!
//! 1. 背景层（`load_screen`）
//! 2. 格子层（`draw_tile`，缺图时退化为纯色方块）
//! 3. 特效层（`Effects::draw`）

mod canvas;
mod screen;

pub use canvas::Canvas;
pub use screen::{draw_tile, load_screen};
