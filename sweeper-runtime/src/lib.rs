//! # Sweeper Runtime
//!
//! 扫雷类网格游戏的纯逻辑核心：网格扫描算法 + 帧驱动特效系统。
//!
//! ## 架构概述
//!
//! `sweeper-runtime` 不依赖任何 IO、窗口或音频设备。
//! 绘制与音频通过 trait 契约交给宿主层（Host）实现：
//!
//! ```text
//! Host (game loop)                       Runtime
//!   │                                       │
//!   │── flood_score / count_mines ────────►│ grid
//!   │── Effects::spawn(RingWave ...) ─────►│ effect
//!   │                                       │
//!   │   每帧:                               │
//!   │── Effects::update(dt) ──────────────►│ 推进 + 回收
//!   │── Effects::draw(&mut dyn Surface) ──►│ 提交图元
//!   │◄── Surface::draw_shape(..) ───────────│
//! ```
//!
//! ## 模块结构
//!
//! - [`grid`]：布尔网格与单层邻域扫描
//! - [`effect`]：特效接口、三种特效、特效管理器
//! - [`render`]：绘制契约（`Surface`、图元、颜色）
//! - [`audio`]：音频契约（`SoundLoader`、`Playback`）
//! - [`error`]：错误类型定义

pub mod audio;
pub mod effect;
pub mod error;
pub mod grid;
pub mod render;

// 重导出核心类型
pub use audio::{Playback, PlaybackStatus, SoundLoader};
pub use effect::{
    Effect, Effects, ExplosionSound, FRAMES_PER_SECOND, FrameCounter, RingWave, ScreenFlash,
    lifetime_to_frames,
};
pub use error::{AudioError, GridError, GridResult};
pub use grid::{Grid, SCORE_PER_CELL, count_mines, flood_demolition, flood_score, hint_map};
pub use render::{CircleShape, Color, RectShape, Shape, Surface, Vec2, View};
