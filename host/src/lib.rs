//! # Host 层
//!
//! 扫雷特效引擎的宿主层实现：软件画布渲染、rodio 音频、配置与棋盘操作。
//!
//! ## 架构说明
//!
//! Host 层负责：
//! - 画布渲染与 PNG 导出
//! - 贴图加载与缓存
//! - 音频播放
//! - 将棋盘操作（翻开/爆破）转换为特效
//!
//! 特效的生命周期与扫描算法都在 `sweeper-runtime` 中，Host 层只提供 IO 实现。

pub mod app;
pub mod audio;
pub mod board;
pub mod config;
pub mod logging;
pub mod renderer;
pub mod resources;

pub use app::{App, AppError, parse_cell};
pub use audio::{RodioPlayback, RodioSoundLoader, SilentSoundLoader, create_sound_loader};
pub use board::{Board, RevealOutcome};
pub use config::{
    AppConfig, AssetsConfig, AudioConfig, BoardConfig, ConfigError, DebugConfig, EffectsConfig,
    WindowConfig,
};
pub use renderer::{Canvas, draw_tile, load_screen};
pub use resources::{CacheStats, ResourceError, TextureCache};
