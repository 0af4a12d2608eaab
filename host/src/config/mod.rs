//! # Config 模块
//!
//! 运行时配置管理，集中管理所有配置项。
//!
//! ## 配置优先级
//!
//! 1. 命令行参数（最高）
//! 2. 配置文件 (config.json)
//! 3. 默认值（最低）

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use sweeper_runtime::{Color, Grid, GridError};
use thiserror::Error;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 资源根目录
    #[serde(default = "default_assets_root")]
    pub assets_root: PathBuf,

    /// 窗口（画布）配置
    #[serde(default)]
    pub window: WindowConfig,

    /// 音频配置
    #[serde(default)]
    pub audio: AudioConfig,

    /// 棋盘配置
    #[serde(default)]
    pub board: BoardConfig,

    /// 特效参数
    #[serde(default)]
    pub effects: EffectsConfig,

    /// 贴图路径（相对于 assets_root）
    #[serde(default)]
    pub assets: AssetsConfig,

    /// 调试配置
    #[serde(default)]
    pub debug: DebugConfig,
}

/// 窗口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// 画布宽度（像素）
    #[serde(default = "default_window_width")]
    pub width: u32,

    /// 画布高度（像素）
    #[serde(default = "default_window_height")]
    pub height: u32,

    /// 无背景图时的清屏颜色
    #[serde(default = "default_clear_color")]
    pub clear_color: Color,
}

/// 音频配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// 是否启用音频输出（关闭时所有音效退化为静音特效）
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// 主音量 (0.0 - 1.0)
    #[serde(default = "default_master_volume")]
    pub master_volume: f32,

    /// SFX 音量 (0.0 - 1.0)
    #[serde(default = "default_sfx_volume")]
    pub sfx_volume: f32,

    /// 是否静音
    #[serde(default)]
    pub muted: bool,
}

/// 棋盘配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// 布局：每行一个字符串，`*` 为地雷，`.` 为空格子
    #[serde(default = "default_layout")]
    pub layout: Vec<String>,

    /// 格子边长（像素）
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,

    /// 翻开无雷提示的格子时是否连锁翻开
    #[serde(default)]
    pub cascade: bool,
}

/// 特效参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsConfig {
    #[serde(default = "default_ring_start_radius")]
    pub ring_start_radius: f32,

    #[serde(default = "default_ring_end_radius")]
    pub ring_end_radius: f32,

    /// 圆环持续时间（秒）
    #[serde(default = "default_ring_lifetime")]
    pub ring_lifetime: f32,

    #[serde(default = "default_ring_color")]
    pub ring_color: Color,

    #[serde(default = "default_flash_color")]
    pub flash_color: Color,

    /// 闪屏持续时间（秒）
    #[serde(default = "default_flash_lifetime")]
    pub flash_lifetime: f32,

    /// 爆炸音效路径（相对于 assets_root）
    #[serde(default = "default_explosion_sound")]
    pub explosion_sound: String,

    /// 爆炸音效音量 (0.0 - 1.0)
    #[serde(default = "default_explosion_volume")]
    pub explosion_volume: f32,
}

/// 贴图路径配置
///
/// 未配置的贴图以纯色方块代替。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetsConfig {
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub tile_hidden: Option<String>,
    #[serde(default)]
    pub tile_revealed: Option<String>,
    #[serde(default)]
    pub tile_mine: Option<String>,
}

/// 调试配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebugConfig {
    /// 输出 debug 级别日志
    #[serde(default)]
    pub verbose: bool,
}

// 默认值函数
fn default_assets_root() -> PathBuf {
    PathBuf::from("assets")
}

fn default_true() -> bool {
    true
}

fn default_window_width() -> u32 {
    1920
}

fn default_window_height() -> u32 {
    1080
}

fn default_clear_color() -> Color {
    Color::rgb(24, 24, 32)
}

fn default_master_volume() -> f32 {
    1.0
}

fn default_sfx_volume() -> f32 {
    1.0
}

fn default_layout() -> Vec<String> {
    [
        "*.......", "........", "...*....", "........", ".....*..", "........", ".*......",
        ".......*",
    ]
    .iter()
    .map(|row| row.to_string())
    .collect()
}

fn default_tile_size() -> u32 {
    64
}

fn default_ring_start_radius() -> f32 {
    8.0
}

fn default_ring_end_radius() -> f32 {
    96.0
}

fn default_ring_lifetime() -> f32 {
    0.5
}

fn default_ring_color() -> Color {
    Color::rgb(120, 200, 255)
}

fn default_flash_color() -> Color {
    Color::rgba(255, 255, 255, 200)
}

fn default_flash_lifetime() -> f32 {
    0.15
}

fn default_explosion_sound() -> String {
    "sfx/explosion.wav".to_string()
}

fn default_explosion_volume() -> f32 {
    1.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_root: default_assets_root(),
            window: WindowConfig::default(),
            audio: AudioConfig::default(),
            board: BoardConfig::default(),
            effects: EffectsConfig::default(),
            assets: AssetsConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            clear_color: default_clear_color(),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            master_volume: default_master_volume(),
            sfx_volume: default_sfx_volume(),
            muted: false,
        }
    }
}

impl AudioConfig {
    /// 音效实际生效的音量系数（考虑静音）
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            layout: default_layout(),
            tile_size: default_tile_size(),
            cascade: false,
        }
    }
}

impl BoardConfig {
    /// 解析地雷布局
    pub fn parse_mines(&self) -> Result<Grid, GridError> {
        Grid::parse(&self.layout)
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            ring_start_radius: default_ring_start_radius(),
            ring_end_radius: default_ring_end_radius(),
            ring_lifetime: default_ring_lifetime(),
            ring_color: default_ring_color(),
            flash_color: default_flash_color(),
            flash_lifetime: default_flash_lifetime(),
            explosion_sound: default_explosion_sound(),
            explosion_volume: default_explosion_volume(),
        }
    }
}

impl AppConfig {
    /// 加载可选的配置文件
    ///
    /// 文件不存在时返回 `Ok(None)`，由调用方决定是否使用默认配置；
    /// 文件存在但无法读取或解析时返回错误，不会静默退回默认值。
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        Self::try_load(path).map(Some)
    }

    /// 加载配置文件，失败时返回错误
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 保存配置到文件
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Validation(
                "画布尺寸必须大于 0".to_string(),
            ));
        }

        if self.board.tile_size == 0 {
            return Err(ConfigError::Validation("格子边长必须大于 0".to_string()));
        }

        self.board
            .parse_mines()
            .map_err(|e| ConfigError::Validation(format!("棋盘布局无效: {}", e)))?;

        for (name, volume) in [
            ("主音量", self.audio.master_volume),
            ("SFX 音量", self.audio.sfx_volume),
            ("爆炸音效音量", self.effects.explosion_volume),
        ] {
            if !(0.0..=1.0).contains(&volume) {
                return Err(ConfigError::Validation(format!(
                    "{}必须在 0.0 - 1.0 之间",
                    name
                )));
            }
        }

        if self.effects.ring_start_radius < 0.0 || self.effects.ring_end_radius < 0.0 {
            return Err(ConfigError::Validation("圆环半径不能为负".to_string()));
        }

        Ok(())
    }
}

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO 错误
    #[error("配置 IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 解析/序列化失败
    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    /// 验证失败
    #[error("配置验证失败: {0}")]
    Validation(String),
}
