//! # App 模块
//!
//! 无窗口的帧驱动应用：持有配置、画布、贴图缓存、棋盘和特效管理器，
//! 每次 [`App::step`] 推进一帧并重绘整张画布。

use std::collections::HashSet;
use std::path::Path;

use sweeper_runtime::{
    Color, Effects, FRAMES_PER_SECOND, GridError, RectShape, Shape, SoundLoader, Surface, Vec2,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::board::{Board, RevealOutcome};
use crate::config::{AppConfig, ConfigError};
use crate::renderer::{Canvas, draw_tile, load_screen};
use crate::resources::{ResourceError, TextureCache};

const HIDDEN_TILE_COLOR: Color = Color::rgb(90, 90, 104);
const REVEALED_TILE_COLOR: Color = Color::rgb(200, 200, 208);
const MINE_TILE_COLOR: Color = Color::rgb(200, 40, 40);
/// 纯色格子之间的间隙（像素）
const TILE_GAP: f32 = 2.0;

/// 应用错误
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("棋盘布局无效: {0}")]
    Grid(#[from] GridError),

    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// 应用状态
pub struct App {
    config: AppConfig,
    canvas: Canvas,
    textures: TextureCache,
    effects: Effects,
    board: Board,
    sounds: Box<dyn SoundLoader>,
    frame: u64,
    /// 已经报告过的缺失资源，避免每帧重复警告
    missing_assets: HashSet<String>,
}

impl App {
    pub fn new(config: AppConfig, sounds: Box<dyn SoundLoader>) -> Result<Self, AppError> {
        config.validate()?;

        let board = Board::from_config(&config.board)?;
        let canvas = Canvas::new(config.window.width, config.window.height);
        let textures = TextureCache::new(config.assets_root.clone());

        debug!(
            width = config.window.width,
            height = config.window.height,
            rows = board.mines().rows(),
            cols = board.mines().cols(),
            "应用初始化完成"
        );

        Ok(Self {
            config,
            canvas,
            textures,
            effects: Effects::new(),
            board,
            sounds,
            frame: 0,
            missing_assets: HashSet::new(),
        })
    }

    /// 翻开格子
    pub fn reveal(&mut self, row: usize, col: usize) -> RevealOutcome {
        let outcome = self.board.reveal(
            row,
            col,
            &mut self.effects,
            self.sounds.as_mut(),
            &self.config.effects,
        );
        if outcome == RevealOutcome::OutOfBounds {
            warn!(row, col, "坐标超出棋盘范围");
        }
        outcome
    }

    /// 爆破格子周围一圈
    pub fn demolish(&mut self, row: usize, col: usize) {
        if !self
            .board
            .demolish(row, col, &mut self.effects, &self.config.effects)
        {
            warn!(row, col, "坐标超出棋盘范围");
        }
    }

    /// 推进一帧：先更新特效，再重绘
    pub fn step(&mut self) {
        self.effects.update(1.0 / FRAMES_PER_SECOND as f32);
        self.draw_frame();
        self.frame += 1;
    }

    /// 连续推进 `frames` 帧
    pub fn run_frames(&mut self, frames: u32) {
        for _ in 0..frames {
            self.step();
        }
    }

    /// 重绘：背景 → 格子 → 特效
    pub fn draw_frame(&mut self) {
        self.draw_background();
        self.draw_board();
        self.effects.draw(&mut self.canvas);
    }

    /// 导出当前画面
    pub fn save_frame(&self, path: impl AsRef<Path>) -> Result<(), AppError> {
        self.canvas.save_png(path)?;
        Ok(())
    }

    fn draw_background(&mut self) {
        let Some(path) = self.config.assets.background.clone() else {
            self.canvas.clear(self.config.window.clear_color);
            return;
        };

        if let Err(e) = load_screen(&mut self.canvas, &mut self.textures, &path) {
            self.report_missing(&path, &e);
            self.canvas.clear(self.config.window.clear_color);
        }
    }

    fn draw_board(&mut self) {
        let tile = self.config.board.tile_size;
        let (rows, cols) = self.board.mines().dims();

        for row in 0..rows {
            for col in 0..cols {
                let selected = self.board.selected().is_set(row, col);
                let is_mine = self.board.mines().is_set(row, col);
                let (asset, fallback) = match (selected, is_mine) {
                    (true, true) => (self.config.assets.tile_mine.clone(), MINE_TILE_COLOR),
                    (true, false) => (
                        self.config.assets.tile_revealed.clone(),
                        REVEALED_TILE_COLOR,
                    ),
                    (false, _) => (self.config.assets.tile_hidden.clone(), HIDDEN_TILE_COLOR),
                };

                let origin = self.board.cell_origin(row, col);
                let drawn = match asset {
                    Some(path) => match draw_tile(
                        &mut self.canvas,
                        &mut self.textures,
                        &path,
                        tile,
                        tile,
                        origin.x,
                        origin.y,
                    ) {
                        Ok(()) => true,
                        Err(e) => {
                            self.report_missing(&path, &e);
                            false
                        }
                    },
                    None => false,
                };

                if !drawn {
                    self.fill_tile(origin, fallback);
                }
            }
        }
    }

    fn fill_tile(&mut self, origin: Vec2, color: Color) {
        let size = self.board.tile_size() - TILE_GAP;
        let mut rect = RectShape::new(Vec2::splat(size.max(1.0)));
        rect.position = origin + Vec2::splat(TILE_GAP * 0.5);
        rect.fill_color = color;
        self.canvas.draw_shape(&Shape::Rect(rect));
    }

    fn report_missing(&mut self, path: &str, error: &ResourceError) {
        if self.missing_assets.insert(path.to_string()) {
            warn!(path = %path, error = %error, "贴图加载失败，使用纯色替代");
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut Effects {
        &mut self.effects
    }

    pub fn textures(&self) -> &TextureCache {
        &self.textures
    }

    /// 已推进的帧数
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

/// 解析 `row,col` 形式的格子坐标
pub fn parse_cell(input: &str) -> Result<(usize, usize), String> {
    let (row, col) = input
        .split_once(',')
        .ok_or_else(|| format!("格子坐标应为 row,col: {}", input))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("无效的坐标 '{}': {}", part.trim(), e))
    };
    Ok((parse(row)?, parse(col)?))
}
