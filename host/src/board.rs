//! # Board 模块
//!
//! 游戏侧的棋盘状态：把 runtime 的单层扫描算法组合成翻开/连锁/爆破操作，
//! 并在操作发生时向 [`Effects`] 派生对应特效。

use std::collections::VecDeque;

use sweeper_runtime::{
    Effects, ExplosionSound, Grid, GridError, RingWave, SCORE_PER_CELL, ScreenFlash, SoundLoader,
    Vec2, count_mines, flood_demolition, flood_score,
};
use tracing::{debug, info};

use crate::config::{BoardConfig, EffectsConfig};

/// 翻开结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// 踩到地雷
    Exploded,
    /// 安全翻开，附带本次得分
    Cleared { points: u32 },
    /// 该格已经计过分
    AlreadyRevealed,
    /// 坐标不在棋盘内
    OutOfBounds,
}

/// 棋盘
#[derive(Debug, Clone)]
pub struct Board {
    mines: Grid,
    selected: Grid,
    scored: Grid,
    score: u32,
    tile_size: f32,
    cascade: bool,
}

impl Board {
    /// 以地雷图创建棋盘
    pub fn new(mines: Grid, tile_size: f32) -> Self {
        Self {
            selected: Grid::blank_like(&mines),
            scored: Grid::blank_like(&mines),
            mines,
            score: 0,
            tile_size,
            cascade: false,
        }
    }

    /// 从配置创建
    pub fn from_config(config: &BoardConfig) -> Result<Self, GridError> {
        let mut board = Self::new(config.parse_mines()?, config.tile_size as f32);
        board.cascade = config.cascade;
        Ok(board)
    }

    /// 翻开无雷提示的格子时是否连锁翻开
    pub fn set_cascade(&mut self, cascade: bool) {
        self.cascade = cascade;
    }

    /// 格子中心的世界坐标
    pub fn cell_center(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.tile_size,
            (row as f32 + 0.5) * self.tile_size,
        )
    }

    /// 格子左上角的世界坐标
    pub fn cell_origin(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(col as f32 * self.tile_size, row as f32 * self.tile_size)
    }

    /// 周围地雷数
    pub fn hint(&self, row: usize, col: usize) -> u32 {
        count_mines(&self.mines, row, col)
    }

    /// 翻开一个格子
    ///
    /// - 地雷：派生闪屏 + 爆炸音效
    /// - 安全格：计分（自身 + 周围一圈，或在连锁模式下整片区域），并派生扩散圆环
    pub fn reveal(
        &mut self,
        row: usize,
        col: usize,
        effects: &mut Effects,
        sounds: &mut dyn SoundLoader,
        fx: &EffectsConfig,
    ) -> RevealOutcome {
        if !self.mines.contains(row, col) {
            return RevealOutcome::OutOfBounds;
        }

        if self.mines.is_set(row, col) {
            self.selected.set(row, col, true);
            effects.spawn(ScreenFlash::new(fx.flash_color, fx.flash_lifetime));
            effects.spawn(ExplosionSound::new(
                sounds,
                &fx.explosion_sound,
                fx.explosion_volume,
            ));
            info!(row, col, "踩到地雷");
            return RevealOutcome::Exploded;
        }

        if self.scored.is_set(row, col) {
            return RevealOutcome::AlreadyRevealed;
        }

        self.selected.set(row, col, true);
        self.scored.set(row, col, true);
        let mut points = SCORE_PER_CELL;

        if self.hint(row, col) == 0 {
            points += if self.cascade {
                self.cascade_from(row, col)
            } else {
                flood_score(&self.mines, &mut self.selected, &mut self.scored, row, col)
            };
        }

        self.score += points;
        effects.spawn(RingWave::new(
            self.cell_center(row, col),
            fx.ring_start_radius,
            fx.ring_end_radius,
            fx.ring_lifetime,
            fx.ring_color,
        ));
        debug!(row, col, points, total = self.score, "翻开格子");

        RevealOutcome::Cleared { points }
    }

    /// 连锁翻开
    ///
    /// 从 `(row, col)` 开始广度优先：对每个提示为 0 的格子调用一次 `flood_score`，
    /// 新选中的格子入队。返回本次累计得分（不含起点自身）。
    pub fn cascade(&mut self, row: usize, col: usize) -> u32 {
        let points = self.cascade_from(row, col);
        self.score += points;
        points
    }

    fn cascade_from(&mut self, row: usize, col: usize) -> u32 {
        let mut points = 0;
        let mut queue = VecDeque::from([(row, col)]);

        while let Some((r, c)) = queue.pop_front() {
            if self.hint(r, c) != 0 {
                continue;
            }

            let fresh: Vec<(usize, usize)> = self
                .mines
                .neighbors(r, c)
                .filter(|&(nr, nc)| !self.mines.is_set(nr, nc) && !self.scored.is_set(nr, nc))
                .collect();

            points += flood_score(&self.mines, &mut self.selected, &mut self.scored, r, c);
            queue.extend(fresh);
        }

        points
    }

    /// 爆破：选中周围一圈所有非地雷格子，并派生扩散圆环（不计分）
    ///
    /// 坐标越界时不做任何事，返回 `false`。
    pub fn demolish(
        &mut self,
        row: usize,
        col: usize,
        effects: &mut Effects,
        fx: &EffectsConfig,
    ) -> bool {
        if !self.mines.contains(row, col) {
            return false;
        }

        flood_demolition(&self.mines, &mut self.selected, row, col);
        effects.spawn(RingWave::new(
            self.cell_center(row, col),
            fx.ring_start_radius,
            fx.ring_end_radius * 1.5,
            fx.ring_lifetime,
            fx.ring_color,
        ));
        debug!(row, col, selected = self.selected.count_set(), "爆破");
        true
    }

    /// 所有非地雷格子都已计分
    pub fn is_cleared(&self) -> bool {
        let safe_cells = self.mines.rows() * self.mines.cols() - self.mines.count_set();
        self.scored.count_set() == safe_cells
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn mines(&self) -> &Grid {
        &self.mines
    }

    pub fn selected(&self) -> &Grid {
        &self.selected
    }

    pub fn scored(&self) -> &Grid {
        &self.scored
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentSoundLoader;

    fn board(layout: &[&str]) -> Board {
        Board::new(Grid::parse(layout).unwrap(), 10.0)
    }

    #[test]
    fn test_reveal_mine_spawns_flash_and_sound() {
        let mut board = board(&["*.", ".."]);
        let mut effects = Effects::new();
        let outcome = board.reveal(
            0,
            0,
            &mut effects,
            &mut SilentSoundLoader,
            &EffectsConfig::default(),
        );
        assert_eq!(outcome, RevealOutcome::Exploded);
        assert_eq!(effects.len(), 2);
        assert_eq!(board.score(), 0);
        assert!(board.selected().is_set(0, 0));

        // 静音特效在第一帧结束，闪屏继续
        effects.update(1.0 / 60.0);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn test_reveal_numbered_cell_scores_only_itself() {
        let mut board = board(&["*..", "...", "..."]);
        let mut effects = Effects::new();
        let fx = EffectsConfig::default();

        let outcome = board.reveal(1, 1, &mut effects, &mut SilentSoundLoader, &fx);
        assert_eq!(outcome, RevealOutcome::Cleared { points: 100 });
        assert_eq!(effects.len(), 1);

        let again = board.reveal(1, 1, &mut effects, &mut SilentSoundLoader, &fx);
        assert_eq!(again, RevealOutcome::AlreadyRevealed);
        assert_eq!(board.score(), 100);
    }

    #[test]
    fn test_reveal_zero_cell_floods_one_ring() {
        let mut board = board(&["....", "....", "....", "...*"]);
        let mut effects = Effects::new();
        let fx = EffectsConfig::default();

        let outcome = board.reveal(0, 0, &mut effects, &mut SilentSoundLoader, &fx);
        // 自身 100 + 周围 3 格
        assert_eq!(outcome, RevealOutcome::Cleared { points: 400 });
        assert_eq!(board.scored().count_set(), 4);
    }

    #[test]
    fn test_cascade_clears_connected_region() {
        let mut board = board(&["....", "....", "....", "...*"]);
        board.set_cascade(true);
        let mut effects = Effects::new();
        let fx = EffectsConfig::default();

        board.reveal(0, 0, &mut effects, &mut SilentSoundLoader, &fx);
        assert!(board.is_cleared());
        assert_eq!(board.score(), 15 * 100);
        assert!(!board.selected().is_set(3, 3));
    }

    #[test]
    fn test_explicit_cascade_from_numbered_cell_is_noop() {
        let mut board = board(&["*..", "...", "..."]);
        assert_eq!(board.cascade(1, 1), 0);
        // 起点自身未计分，会在相邻零格扩展时被补上
        assert_eq!(board.cascade(2, 2), 8 * 100);
        assert!(board.is_cleared());
    }

    #[test]
    fn test_demolish_selects_without_scoring() {
        let mut board = board(&["*..", "...", "..*"]);
        let mut effects = Effects::new();
        assert!(board.demolish(1, 1, &mut effects, &EffectsConfig::default()));
        assert_eq!(board.selected().count_set(), 6);
        assert_eq!(board.scored().count_set(), 0);
        assert_eq!(board.score(), 0);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn test_out_of_bounds_reveal() {
        let mut board = board(&[".."]);
        let mut effects = Effects::new();
        let outcome = board.reveal(
            5,
            0,
            &mut effects,
            &mut SilentSoundLoader,
            &EffectsConfig::default(),
        );
        assert_eq!(outcome, RevealOutcome::OutOfBounds);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_out_of_bounds_demolish() {
        let mut board = board(&["..", ".."]);
        let mut effects = Effects::new();
        assert!(!board.demolish(2, 0, &mut effects, &EffectsConfig::default()));
        assert!(effects.is_empty());
        assert_eq!(board.selected().count_set(), 0);
    }

    #[test]
    fn test_cell_geometry() {
        let board = board(&["..", ".."]);
        assert_eq!(board.cell_center(1, 0), Vec2::new(5.0, 15.0));
        assert_eq!(board.cell_origin(1, 1), Vec2::new(10.0, 10.0));
    }
}
