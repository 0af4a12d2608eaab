//! # Flood 模块
//!
//! 单层 Moore 邻域扫描：地雷计数、得分翻开、爆破选择。
//!
//! 三个函数都只向外扩展一圈。连锁翻开由调用方决定：
//! 对新选中的格子再次调用即可（见 `sweeper-host` 的 `Board::cascade`）。

use super::{EMPTY_CHAR, Grid, MINE_CHAR};

/// 每个新翻开的格子得分
pub const SCORE_PER_CELL: u32 = 100;

/// 统计 `(row, col)` 周围 8 格中的地雷数（不含自身）
pub fn count_mines(mines: &Grid, row: usize, col: usize) -> u32 {
    mines
        .neighbors(row, col)
        .filter(|&(r, c)| mines.is_set(r, c))
        .count() as u32
}

/// 翻开并计分
///
/// 周围 8 格中既不是地雷、也尚未计分的格子会被标记为 `selected` 和 `scored`，
/// 每格 [`SCORE_PER_CELL`] 分。
///
/// # 返回
///
/// 本次新增的分数（0 - 800）
pub fn flood_score(
    mines: &Grid,
    selected: &mut Grid,
    scored: &mut Grid,
    row: usize,
    col: usize,
) -> u32 {
    let mut score = 0;
    for (r, c) in mines.neighbors(row, col) {
        if mines.is_set(r, c) || scored.is_set(r, c) {
            continue;
        }
        selected.set(r, c, true);
        scored.set(r, c, true);
        score += SCORE_PER_CELL;
    }
    score
}

/// 爆破选择
///
/// 周围 8 格中所有非地雷格子标记为 `selected`。重复调用是幂等的。
pub fn flood_demolition(mines: &Grid, selected: &mut Grid, row: usize, col: usize) {
    for (r, c) in mines.neighbors(row, col) {
        if !mines.is_set(r, c) {
            selected.set(r, c, true);
        }
    }
}

/// 提示图：地雷显示为 `*`，其余格子显示周围地雷数（0 显示为 `.`）
pub fn hint_map(mines: &Grid) -> String {
    let mut out = String::with_capacity(mines.rows() * (mines.cols() + 1));
    for row in 0..mines.rows() {
        if row > 0 {
            out.push('\n');
        }
        for col in 0..mines.cols() {
            if mines.is_set(row, col) {
                out.push(MINE_CHAR);
                continue;
            }
            let ch = match count_mines(mines, row, col) {
                0 => EMPTY_CHAR,
                n => char::from_digit(n, 10).unwrap_or('?'),
            };
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Grid {
        Grid::parse(&["*...", ".*..", "....", "...*"]).unwrap()
    }

    /// 逐格暴力统计，作为 count_mines 的对照
    fn brute_count(mines: &Grid, row: usize, col: usize) -> u32 {
        let mut count = 0;
        for r in row.saturating_sub(1)..=row + 1 {
            for c in col.saturating_sub(1)..=col + 1 {
                if (r, c) != (row, col) && mines.is_set(r, c) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_count_mines_matches_brute_force() {
        let mines = board();
        for row in 0..mines.rows() {
            for col in 0..mines.cols() {
                let n = count_mines(&mines, row, col);
                assert!(n <= 8);
                assert_eq!(n, brute_count(&mines, row, col), "at ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_count_mines_excludes_self_and_counts_all_eight() {
        let all = Grid::parse(&["***", "***", "***"]).unwrap();
        assert_eq!(count_mines(&all, 1, 1), 8);
        assert_eq!(count_mines(&all, 0, 0), 3);
        assert_eq!(count_mines(&all, 0, 1), 5);
    }

    #[test]
    fn test_count_mines_single_cell_grid() {
        let single = Grid::parse(&["*"]).unwrap();
        assert_eq!(count_mines(&single, 0, 0), 0);
    }

    #[test]
    fn test_flood_score_marks_only_safe_unscored_cells() {
        let mines = board();
        let mut selected = Grid::blank_like(&mines);
        let mut scored = Grid::blank_like(&mines);

        // (1,0) 周围：(0,0) 和 (1,1) 是地雷
        let points = flood_score(&mines, &mut selected, &mut scored, 1, 0);
        assert_eq!(points, 3 * SCORE_PER_CELL);
        assert_eq!(selected.count_set(), 3);
        for (r, c) in selected.iter_set() {
            assert!(!mines.is_set(r, c));
            assert!(scored.is_set(r, c));
        }
        // 自身不会被选中
        assert!(!selected.is_set(1, 0));

        // 同样的 scored 状态再次调用不再得分
        assert_eq!(flood_score(&mines, &mut selected, &mut scored, 1, 0), 0);
    }

    #[test]
    fn test_flood_score_range_and_multiples() {
        let mines = board();
        for row in 0..mines.rows() {
            for col in 0..mines.cols() {
                let mut selected = Grid::blank_like(&mines);
                let mut scored = Grid::blank_like(&mines);
                let points = flood_score(&mines, &mut selected, &mut scored, row, col);
                assert!(points <= 8 * SCORE_PER_CELL);
                assert_eq!(points % SCORE_PER_CELL, 0);
                assert_eq!(points, selected.count_set() as u32 * SCORE_PER_CELL);
            }
        }
    }

    #[test]
    fn test_flood_score_full_ring() {
        let mines = Grid::new(3, 3);
        let mut selected = Grid::blank_like(&mines);
        let mut scored = Grid::blank_like(&mines);
        assert_eq!(flood_score(&mines, &mut selected, &mut scored, 1, 1), 800);
    }

    #[test]
    fn test_flood_score_skips_previously_scored() {
        let mines = Grid::new(3, 3);
        let mut selected = Grid::blank_like(&mines);
        let mut scored = Grid::blank_like(&mines);
        scored.set(0, 0, true);
        scored.set(2, 2, true);

        assert_eq!(flood_score(&mines, &mut selected, &mut scored, 1, 1), 600);
        assert!(!selected.is_set(0, 0));
        assert!(!selected.is_set(2, 2));
    }

    #[test]
    fn test_flood_is_single_level() {
        let mines = Grid::new(5, 5);
        let mut selected = Grid::blank_like(&mines);
        let mut scored = Grid::blank_like(&mines);
        flood_score(&mines, &mut selected, &mut scored, 0, 0);
        assert_eq!(selected.count_set(), 3);
        assert!(!selected.is_set(2, 2));
    }

    #[test]
    fn test_flood_demolition_never_selects_mines() {
        let mines = board();
        let mut selected = Grid::blank_like(&mines);
        flood_demolition(&mines, &mut selected, 0, 1);
        assert!(!selected.is_set(0, 0));
        assert!(!selected.is_set(1, 1));
        assert_eq!(selected.count_set(), 3);

        let before = selected.clone();
        flood_demolition(&mines, &mut selected, 0, 1);
        assert_eq!(selected, before);
    }

    #[test]
    fn test_flood_demolition_ignores_scored_state() {
        let mines = Grid::new(3, 3);
        let mut selected = Grid::blank_like(&mines);
        selected.set(0, 0, true);
        flood_demolition(&mines, &mut selected, 1, 1);
        assert_eq!(selected.count_set(), 8);
    }

    #[test]
    fn test_hint_map_snapshot() {
        insta::assert_snapshot!(hint_map(&board()), @r"
        *21.
        2*1.
        1121
        ..1*
        ");
    }

    #[test]
    fn test_hint_map_full_count() {
        let mines = Grid::parse(&["***", "*.*", "***"]).unwrap();
        assert_eq!(hint_map(&mines), "***\n*8*\n***");
    }
}
