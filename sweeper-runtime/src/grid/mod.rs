//! # Grid 模块
//!
//! 运行时尺寸的布尔网格，以及基于 Moore 邻域的扫描算法。
//!
//! - [`Grid`]：`rows × cols` 布尔矩阵，地雷图中 `true` 表示地雷
//! - [`count_mines`] / [`flood_score`] / [`flood_demolition`]：单层邻域扫描
//!
//! 所有坐标越界的邻居都会被静默跳过（边角格子的邻居更少），不会环绕。

mod flood;

pub use flood::{SCORE_PER_CELL, count_mines, flood_demolition, flood_score, hint_map};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GridError, GridResult};

/// 布局字符串中的地雷字符
pub const MINE_CHAR: char = '*';
/// 布局字符串中的空格子字符
pub const EMPTY_CHAR: char = '.';

/// Moore 邻域的 8 个偏移（行优先，跳过自身）
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 布尔网格（行优先存储）
///
/// 序列化为文本布局（`["*..", ".*."]`），反序列化走 [`Grid::parse`] 的校验。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// 创建全 `false` 的网格
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// 创建与 `other` 同尺寸的全 `false` 网格（用于 selected/scored 伴随网格）
    pub fn blank_like(other: &Grid) -> Self {
        Self::new(other.rows, other.cols)
    }

    /// 从二维布尔数组构造
    pub fn from_rows(rows: Vec<Vec<bool>>) -> GridResult<Self> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if expected == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * expected);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != expected {
                return Err(GridError::RaggedRow {
                    row,
                    expected,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }

        Ok(Self {
            rows: rows.len(),
            cols: expected,
            cells,
        })
    }

    /// 从文本布局解析
    ///
    /// 每个字符串是一行，`*` 为地雷，`.` 为空格子；行首尾空白会被忽略。
    pub fn parse<S: AsRef<str>>(layout: &[S]) -> GridResult<Self> {
        let mut rows = Vec::with_capacity(layout.len());
        for (row, line) in layout.iter().enumerate() {
            let values = line
                .as_ref()
                .trim()
                .chars()
                .enumerate()
                .map(|(col, ch)| match ch {
                    MINE_CHAR => Ok(true),
                    EMPTY_CHAR => Ok(false),
                    _ => Err(GridError::InvalidCell { row, col, ch }),
                })
                .collect::<GridResult<Vec<bool>>>()?;
            rows.push(values);
        }
        Self::from_rows(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// 坐标是否在网格内
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// 读取格子；越界返回 `None`
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.contains(row, col)
            .then(|| self.cells[row * self.cols + col])
    }

    /// 读取格子；越界视为 `false`
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    /// 写入格子；越界时忽略并返回 `false`
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        self.cells[row * self.cols + col] = value;
        true
    }

    /// 为 `true` 的格子数量
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&v| v).count()
    }

    /// 所有格子重置为 `false`
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// 检查伴随网格尺寸
    pub fn ensure_same_dims(&self, other: &Grid) -> GridResult<()> {
        if self.dims() != other.dims() {
            return Err(GridError::DimensionMismatch {
                expected: self.dims(),
                found: other.dims(),
            });
        }
        Ok(())
    }

    /// `(row, col)` 的 Moore 邻域中位于网格内的坐标（不含自身）
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.contains(r, c).then_some((r, c))
        })
    }

    /// 所有为 `true` 的坐标（行优先）
    pub fn iter_set(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(|(i, _)| (i / self.cols, i % self.cols))
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = GridError;

    fn try_from(layout: Vec<String>) -> GridResult<Self> {
        Self::parse(&layout)
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Self {
        (0..grid.rows)
            .map(|row| {
                (0..grid.cols)
                    .map(|col| if grid.is_set(row, col) { MINE_CHAR } else { EMPTY_CHAR })
                    .collect::<String>()
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                let ch = if self.is_set(row, col) { MINE_CHAR } else { EMPTY_CHAR };
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layout() {
        let grid = Grid::parse(&["*..", ".*.", "..."]).unwrap();
        assert_eq!(grid.dims(), (3, 3));
        assert_eq!(grid.get(0, 0), Some(true));
        assert_eq!(grid.get(1, 1), Some(true));
        assert_eq!(grid.get(2, 2), Some(false));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.count_set(), 2);
        assert_eq!(grid.to_string(), "*..\n.*.\n...");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Grid::parse::<&str>(&[]), Err(GridError::Empty));
        assert_eq!(
            Grid::parse(&["..", "..."]),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            Grid::parse(&[".x"]),
            Err(GridError::InvalidCell {
                row: 0,
                col: 1,
                ch: 'x'
            })
        );
    }

    #[test]
    fn test_set_out_of_bounds_is_ignored() {
        let mut grid = Grid::new(2, 2);
        assert!(grid.set(1, 1, true));
        assert!(!grid.set(2, 0, true));
        assert_eq!(grid.count_set(), 1);
        assert!(!grid.is_set(5, 5));
    }

    #[test]
    fn test_neighbors_skip_out_of_bounds() {
        let grid = Grid::new(3, 4);

        let corner: Vec<_> = grid.neighbors(0, 0).collect();
        assert_eq!(corner, vec![(0, 1), (1, 0), (1, 1)]);

        let edge: Vec<_> = grid.neighbors(2, 1).collect();
        assert_eq!(edge, vec![(1, 0), (1, 1), (1, 2), (2, 0), (2, 2)]);

        assert_eq!(grid.neighbors(1, 1).count(), 8);
        // 最后一列不会环绕到下一行
        assert!(grid.neighbors(0, 3).all(|(_, c)| c >= 2));
    }

    #[test]
    fn test_dimension_check() {
        let a = Grid::new(2, 3);
        let b = Grid::new(3, 2);
        assert!(a.ensure_same_dims(&Grid::blank_like(&a)).is_ok());
        assert_eq!(
            a.ensure_same_dims(&b),
            Err(GridError::DimensionMismatch {
                expected: (2, 3),
                found: (3, 2)
            })
        );
    }

    #[test]
    fn test_serde_uses_layout() {
        let grid = Grid::parse(&["*.", ".*"]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"["*.",".*"]"#);
        assert_eq!(serde_json::from_str::<Grid>(&json).unwrap(), grid);
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_grid() {
        // 声明尺寸与格子数不符的结构体形式不再被接受
        assert!(serde_json::from_str::<Grid>(r#"{"rows":3,"cols":3,"cells":[]}"#).is_err());
        assert!(serde_json::from_str::<Grid>(r#"["..", "..."]"#).is_err());
        assert!(serde_json::from_str::<Grid>("[]").is_err());
    }

    #[test]
    fn test_iter_set() {
        let grid = Grid::parse(&[".*", "*."]).unwrap();
        let set: Vec<_> = grid.iter_set().collect();
        assert_eq!(set, vec![(0, 1), (1, 0)]);
    }
}
