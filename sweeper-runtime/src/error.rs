//! # Error 模块
//!
//! 定义 sweeper-runtime 中使用的错误类型。

use thiserror::Error;

/// 网格构造/解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// 网格没有任何格子
    #[error("网格不能为空")]
    Empty,

    /// 某一行长度与第一行不一致
    #[error("第 {row} 行长度不一致：期望 {expected}，实际 {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// 布局字符串中出现无法识别的字符
    #[error("第 {row} 行第 {col} 列：无法识别的格子字符 '{ch}'")]
    InvalidCell { row: usize, col: usize, ch: char },

    /// 伴随网格（selected/scored）尺寸与地雷网格不一致
    #[error("网格尺寸不匹配：期望 {expected:?}，实际 {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

/// 音频加载错误
///
/// 由 [`SoundLoader`](crate::audio::SoundLoader) 返回；
/// [`ExplosionSound`](crate::effect::ExplosionSound) 会吞掉该错误并退化为无声特效。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// 音频设备不可用
    #[error("音频输出不可用: {message}")]
    Unavailable { message: String },

    /// 音频文件加载/解码失败
    #[error("加载音频失败: {path} - {message}")]
    LoadFailed { path: String, message: String },
}

/// Grid 相关 Result 别名
pub type GridResult<T> = Result<T, GridError>;
