//! 日志初始化
//!
//! 使用 `tracing-subscriber` 的 fmt 层输出到终端。

use tracing::Level;

/// 初始化全局日志
///
/// 重复调用是安全的（测试中多次初始化时后续调用被忽略）。
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
