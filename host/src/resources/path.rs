//! # 路径模块
//!
//! 资源路径在程序内部统一为**相对于 assets_root 的逻辑路径**（`/` 分隔），
//! 加载时再拼接为文件系统路径。

use std::path::{Path, PathBuf};

/// 规范化逻辑路径
///
/// - 统一 `/` 分隔符
/// - 折叠 `.` 与 `..` 组件（不会越过根）
pub fn normalize_logical_path(path: &str) -> String {
    let unified = path.replace('\\', "/");

    let mut components: Vec<&str> = Vec::new();
    for component in unified.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                components.pop();
            }
            _ => components.push(component),
        }
    }

    components.join("/")
}

/// 把资源路径解析为文件系统路径
///
/// 绝对路径原样返回；其余路径先规范化，再拼接到 `assets_root` 下。
pub fn resolve_asset_path(assets_root: &Path, path: &str) -> PathBuf {
    let candidate = Path::new(path);
    if candidate.is_absolute() {
        return candidate.to_path_buf();
    }
    assets_root.join(normalize_logical_path(path))
}
