//! # Resources 模块
//!
//! 资源加载：路径规范化 + 纹理区域缓存。
//!
//! 所有资源路径都是相对于 `assets_root` 的逻辑路径（见 [`path`]）。

mod cache;
mod error;
pub mod path;

pub use cache::{CacheStats, TextureCache, load_region};
pub use error::ResourceError;
pub use path::{normalize_logical_path, resolve_asset_path};
