//! # Texture Cache 模块
//!
//! 按 `(路径, 区域宽, 区域高)` 缓存已解码的图像区域。

use image::RgbaImage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::ResourceError;
use super::path::{normalize_logical_path, resolve_asset_path};

/// 缓存键
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TextureKey {
    path: String,
    width: u32,
    height: u32,
}

/// 缓存统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// 条目数
    pub entries: usize,
    /// 命中次数
    pub hits: u64,
    /// 未命中次数
    pub misses: u64,
}

/// 纹理缓存
///
/// 每个条目是源图像左上角 `width × height` 的区域；
/// 区域超出图像时按图像尺寸裁剪（与常见图形库的 texture area 语义一致）。
pub struct TextureCache {
    /// 资源根目录
    assets_root: PathBuf,
    /// 缓存条目
    entries: HashMap<TextureKey, RgbaImage>,
    /// 统计：命中次数
    hits: u64,
    /// 统计：未命中次数
    misses: u64,
}

impl TextureCache {
    /// 创建纹理缓存
    pub fn new(assets_root: impl Into<PathBuf>) -> Self {
        Self {
            assets_root: assets_root.into(),
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// 获取图像区域（未缓存时从磁盘加载）
    pub fn region(&mut self, path: &str, width: u32, height: u32) -> Result<&RgbaImage, ResourceError> {
        let key = TextureKey {
            path: normalize_logical_path(path),
            width,
            height,
        };

        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            let full_path = resolve_asset_path(&self.assets_root, path);
            let texture = load_region(&full_path, width, height)?;
            self.entries.insert(key.clone(), texture);
        }

        Ok(&self.entries[&key])
    }

    /// 清空缓存
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// 获取统计信息
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }

    pub fn assets_root(&self) -> &Path {
        &self.assets_root
    }
}

/// 加载图像并裁剪左上角区域
pub fn load_region(path: &Path, width: u32, height: u32) -> Result<RgbaImage, ResourceError> {
    let display = path.to_string_lossy().to_string();

    if !path.exists() {
        return Err(ResourceError::NotFound { path: display });
    }

    let image = image::open(path)
        .map_err(|e| ResourceError::DecodeFailed {
            path: display.clone(),
            message: e.to_string(),
        })?
        .to_rgba8();

    let w = width.min(image.width());
    let h = height.min(image.height());
    if w == 0 || h == 0 {
        return Err(ResourceError::EmptyRegion {
            path: display,
            width: w,
            height: h,
        });
    }

    if (w, h) == image.dimensions() {
        return Ok(image);
    }
    Ok(image::imageops::crop_imm(&image, 0, 0, w, h).to_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        let image = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        image.save(dir.join(name)).unwrap();
    }

    #[test]
    fn test_region_is_cached() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "tile.png", 32, 32);

        let mut cache = TextureCache::new(dir.path());
        assert_eq!(cache.region("tile.png", 16, 16).unwrap().dimensions(), (16, 16));
        assert_eq!(cache.region("./tile.png", 16, 16).unwrap().dimensions(), (16, 16));
        assert_eq!(
            cache.stats(),
            CacheStats {
                entries: 1,
                hits: 1,
                misses: 1
            }
        );

        // 不同区域尺寸是不同条目
        cache.region("tile.png", 8, 8).unwrap();
        assert_eq!(cache.stats().entries, 2);
    }

    #[test]
    fn test_region_is_clamped_to_image() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "small.png", 10, 6);

        let mut cache = TextureCache::new(dir.path());
        assert_eq!(cache.region("small.png", 1920, 1080).unwrap().dimensions(), (10, 6));
    }

    #[test]
    fn test_missing_texture() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = TextureCache::new(dir.path());
        assert!(matches!(
            cache.region("nope.png", 4, 4),
            Err(ResourceError::NotFound { .. })
        ));
        assert_eq!(cache.stats().entries, 0);
    }

    #[test]
    fn test_invalid_texture() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.png"), b"not a png").unwrap();
        let mut cache = TextureCache::new(dir.path());
        assert!(matches!(
            cache.region("broken.png", 4, 4),
            Err(ResourceError::DecodeFailed { .. })
        ));
    }

    #[test]
    fn test_zero_sized_region() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "tile.png", 4, 4);
        let mut cache = TextureCache::new(dir.path());
        assert!(matches!(
            cache.region("tile.png", 0, 4),
            Err(ResourceError::EmptyRegion { .. })
        ));
    }
}
