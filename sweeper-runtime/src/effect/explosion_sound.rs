//! # ExplosionSound
//!
//! 一次性爆炸音效。构造即播放，播放结束即视为特效结束。

use std::fmt;

use tracing::warn;

use super::Effect;
use crate::audio::{Playback, PlaybackStatus, SoundLoader};
use crate::render::Surface;

/// 默认音量
pub const DEFAULT_EXPLOSION_VOLUME: f32 = 1.0;

/// 爆炸音效
///
/// 状态：`加载 → 播放中 → 停止`。
///
/// 加载失败时不返回错误，而是得到一个没有句柄的"哑"特效；
/// 它在第一次 `update` 时即报告结束，不会滞留在管理器中。
pub struct ExplosionSound {
    path: String,
    playback: Option<Box<dyn Playback>>,
}

impl ExplosionSound {
    /// 加载并立即播放
    ///
    /// # 参数
    ///
    /// - `loader`: 音频加载器
    /// - `path`: 音频路径
    /// - `volume`: 音量 (0.0 - 1.0)
    pub fn new(loader: &mut dyn SoundLoader, path: &str, volume: f32) -> Self {
        let playback = match loader.load(path) {
            Ok(mut playback) => {
                playback.set_volume(volume.clamp(0.0, 1.0));
                playback.play();
                Some(playback)
            }
            Err(e) => {
                warn!(path = %path, error = %e, "爆炸音效加载失败，特效将静默结束");
                None
            }
        };

        Self {
            path: path.to_string(),
            playback,
        }
    }

    /// 以默认音量加载并播放
    pub fn with_default_volume(loader: &mut dyn SoundLoader, path: &str) -> Self {
        Self::new(loader, path, DEFAULT_EXPLOSION_VOLUME)
    }

    /// 当前播放状态；加载失败时为 `NotStarted`
    pub fn status(&self) -> PlaybackStatus {
        self.playback
            .as_ref()
            .map(|p| p.status())
            .unwrap_or_default()
    }

    /// 是否成功加载了音频
    pub fn is_loaded(&self) -> bool {
        self.playback.is_some()
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Debug for ExplosionSound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExplosionSound")
            .field("path", &self.path)
            .field("status", &self.status())
            .finish()
    }
}

impl Effect for ExplosionSound {
    fn update(&mut self, _delta_seconds: f32) -> bool {
        self.status().is_terminal()
    }

    fn draw(&self, _surface: &mut dyn Surface) {}
}
