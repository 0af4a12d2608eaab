//! # Audio 模块
//!
//! runtime 音频契约的宿主实现，使用 rodio 库。
//! 支持 MP3, WAV, FLAC, OGG 格式。
//!
//! - [`RodioSoundLoader`]：真实输出设备
//! - [`SilentSoundLoader`]：无设备/禁用音频时使用，所有加载都失败，音效退化为静音特效

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use sweeper_runtime::{AudioError, Playback, PlaybackStatus, SoundLoader};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::resources::resolve_asset_path;

/// 基于 rodio 的音频加载器
pub struct RodioSoundLoader {
    /// 音频输出流（必须保持存活）
    _stream: OutputStream,
    /// 音频输出句柄
    stream_handle: OutputStreamHandle,
    /// 资源基础路径
    assets_root: PathBuf,
    /// 音量系数（主音量 × SFX 音量，静音时为 0）
    volume_scale: f32,
}

impl RodioSoundLoader {
    /// 打开默认输出设备
    pub fn new(assets_root: impl Into<PathBuf>, volume_scale: f32) -> Result<Self, AudioError> {
        let (stream, stream_handle) =
            OutputStream::try_default().map_err(|e| AudioError::Unavailable {
                message: e.to_string(),
            })?;

        Ok(Self {
            _stream: stream,
            stream_handle,
            assets_root: assets_root.into(),
            volume_scale: volume_scale.clamp(0.0, 1.0),
        })
    }

    pub fn volume_scale(&self) -> f32 {
        self.volume_scale
    }
}

impl SoundLoader for RodioSoundLoader {
    fn load(&mut self, path: &str) -> Result<Box<dyn Playback>, AudioError> {
        let full_path = resolve_asset_path(&self.assets_root, path);
        let load_failed = |message: String| AudioError::LoadFailed {
            path: full_path.to_string_lossy().to_string(),
            message,
        };

        let file = File::open(&full_path).map_err(|e| load_failed(e.to_string()))?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| load_failed(e.to_string()))?;
        let sink = Sink::try_new(&self.stream_handle).map_err(|e| load_failed(e.to_string()))?;

        // 先暂停，等 play() 时再开始
        sink.pause();
        sink.append(source);
        debug!(path = %path, "音效已加载");

        Ok(Box::new(RodioPlayback {
            sink,
            started: false,
            volume_scale: self.volume_scale,
        }))
    }
}

/// rodio 播放句柄
///
/// drop 时停止播放（sink 从不 detach）。
pub struct RodioPlayback {
    sink: Sink,
    started: bool,
    volume_scale: f32,
}

impl Playback for RodioPlayback {
    fn set_volume(&mut self, volume: f32) {
        self.sink
            .set_volume(volume.clamp(0.0, 1.0) * self.volume_scale);
    }

    fn play(&mut self) {
        self.sink.play();
        self.started = true;
    }

    fn status(&self) -> PlaybackStatus {
        if !self.started {
            PlaybackStatus::NotStarted
        } else if self.sink.empty() {
            PlaybackStatus::Stopped
        } else {
            PlaybackStatus::Playing
        }
    }
}

impl Drop for RodioPlayback {
    fn drop(&mut self) {
        self.sink.stop();
    }
}

/// 静音加载器
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSoundLoader;

impl SoundLoader for SilentSoundLoader {
    fn load(&mut self, _path: &str) -> Result<Box<dyn Playback>, AudioError> {
        Err(AudioError::Unavailable {
            message: "音频输出已禁用".to_string(),
        })
    }
}

/// 按配置创建音频加载器
///
/// 设备初始化失败时退化为 [`SilentSoundLoader`]，不会中断启动。
pub fn create_sound_loader(config: &AppConfig) -> Box<dyn SoundLoader> {
    if !config.audio.enabled {
        info!("音频已在配置中禁用");
        return Box::new(SilentSoundLoader);
    }

    match RodioSoundLoader::new(config.assets_root.clone(), config.audio.effective_sfx_volume()) {
        Ok(loader) => {
            info!("音频系统初始化成功");
            Box::new(loader)
        }
        Err(e) => {
            warn!(error = %e, "音频系统初始化失败，音效将静音");
            Box::new(SilentSoundLoader)
        }
    }
}
