//! # Audio 模块
//!
//! 音效播放契约。Runtime 只负责"启动一次 + 轮询状态"，
//! 真实解码与输出由 Host 层的实现负责（见 `sweeper-host` 的 `RodioSoundLoader`）。

use crate::error::AudioError;

/// 播放状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// 尚未开始播放
    #[default]
    NotStarted,
    /// 正在播放
    Playing,
    /// 已播放完毕或被停止
    Stopped,
}

impl PlaybackStatus {
    /// 是否为终止状态
    ///
    /// 未开始播放的句柄同样视为终止：加载成功但从未 `play()` 的声音
    /// 不会再自行开始，持有它的特效应当结束。
    pub fn is_terminal(self) -> bool {
        !matches!(self, PlaybackStatus::Playing)
    }
}

/// 播放句柄
///
/// 句柄被 drop 时必须停止底层声音，避免特效销毁后声音继续泄漏。
pub trait Playback {
    /// 设置音量 (0.0 - 1.0)
    fn set_volume(&mut self, volume: f32);

    /// 开始播放（单次，不循环）
    fn play(&mut self);

    /// 查询当前状态（非阻塞）
    fn status(&self) -> PlaybackStatus;
}

/// 音频资源加载器
pub trait SoundLoader {
    /// 按路径加载音频，返回尚未播放的句柄
    fn load(&mut self, path: &str) -> Result<Box<dyn Playback>, AudioError>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(PlaybackStatus::NotStarted.is_terminal());
        assert!(PlaybackStatus::Stopped.is_terminal());
        assert!(!PlaybackStatus::Playing.is_terminal());
        assert_eq!(PlaybackStatus::default(), PlaybackStatus::NotStarted);
    }
}
