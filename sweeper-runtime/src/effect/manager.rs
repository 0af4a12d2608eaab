//! # Effects 管理器
//!
//! 持有一组活跃特效，逐帧推进并回收已结束的特效。

use std::fmt;

use tracing::trace;

use super::Effect;
use crate::render::Surface;

/// 特效管理器
///
/// - 注册顺序即绘制顺序
/// - 特效在报告结束的同一次 `update` 中被 drop
/// - 管理器 drop 时所有剩余特效随之 drop
#[derive(Default)]
pub struct Effects {
    effects: Vec<Box<dyn Effect>>,
}

impl fmt::Debug for Effects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Effects")
            .field("active", &self.effects.len())
            .finish()
    }
}

impl Effects {
    pub fn new() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    /// 注册特效并返回其引用，供调用方进一步配置
    ///
    /// 引用的生命周期受 `&mut self` 约束：下一次 `update` 之前必须释放。
    ///
    /// # 示例
    /// ```rust,ignore
    /// effects
    ///     .spawn(RingWave::new(center, 10.0, 120.0, 0.5, Color::WHITE))
    ///     .set_outline_color(Color::ORANGE);
    /// ```
    pub fn spawn<E: Effect + 'static>(&mut self, effect: E) -> &mut E {
        self.effects.push(Box::new(effect));
        let last = self
            .effects
            .last_mut()
            .expect("刚插入的特效必然存在");
        last.as_mut()
            .as_any_mut()
            .downcast_mut::<E>()
            .expect("刚插入的特效类型必然匹配")
    }

    /// 注册一个已装箱的特效
    pub fn spawn_boxed(&mut self, effect: Box<dyn Effect>) {
        self.effects.push(effect);
    }

    /// 推进所有特效一帧，移除并销毁已结束的特效
    ///
    /// 保留下来的特效维持原有相对顺序。
    pub fn update(&mut self, frame_delta_seconds: f32) {
        let before = self.effects.len();
        self.effects
            .retain_mut(|effect| !effect.update(frame_delta_seconds));

        let retired = before - self.effects.len();
        if retired > 0 {
            trace!(retired, remaining = self.effects.len(), "特效结束");
        }
    }

    /// 按注册顺序绘制所有特效
    pub fn draw(&self, surface: &mut dyn Surface) {
        for effect in &self.effects {
            effect.draw(surface);
        }
    }

    /// 立即销毁所有特效（可重复调用）
    pub fn clear_all(&mut self) {
        self.effects.clear();
    }

    /// 活跃特效数量
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
