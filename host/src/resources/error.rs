//! 纹理加载与帧导出的错误类型。

use thiserror::Error;

/// 资源错误
#[derive(Error, Debug)]
pub enum ResourceError {
    /// 文件不存在
    #[error("资源未找到: {path}")]
    NotFound { path: String },

    /// 图像解码失败
    #[error("图像解码失败: {path} - {message}")]
    DecodeFailed { path: String, message: String },

    /// 请求的区域与图像没有交集
    #[error("纹理区域为空: {path} ({width}x{height})")]
    EmptyRegion {
        path: String,
        /// 裁剪后的宽度
        width: u32,
        /// 裁剪后的高度
        height: u32,
    },

    /// 帧导出失败
    #[error("写出帧失败: {path} - {message}")]
    WriteFailed { path: String, message: String },
}
