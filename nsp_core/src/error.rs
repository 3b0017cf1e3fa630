//! 错误类型。
//!
//! 所有参数错误都在开始计算之前检出；计算本身是纯函数，不做任何重试。

use thiserror::Error;

/// 本 crate 的 Result 别名。
pub type Result<T> = std::result::Result<T, SegmentError>;

/// 切分过程中可能出现的错误。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// 参数非法：空句子、`n_path == 0`、`max_word_len < 2`
    #[error("参数无效：{message}")]
    InvalidArgument { message: String },

    /// 已物化的路径数量超过上限（不返回部分结果）
    #[error("路径数量超过上限 {limit}")]
    ResourceExhausted { limit: usize },
}

impl SegmentError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn resource_exhausted(limit: usize) -> Self {
        Self::ResourceExhausted { limit }
    }

    /// 是否因为路径上限而失败。
    pub fn is_resource_exhausted(&self) -> bool {
        matches!(self, Self::ResourceExhausted { .. })
    }
}
