//! 错误类型
//!
//! `ApiError` 保留完整的失败原因供日志使用；
//! 视图层只向用户展示下面三条固定消息之一。

use crate::web::HttpError;

pub const LOAD_TOURS_FAILED: &str = "Error loading tours";
pub const SAVE_TOUR_FAILED: &str = "Error saving tour";
pub const DELETE_TOUR_FAILED: &str = "Error deleting tour";

/// API 调用失败（请求未完成或状态码非 2xx）
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("`{action}` request failed: {source}")]
    Transport {
        action: &'static str,
        #[source]
        source: HttpError,
    },

    #[error("`{action}` returned HTTP {status}")]
    Status { action: &'static str, status: u16 },

    #[error("failed to encode `{action}` request: {source}")]
    Encode {
        action: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected `{action}` response: {source}")]
    Decode {
        action: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn action(&self) -> &'static str {
        match self {
            ApiError::Transport { action, .. }
            | ApiError::Status { action, .. }
            | ApiError::Encode { action, .. }
            | ApiError::Decode { action, .. } => action,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
