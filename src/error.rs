//! 错误分类
//!
//! 网关、会话存储与页面控制器共用同一个错误枚举。

use serde_json::Value;
use teebook_shared::ValidationError;
use thiserror::Error;

/// 服务端未给出可读信息时的兜底文案
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// 非 2xx 响应
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} (HTTP {status})")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    /// 原始响应体；无法解析为 JSON 时为 `None`
    pub payload: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdminError {
    /// 请求未能到达服务端
    #[error("network error: {0}")]
    Network(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// 凭据被拒绝，或认证响应不完整
    #[error("{message}")]
    Auth { message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 成功响应无法解码为期望的类型
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl AdminError {
    pub fn auth(message: impl Into<String>) -> Self {
        AdminError::Auth {
            message: message.into(),
        }
    }

    /// 通知中展示给用户的简短说明
    pub fn user_message(&self) -> String {
        match self {
            AdminError::Api(err) => err.message.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AdminError::Api(err) => Some(err.status),
            _ => None,
        }
    }
}

pub type AdminResult<T> = Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = AdminError::from(ApiError {
            status: 404,
            message: "Course not found".into(),
            payload: None,
        });
        assert_eq!(err.user_message(), "Course not found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Course not found (HTTP 404)");

        let err = AdminError::Network("connection refused".into());
        assert_eq!(err.user_message(), "network error: connection refused");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_validation_converts() {
        let err: AdminError = ValidationError::field("holesCount", "'x' is not a whole number").into();
        assert!(matches!(err, AdminError::Validation(_)));
        assert_eq!(err.to_string(), "holesCount: 'x' is not a whole number");
    }
}
