//! 统一错误处理
//!
//! 领域失败以 400 + 纯文本消息返回 (前端直接渲染响应体)；
//! 存储和内部失败以 500 + 通用消息返回，细节只进日志。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::db::repository::RepoError;
use crate::services::ReservationError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 业务逻辑错误 (400) ==========
    #[error("{0}")]
    /// 目标日期已被占用
    Conflict(String),

    #[error("{0}")]
    /// 预订不存在
    NotFound(String),

    #[error("{0}")]
    /// 请求参数无效
    Validation(String),

    // ========== 系统错误 (500) ==========
    #[error("Database error: {0}")]
    /// 数据库错误
    Database(String),

    #[error("Internal server error: {0}")]
    /// 内部错误
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Conflict(msg) | AppError::NotFound(msg) | AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, msg)
            }

            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, body).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<ReservationError> for AppError {
    fn from(err: ReservationError) -> Self {
        match err {
            ReservationError::DateAlreadyReserved(msg) => AppError::Conflict(msg),
            ReservationError::NotFound(msg) => AppError::NotFound(msg),
            ReservationError::Store(e) => e.into(),
        }
    }
}

/// Result type for handlers
pub type AppResult<T> = Result<T, AppError>;
