// ==========================================
// 人力规划表格导入 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，将导入错误按分类转换为响应码
// 映射: 输入类型错误 → 400；解析错误 → 422；意外错误 → 500
// ==========================================

use crate::importer::error::{ErrorCategory, ImportError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误（解析前判定）
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 解析错误
    // ==========================================
    #[error("{0}")]
    ParseFailed(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("文件处理失败: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidInput(_) => 400,
            ApiError::ParseFailed(_) => 422,
            ApiError::InternalError(_) | ApiError::Other(_) => 500,
        }
    }

    /// 错误代码（日志/CLI 展示用）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::ParseFailed(_) => "PARSE_FAILED",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
    }

    /// 错误响应体 {detail}
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            detail: self.to_string(),
        }
    }
}

// ==========================================
// 从 ImportError 转换
// 目的: 按错误分类选择响应码，保留底层原因
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err.category() {
            ErrorCategory::InputType => ApiError::InvalidInput(err.to_string()),
            ErrorCategory::Parse => ApiError::ParseFailed(err.to_string()),
            ErrorCategory::Unexpected => match err {
                ImportError::Other(inner) => ApiError::Other(inner),
                other => ApiError::InternalError(other.to_string()),
            },
        }
    }
}

/// 错误响应体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
