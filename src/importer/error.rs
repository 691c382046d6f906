// ==========================================
// 人力规划表格导入 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分类: 输入类型错误 / 解析错误 / 意外错误
// 红线: 单元格级别的坏数据不产生错误（降级为 0 / "Unknown"）
// ==========================================

use std::fmt;
use thiserror::Error;

/// 工作表种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    Capacity,
    Demand,
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetKind::Capacity => f.write_str("产能"),
            SheetKind::Demand => f.write_str("需求"),
        }
    }
}

/// 错误分类（边界层据此选择响应码）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 文件缺失/类型不符，解析前即可判定
    InputType,
    /// 工作表不存在或格式无法读取
    Parse,
    /// 其余一切（IO 故障等）
    Unexpected,
}

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsm/.xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    #[error("工作表不存在: '{sheet}'（可用工作表: {available}）")]
    SheetNotFound { sheet: String, available: String },

    // ===== 解析错误 =====
    #[error("{kind}表解析失败: {message}")]
    SheetParseError { kind: SheetKind, message: String },

    // ===== 配置错误 =====
    #[error("配置读取失败 (key: {key}): {message}")]
    ConfigReadError { key: String, message: String },

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImportError {
    /// 将读取阶段的错误包装为指定工作表的解析错误
    ///
    /// IO 故障保持原样（属于意外错误，不应暗示输入有误）
    pub fn into_sheet_error(self, kind: SheetKind) -> ImportError {
        match self {
            ImportError::FileReadError(_)
            | ImportError::ConfigReadError { .. }
            | ImportError::InternalError(_)
            | ImportError::Other(_)
            | ImportError::SheetParseError { .. } => self,
            other => ImportError::SheetParseError {
                kind,
                message: other.to_string(),
            },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ImportError::UnsupportedFormat(_) => ErrorCategory::InputType,
            ImportError::ExcelParseError(_)
            | ImportError::CsvParseError(_)
            | ImportError::SheetNotFound { .. }
            | ImportError::SheetParseError { .. } => ErrorCategory::Parse,
            ImportError::FileNotFound(_)
            | ImportError::FileReadError(_)
            | ImportError::ConfigReadError { .. }
            | ImportError::InternalError(_)
            | ImportError::Other(_) => ErrorCategory::Unexpected,
        }
    }

    pub fn is_parse_error(&self) -> bool {
        self.category() == ErrorCategory::Parse
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_not_found_wrapped_as_parse_error() {
        let err = ImportError::SheetNotFound {
            sheet: "Consolidated Data".to_string(),
            available: "Sheet1".to_string(),
        }
        .into_sheet_error(SheetKind::Demand);

        assert!(err.is_parse_error());
        let msg = err.to_string();
        assert!(msg.starts_with("需求表解析失败"));
        assert!(msg.contains("Consolidated Data"));
    }

    #[test]
    fn test_io_error_stays_unexpected() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ImportError::from(io).into_sheet_error(SheetKind::Capacity);
        assert_eq!(err.category(), ErrorCategory::Unexpected);
    }

    #[test]
    fn test_unsupported_format_is_input_type() {
        let err = ImportError::UnsupportedFormat("pdf".to_string());
        assert_eq!(err.category(), ErrorCategory::InputType);
    }
}
