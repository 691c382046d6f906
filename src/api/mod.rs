// ==========================================
// 人力规划表格导入 - API 层
// ==========================================
// 职责: 提供上传/演示等边界接口，供 HTTP 层或命令行调用
// ==========================================

pub mod error;
pub mod ingest_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult, ErrorBody};
pub use ingest_api::{ApiResponse, HealthStatus, IngestApi, ServiceDescriptor};
