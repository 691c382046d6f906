// ==========================================
// 人力规划表格导入 - 配置层
// ==========================================
// 职责: 解析参数管理（工作表名、月份兜底参数）
// 存储: JSON 配置文件
// ==========================================

pub mod config_manager;
pub mod ingest_config_trait;
pub mod parser_config;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager};
pub use ingest_config_trait::IngestConfigReader;
pub use parser_config::ParserConfig;
