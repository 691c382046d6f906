// ==========================================
// 人力规划表格导入 - 核心库
// ==========================================
// 职责: 产能表 / 需求表解析 → 统一数据结构
// 下游: What-If 模拟界面（本库不做模拟与分配）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 表格读取与标准化
pub mod importer;

// 配置层 - 解析参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 上传/演示接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    CapacityBucket, CapacityColumnMapping, CapacityResult, CellValue, DatasetMetadata,
    DemandColumnMapping, DemandProject, DemandResult, Month, ParsedDataset, SheetTable,
};

pub use importer::{
    generate_demo_dataset, parse_capacity, parse_dataset, parse_demand, ImportError,
    ImportResult,
};

pub use api::{ApiError, ApiResponse, IngestApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "What-If Simulation Dashboard API";
