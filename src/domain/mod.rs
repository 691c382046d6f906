// ==========================================
// 人力规划表格导入 - 领域模型层
// ==========================================
// 职责: 定义表格模型、产能/需求实体、数据集
// 红线: 不含文件读取逻辑,不含列识别逻辑
// ==========================================

pub mod capacity;
pub mod dataset;
pub mod demand;
pub mod month;
pub mod table;

// 重导出核心类型
pub use capacity::{CapacityBucket, CapacityColumnMapping, CapacityResult};
pub use dataset::{merge_months, DatasetMetadata, ParsedDataset};
pub use demand::{DemandColumnMapping, DemandProject, DemandResult};
pub use month::Month;
pub use table::{normalize_headers, CellValue, SheetTable, TableRow};
