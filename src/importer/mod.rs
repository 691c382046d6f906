// ==========================================
// 人力规划表格导入 - 导入层
// ==========================================
// 职责: 读取工作表 → 列/月份识别 → 行标准化 → 合并数据集
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod capacity_importer;
pub mod column_resolver;
pub mod data_cleaner;
pub mod dataset_importer;
pub mod demand_importer;
pub mod demo_data;
pub mod error;
pub mod file_parser;
pub mod month_resolver;
pub mod sheet_reader_trait;

// 重导出核心类型
pub use capacity_importer::{parse_capacity, CapacityImporter};
pub use column_resolver::{ColumnResolver, ColumnRole};
pub use data_cleaner::DataCleaner;
pub use dataset_importer::{parse_dataset, DatasetImporter};
pub use demand_importer::{parse_demand, DemandImporter, UniqueIdAllocator};
pub use demo_data::generate_demo_dataset;
pub use error::{ErrorCategory, ImportError, ImportResult, SheetKind};
pub use file_parser::{CsvSheetReader, ExcelSheetReader, UniversalSheetReader};
pub use month_resolver::MonthResolver;

// 重导出 Trait 接口
pub use sheet_reader_trait::SheetReader;
