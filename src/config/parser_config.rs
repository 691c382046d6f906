use crate::config::config_manager::config_keys;
use crate::config::ingest_config_trait::IngestConfigReader;
use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CAPACITY_SHEET: &str = "Ref Role Grouping 23";
pub const DEFAULT_DEMAND_SHEET: &str = "Consolidated Data";
pub const DEFAULT_DEMAND_MONTH_START_COLUMN: usize = 26;
pub const DEFAULT_DEMAND_MIN_NAMED_MONTHS: usize = 6;
pub const DEFAULT_CAPACITY_MAX_FALLBACK_MONTHS: usize = 12;

/// 解析参数（一次解析内只读）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// 产能表名称
    pub capacity_sheet_name: String,

    /// 需求表名称
    pub demand_sheet_name: String,

    /// 需求表位置映射起始列（1 月所在列，0 起）
    pub demand_month_start_column: usize,

    /// 需求表表头命中月份数下限
    pub demand_min_named_months: usize,

    /// 产能表数值列兜底的月份上限（最多 12）
    pub capacity_max_fallback_months: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            capacity_sheet_name: DEFAULT_CAPACITY_SHEET.to_string(),
            demand_sheet_name: DEFAULT_DEMAND_SHEET.to_string(),
            demand_month_start_column: DEFAULT_DEMAND_MONTH_START_COLUMN,
            demand_min_named_months: DEFAULT_DEMAND_MIN_NAMED_MONTHS,
            capacity_max_fallback_months: DEFAULT_CAPACITY_MAX_FALLBACK_MONTHS,
        }
    }
}

impl ParserConfig {
    /// 从配置读取器构建
    pub fn from_reader(reader: &dyn IngestConfigReader) -> ImportResult<Self> {
        fn read<T>(
            key: &str,
            value: Result<T, Box<dyn std::error::Error>>,
        ) -> ImportResult<T> {
            value.map_err(|e| ImportError::ConfigReadError {
                key: key.to_string(),
                message: e.to_string(),
            })
        }

        Ok(Self {
            capacity_sheet_name: read(config_keys::CAPACITY_SHEET_NAME, reader.get_capacity_sheet_name())?,
            demand_sheet_name: read(config_keys::DEMAND_SHEET_NAME, reader.get_demand_sheet_name())?,
            demand_month_start_column: read(
                config_keys::DEMAND_MONTH_START_COLUMN,
                reader.get_demand_month_start_column(),
            )?,
            demand_min_named_months: read(
                config_keys::DEMAND_MIN_NAMED_MONTHS,
                reader.get_demand_min_named_months(),
            )?,
            capacity_max_fallback_months: read(
                config_keys::CAPACITY_MAX_FALLBACK_MONTHS,
                reader.get_capacity_max_fallback_months(),
            )?,
        })
    }
}
