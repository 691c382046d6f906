// ==========================================
// 人力规划表格导入 - 产能表解析
// ==========================================
// 流程: 读取工作表 → 列角色识别 → 月份列识别 → 逐行标准化
// 跳过: 团队与角色同时为空的行
// ==========================================

use crate::config::ParserConfig;
use crate::domain::capacity::{CapacityBucket, CapacityResult};
use crate::domain::table::SheetTable;
use crate::importer::column_resolver::ColumnResolver;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportResult, SheetKind};
use crate::importer::month_resolver::MonthResolver;
use crate::importer::sheet_reader_trait::SheetReader;
use std::path::Path;
use tracing::{debug, info};

// ==========================================
// CapacityImporter - 产能表解析器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct CapacityImporter {
    config: ParserConfig,
}

impl CapacityImporter {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// 读取配置指定的产能表并解析
    ///
    /// # 返回
    /// - Err(SheetParseError): 工作表不存在/格式无法读取（包装读取器原因）
    /// - Err(FileReadError 等): IO 故障，原样返回
    pub fn import<R: SheetReader + ?Sized>(
        &self,
        reader: &R,
        file_path: &Path,
    ) -> ImportResult<CapacityResult> {
        let table = reader
            .read_sheet(file_path, &self.config.capacity_sheet_name)
            .map_err(|e| e.into_sheet_error(SheetKind::Capacity))?;
        Ok(self.extract(&table))
    }

    /// 解析已读取的产能表（不会失败）
    pub fn extract(&self, table: &SheetTable) -> CapacityResult {
        let column_mapping = ColumnResolver::resolve_capacity(table.columns());
        let month_columns =
            MonthResolver::resolve_capacity(table, self.config.capacity_max_fallback_months);

        debug!(
            sheet = %table.name,
            mapping = ?column_mapping,
            months = ?month_columns,
            "产能表列映射"
        );

        let team_col = column_mapping.team.as_deref();
        let role_col = column_mapping.role.as_deref();
        let location_col = column_mapping.location.as_deref();

        let mut buckets = Vec::new();
        let mut skipped = 0usize;

        for row in table.rows() {
            let team = row.get(team_col);
            let role = row.get(role_col);

            // 无任何标识信息的行视为噪声
            if team.is_blank() && role.is_blank() {
                skipped += 1;
                continue;
            }

            let monthly_capacity = month_columns
                .iter()
                .map(|&(month, col_idx)| (month, DataCleaner::to_quantity(row.at(col_idx))))
                .collect();

            buckets.push(CapacityBucket {
                id: format!("bucket_{}", row.position()),
                team: DataCleaner::to_label(team),
                role: DataCleaner::to_label(role),
                location: DataCleaner::to_label(row.get(location_col)),
                monthly_capacity,
            });
        }

        info!(
            sheet = %table.name,
            buckets = buckets.len(),
            skipped,
            months = month_columns.len(),
            "产能表解析完成"
        );

        CapacityResult {
            buckets,
            months: month_columns.iter().map(|&(month, _)| month).collect(),
            column_mapping,
        }
    }
}

/// 以默认参数解析产能表
pub fn parse_capacity(table: &SheetTable) -> CapacityResult {
    CapacityImporter::default().extract(table)
}
