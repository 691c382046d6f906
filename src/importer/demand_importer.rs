// ==========================================
// 人力规划表格导入 - 需求表解析
// ==========================================
// 流程: 读取工作表 → 列角色识别 → 月份列识别 → 逐行标准化 → 去重标识 → 排序
// 跳过: 项目名为空的行；需求合计为 0 的行
// 排序: total_demand 降序（稳定，同值保持行序）
// ==========================================

use crate::config::ParserConfig;
use crate::domain::demand::{DemandProject, DemandResult};
use crate::domain::month::Month;
use crate::domain::table::SheetTable;
use crate::importer::column_resolver::ColumnResolver;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportResult, SheetKind};
use crate::importer::month_resolver::MonthResolver;
use crate::importer::sheet_reader_trait::SheetReader;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

// ==========================================
// UniqueIdAllocator - 同名项目标识分配
// ==========================================
// 首次出现 → 原名；第 N 次重复 → name_N
// 生成的标识若与已分配标识冲突，继续递增后缀
#[derive(Debug, Default)]
pub struct UniqueIdAllocator {
    repeats: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl UniqueIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, name: &str) -> String {
        let (mut n, mut candidate) = match self.repeats.get(name) {
            None => (0, name.to_string()),
            Some(&prev) => (prev + 1, format!("{}_{}", name, prev + 1)),
        };

        while self.issued.contains(&candidate) {
            n += 1;
            candidate = format!("{}_{}", name, n);
        }

        self.repeats.insert(name.to_string(), n);
        self.issued.insert(candidate.clone());
        candidate
    }
}

// ==========================================
// DemandImporter - 需求表解析器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct DemandImporter {
    config: ParserConfig,
}

impl DemandImporter {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// 读取配置指定的需求表并解析
    pub fn import<R: SheetReader + ?Sized>(
        &self,
        reader: &R,
        file_path: &Path,
    ) -> ImportResult<DemandResult> {
        let table = reader
            .read_sheet(file_path, &self.config.demand_sheet_name)
            .map_err(|e| e.into_sheet_error(SheetKind::Demand))?;
        Ok(self.extract(&table))
    }

    /// 解析已读取的需求表（不会失败）
    pub fn extract(&self, table: &SheetTable) -> DemandResult {
        let column_mapping = ColumnResolver::resolve_demand(table.columns());
        let month_columns = MonthResolver::resolve_demand(
            table.columns(),
            self.config.demand_month_start_column,
            self.config.demand_min_named_months,
        );

        debug!(
            sheet = %table.name,
            mapping = ?column_mapping,
            months = ?month_columns,
            "需求表列映射"
        );

        let project_col = column_mapping.project.as_deref();
        let team_col = column_mapping.team.as_deref();
        let role_col = column_mapping.role.as_deref();
        let location_col = column_mapping.location.as_deref();

        let mut ids = UniqueIdAllocator::new();
        let mut projects = Vec::new();
        let mut dropped_zero = 0usize;

        for row in table.rows() {
            let Some(name) = DataCleaner::to_text(row.get(project_col)) else {
                continue;
            };

            // 计数覆盖所有有名称的行，包括随后因零需求被丢弃的行
            let unique_id = ids.allocate(&name);

            let monthly_demand: BTreeMap<Month, f64> = month_columns
                .iter()
                .map(|&(month, col_idx)| (month, DataCleaner::to_quantity(row.at(col_idx))))
                .collect();
            let total_demand: f64 = monthly_demand.values().sum();

            if total_demand == 0.0 {
                dropped_zero += 1;
                continue;
            }

            projects.push(DemandProject {
                id: format!("project_{}", row.position()),
                name,
                unique_id,
                team: DataCleaner::to_label(row.get(team_col)),
                role: DataCleaner::to_label(row.get(role_col)),
                location: DataCleaner::to_label(row.get(location_col)),
                monthly_demand,
                total_demand,
            });
        }

        // 初始优先级: 需求量大者在前
        projects.sort_by(|a, b| b.total_demand.total_cmp(&a.total_demand));

        info!(
            sheet = %table.name,
            projects = projects.len(),
            dropped_zero,
            months = month_columns.len(),
            "需求表解析完成"
        );

        DemandResult {
            projects,
            months: month_columns.iter().map(|&(month, _)| month).collect(),
            column_mapping,
        }
    }
}

/// 以默认参数解析需求表
pub fn parse_demand(table: &SheetTable) -> DemandResult {
    DemandImporter::default().extract(table)
}
