// ==========================================
// 人力规划表格导入 - 数据集导入
// ==========================================
// 流程: 产能表 → 需求表 → 合并月份轴 → 附加元信息
// 失败: 任一工作表失败即返回第一个错误，不返回部分结果
// ==========================================

use crate::config::ParserConfig;
use crate::domain::dataset::{DatasetMetadata, ParsedDataset};
use crate::importer::capacity_importer::CapacityImporter;
use crate::importer::demand_importer::DemandImporter;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::UniversalSheetReader;
use crate::importer::sheet_reader_trait::SheetReader;
use chrono::Local;
use std::path::Path;
use std::time::Instant;
use tracing::info;

// ==========================================
// DatasetImporter - 整本工作簿导入器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct DatasetImporter {
    capacity: CapacityImporter,
    demand: DemandImporter,
}

impl DatasetImporter {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            capacity: CapacityImporter::new(config.clone()),
            demand: DemandImporter::new(config),
        }
    }

    /// 导入工作簿
    ///
    /// # 参数
    /// - reader: 工作表读取器
    /// - file_path: 工作簿路径
    /// - file_name: 元信息中记录的文件名；None 时取路径的文件名部分
    ///
    /// # 返回
    /// - Ok(ParsedDataset): 合并后的数据集
    /// - Err: 第一个失败的工作表错误
    pub fn import<R: SheetReader + ?Sized>(
        &self,
        reader: &R,
        file_path: &Path,
        file_name: Option<&str>,
    ) -> ImportResult<ParsedDataset> {
        let start = Instant::now();

        let capacity = self.capacity.import(reader, file_path)?;
        let demand = self.demand.import(reader, file_path)?;

        let metadata = DatasetMetadata {
            parsed_at: Local::now().naive_local(),
            file_name: file_name
                .map(base_name)
                .unwrap_or_else(|| base_name_of_path(file_path)),
            is_demo: None,
        };

        let dataset = ParsedDataset::merge(capacity, demand, metadata);

        info!(
            file = %dataset.metadata.file_name,
            buckets = dataset.capacity.buckets.len(),
            projects = dataset.demand.projects.len(),
            months = dataset.months.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "数据集解析完成"
        );

        Ok(dataset)
    }
}

/// 去掉客户端可能携带的目录部分（兼容 / 与 \ 分隔符）
pub fn base_name(name: &str) -> String {
    name.rsplit(['/', '\\']).next().unwrap_or(name).to_string()
}

fn base_name_of_path(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// 以默认参数解析工作簿（自动识别 Excel / CSV）
pub fn parse_dataset(file_path: &Path) -> ImportResult<ParsedDataset> {
    DatasetImporter::default().import(&UniversalSheetReader, file_path, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::month::Month;
    use crate::domain::table::{CellValue, SheetTable};
    use crate::importer::error::{ErrorCategory, ImportError};
    use std::collections::HashMap;

    /// 内存读取器: 工作表名 → 表
    struct MemoryReader {
        sheets: HashMap<String, SheetTable>,
    }

    impl SheetReader for MemoryReader {
        fn read_sheet(&self, _file_path: &Path, sheet_name: &str) -> ImportResult<SheetTable> {
            self.sheets
                .get(sheet_name)
                .cloned()
                .ok_or_else(|| ImportError::SheetNotFound {
                    sheet: sheet_name.to_string(),
                    available: self.sheets.keys().cloned().collect::<Vec<_>>().join(", "),
                })
        }
    }

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn capacity_table() -> SheetTable {
        SheetTable::new(
            "Ref Role Grouping 23",
            headers(&["Global Team", "Role Group", "Location", "March Capacity", "April Capacity"]),
            vec![vec![
                CellValue::Text("Digital".into()),
                CellValue::Text("Developer".into()),
                CellValue::Text("Pune".into()),
                CellValue::Number(100.0),
                CellValue::Number(90.0),
            ]],
        )
    }

    fn demand_table() -> SheetTable {
        let mut names = headers(&["Project", "Global Team", "Role Group", "Location"]);
        names.extend(Month::ALL.iter().take(6).map(|m| format!("{} 2024", m.abbr())));
        let mut row = vec![
            CellValue::Text("Alpha".into()),
            CellValue::Text("Digital".into()),
            CellValue::Text("Developer".into()),
            CellValue::Text("Pune".into()),
        ];
        row.extend((0..6).map(|_| CellValue::Number(10.0)));
        SheetTable::new("Consolidated Data", names, vec![row])
    }

    #[test]
    fn test_import_merges_month_axes() {
        let mut sheets = HashMap::new();
        sheets.insert("Ref Role Grouping 23".to_string(), capacity_table());
        sheets.insert("Consolidated Data".to_string(), demand_table());
        let reader = MemoryReader { sheets };

        let dataset = DatasetImporter::default()
            .import(&reader, Path::new("/uploads/plan.xlsm"), None)
            .unwrap();

        assert_eq!(dataset.metadata.file_name, "plan.xlsm");
        assert_eq!(dataset.metadata.is_demo, None);
        assert_eq!(dataset.capacity.months, vec![Month::Mar, Month::Apr]);
        assert_eq!(dataset.months, Month::ALL[..6].to_vec());
        assert_eq!(dataset.demand.projects[0].total_demand, 60.0);
    }

    #[test]
    fn test_missing_demand_sheet_fails_with_parse_error() {
        let mut sheets = HashMap::new();
        sheets.insert("Ref Role Grouping 23".to_string(), capacity_table());
        let reader = MemoryReader { sheets };

        let err = DatasetImporter::default()
            .import(&reader, Path::new("plan.xlsx"), None)
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Parse);
        assert!(err.to_string().contains("Consolidated Data"));
    }

    #[test]
    fn test_custom_sheet_names() {
        let mut sheets = HashMap::new();
        sheets.insert("Supply".to_string(), capacity_table());
        sheets.insert("Demand".to_string(), demand_table());
        let reader = MemoryReader { sheets };

        let config = ParserConfig {
            capacity_sheet_name: "Supply".to_string(),
            demand_sheet_name: "Demand".to_string(),
            ..ParserConfig::default()
        };
        let dataset = DatasetImporter::new(config)
            .import(&reader, Path::new("x.xlsx"), Some("C:\\Users\\me\\plan.xlsx"))
            .unwrap();

        assert_eq!(dataset.capacity.buckets.len(), 1);
        assert_eq!(dataset.metadata.file_name, "plan.xlsx");
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("a/b/c.xlsm"), "c.xlsm");
        assert_eq!(base_name("c.xlsm"), "c.xlsm");
        assert_eq!(base_name("dir\\c.xls"), "c.xls");
    }
}
