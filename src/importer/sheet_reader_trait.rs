// ==========================================
// 人力规划表格导入 - 工作表读取 Trait
// ==========================================
// 职责: 定义"文件 + 工作表名 → 表格"的读取接口（不包含实现）
// 红线: 读取器只负责取数，不做列识别、不做类型纠正
// ==========================================

use crate::domain::table::SheetTable;
use crate::importer::error::ImportResult;
use std::path::Path;

// ==========================================
// SheetReader Trait
// ==========================================
// 用途: 解析管道的数据来源
// 实现者: ExcelSheetReader, CsvSheetReader, UniversalSheetReader
pub trait SheetReader: Send + Sync {
    /// 读取指定工作表
    ///
    /// # 参数
    /// - file_path: 文件路径
    /// - sheet_name: 工作表名称
    ///
    /// # 返回
    /// - Ok(SheetTable): 有序列名 + 有序数据行（首行为表头）
    /// - Err(SheetNotFound): 工作表不存在（错误信息列出可用工作表）
    /// - Err: 文件不存在、格式无法识别、IO 故障
    fn read_sheet(&self, file_path: &Path, sheet_name: &str) -> ImportResult<SheetTable>;
}
