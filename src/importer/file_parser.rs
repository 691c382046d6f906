// ==========================================
// 人力规划表格导入 - 工作表读取器实现
// ==========================================
// 支持: Excel (.xlsx/.xlsm/.xls/.xlsb/.ods) / CSV (.csv 或 CSV 目录)
// 单元格映射: 数值 → Number，文本 → Text，空/错误 → Missing
// ==========================================

use crate::domain::table::{CellValue, SheetTable};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::sheet_reader_trait::SheetReader;
use calamine::{open_workbook, Data, Reader, Sheets};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 可由 calamine 打开的扩展名
const EXCEL_EXTENSIONS: [&str; 6] = ["xlsx", "xlsm", "xlam", "xls", "xlsb", "ods"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// ==========================================
// Excel Reader 实现
// ==========================================
pub struct ExcelSheetReader;

impl ExcelSheetReader {
    /// 按（小写）扩展名选择 calamine 格式，大写扩展名同样可读
    fn open(file_path: &Path, ext: &str) -> ImportResult<Sheets<BufReader<File>>> {
        let sheets = match ext {
            "xls" => Sheets::Xls(open_workbook(file_path).map_err(calamine::Error::Xls)?),
            "xlsb" => Sheets::Xlsb(open_workbook(file_path).map_err(calamine::Error::Xlsb)?),
            "ods" => Sheets::Ods(open_workbook(file_path).map_err(calamine::Error::Ods)?),
            _ => Sheets::Xlsx(open_workbook(file_path).map_err(calamine::Error::Xlsx)?),
        };
        Ok(sheets)
    }

    fn to_cell(data: &Data) -> CellValue {
        match data {
            Data::Empty | Data::Error(_) => CellValue::Missing,
            Data::Int(v) => CellValue::Number(*v as f64),
            Data::Float(v) => CellValue::Number(*v),
            Data::String(s) => CellValue::Text(s.clone()),
            // 布尔、日期等不参与数值计算，保留文本形式
            other => CellValue::Text(other.to_string()),
        }
    }
}

impl SheetReader for ExcelSheetReader {
    fn read_sheet(&self, file_path: &Path, sheet_name: &str) -> ImportResult<SheetTable> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        // 检查扩展名
        let ext = extension_of(file_path);
        if !EXCEL_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // 打开 Excel 文件
        let mut workbook = Self::open(file_path, &ext)?;

        let sheet_names = workbook.sheet_names();
        if !sheet_names.iter().any(|name| name == sheet_name) {
            return Err(ImportError::SheetNotFound {
                sheet: sheet_name.to_string(),
                available: sheet_names.join(", "),
            });
        }

        let range = workbook.worksheet_range(sheet_name)?;

        // calamine 裁掉了左侧整列为空的区域，补齐后列序号与 A 列对齐
        let leading = range.start().map(|(_, col)| col as usize).unwrap_or(0);

        // 提取表头（第一行）
        let mut rows = range.rows();
        let headers: Vec<String> = match rows.next() {
            Some(header_row) => std::iter::repeat(String::new())
                .take(leading)
                .chain(header_row.iter().map(|cell| cell.to_string()))
                .collect(),
            None => {
                warn!(sheet = sheet_name, "工作表为空");
                Vec::new()
            }
        };

        // 读取数据行（保留空白行，行号与表格行位置一一对应）
        let data_rows: Vec<Vec<CellValue>> = rows
            .map(|row| {
                std::iter::repeat(CellValue::Missing)
                    .take(leading)
                    .chain(row.iter().map(Self::to_cell))
                    .collect()
            })
            .collect();

        debug!(
            sheet = sheet_name,
            columns = headers.len(),
            rows = data_rows.len(),
            "Excel 工作表读取完成"
        );

        Ok(SheetTable::new(sheet_name, headers, data_rows))
    }
}

// ==========================================
// CSV Reader 实现
// ==========================================
// - 单个 .csv 文件即一个工作表，工作表名仅作为表格名称
// - 目录视为工作簿，工作表为目录下的 `<工作表名>.csv`
pub struct CsvSheetReader;

impl CsvSheetReader {
    fn resolve_sheet_path(&self, file_path: &Path, sheet_name: &str) -> ImportResult<PathBuf> {
        if !file_path.is_dir() {
            return Ok(file_path.to_path_buf());
        }

        let candidate = file_path.join(format!("{}.csv", sheet_name));
        if candidate.is_file() {
            return Ok(candidate);
        }

        let mut available: Vec<String> = std::fs::read_dir(file_path)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| extension_of(p) == "csv")
            .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().to_string()))
            .collect();
        available.sort();

        Err(ImportError::SheetNotFound {
            sheet: sheet_name.to_string(),
            available: available.join(", "),
        })
    }
}

impl SheetReader for CsvSheetReader {
    fn read_sheet(&self, file_path: &Path, sheet_name: &str) -> ImportResult<SheetTable> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let path = self.resolve_sheet_path(file_path, sheet_name)?;

        // 检查扩展名
        let ext = extension_of(&path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_path(&path)?;

        // 读取表头
        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

        // 读取所有行
        let mut data_rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            data_rows.push(record.iter().map(CellValue::infer).collect());
        }

        debug!(
            sheet = sheet_name,
            path = %path.display(),
            columns = headers.len(),
            rows = data_rows.len(),
            "CSV 工作表读取完成"
        );

        Ok(SheetTable::new(sheet_name, headers, data_rows))
    }
}

// ==========================================
// 通用读取器（根据扩展名自动选择）
// ==========================================
pub struct UniversalSheetReader;

impl SheetReader for UniversalSheetReader {
    fn read_sheet(&self, file_path: &Path, sheet_name: &str) -> ImportResult<SheetTable> {
        if file_path.is_dir() {
            return CsvSheetReader.read_sheet(file_path, sheet_name);
        }

        let ext = extension_of(file_path);
        match ext.as_str() {
            "csv" => CsvSheetReader.read_sheet(file_path, sheet_name),
            e if EXCEL_EXTENSIONS.contains(&e) => ExcelSheetReader.read_sheet(file_path, sheet_name),
            _ => {
                if !file_path.exists() {
                    return Err(ImportError::FileNotFound(file_path.display().to_string()));
                }
                Err(ImportError::UnsupportedFormat(ext))
            }
        }
    }
}
