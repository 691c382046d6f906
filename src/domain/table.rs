// ==========================================
// 人力规划表格导入 - 表格模型
// ==========================================
// 职责: 读取器与解析器之间的中间结构
// 单元格类型: 缺失 / 数值 / 文本
// ==========================================

use std::collections::HashMap;

// ==========================================
// CellValue - 单元格值
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Missing,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// 缺失或纯空白文本
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Missing => true,
            CellValue::Number(_) => false,
            CellValue::Text(s) => s.trim().is_empty(),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }

    /// 从原始文本推断类型（CSV 等无类型来源使用）
    ///
    /// 空白 → Missing；可解析为有限数值 → Number；其余 → Text（原样保留）
    pub fn infer(raw: &str) -> CellValue {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => CellValue::Number(v),
            _ => CellValue::Text(raw.to_string()),
        }
    }
}

static MISSING: CellValue = CellValue::Missing;

// ==========================================
// SheetTable - 单个工作表
// ==========================================
// 不变量: columns 唯一（见 normalize_headers），每行长度 == columns.len()
#[derive(Debug, Clone)]
pub struct SheetTable {
    pub name: String,
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
    index: HashMap<String, usize>,
}

impl SheetTable {
    /// 由原始表头与数据行构建表格
    ///
    /// 表头会经过 normalize_headers；数据行按列数截断或补齐 Missing
    pub fn new(name: impl Into<String>, raw_headers: Vec<String>, raw_rows: Vec<Vec<CellValue>>) -> Self {
        let columns = normalize_headers(&raw_headers);
        let width = columns.len();
        let rows = raw_rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Missing);
                row
            })
            .collect();
        let index = columns
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();

        Self {
            name: name.into(),
            columns,
            rows,
            index,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }

    /// 按行序遍历（行号从 0 开始，不含表头）
    pub fn rows(&self) -> impl Iterator<Item = TableRow<'_>> {
        self.rows.iter().enumerate().map(move |(position, cells)| TableRow {
            table: self,
            position,
            cells,
        })
    }

    /// 列是否为数值类型：所有非缺失单元格均为数值（全空列也视为数值列）
    pub fn is_numeric_column(&self, col_idx: usize) -> bool {
        if col_idx >= self.columns.len() {
            return false;
        }
        self.rows.iter().all(|row| match &row[col_idx] {
            CellValue::Number(_) | CellValue::Missing => true,
            CellValue::Text(_) => false,
        })
    }
}

// ==========================================
// TableRow - 行视图
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct TableRow<'a> {
    table: &'a SheetTable,
    position: usize,
    cells: &'a [CellValue],
}

impl<'a> TableRow<'a> {
    /// 数据行序号（0 起）
    pub fn position(&self) -> usize {
        self.position
    }

    /// 按列名取值；列名不存在或未解析时返回 Missing
    pub fn get(&self, column: Option<&str>) -> &'a CellValue {
        column
            .and_then(|c| self.table.column_index(c))
            .map(|idx| self.at(idx))
            .unwrap_or(&MISSING)
    }

    /// 按列序号取值
    pub fn at(&self, col_idx: usize) -> &'a CellValue {
        self.cells.get(col_idx).unwrap_or(&MISSING)
    }
}

/// 表头标准化
///
/// - 去除首尾空白
/// - 空表头 → `Unnamed: <列序号>`
/// - 重复表头 → 追加 `.<n>`（n 从 1 开始），保证列名唯一
pub fn normalize_headers(raw: &[String]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut columns: Vec<String> = Vec::with_capacity(raw.len());

    for (idx, header) in raw.iter().enumerate() {
        let trimmed = header.trim();
        let base = if trimmed.is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            trimmed.to_string()
        };

        let mut candidate = base.clone();
        let mut n = seen.get(&base).copied().unwrap_or(0);
        while columns.contains(&candidate) {
            n += 1;
            candidate = format!("{}.{}", base, n);
        }
        seen.insert(base, n);
        columns.push(candidate);
    }

    columns
}
