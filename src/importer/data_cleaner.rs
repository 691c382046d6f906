// ==========================================
// 人力规划表格导入 - 单元格清洗
// ==========================================
// 职责: 单元格 → 数值 / 标签 的降级转换
// 红线: 从不报错；坏数据一律降级为 0 或 "Unknown"
// ==========================================

use crate::domain::table::CellValue;

/// 缺失标签的占位值
pub const UNKNOWN_LABEL: &str = "Unknown";

pub struct DataCleaner;

impl DataCleaner {
    /// 单元格 → 非负有限数
    ///
    /// - 数值: 原样（非有限或负数记 0）
    /// - 文本: 去空白后尝试解析，失败记 0
    /// - 缺失: 0
    pub fn to_quantity(cell: &CellValue) -> f64 {
        let value = match cell {
            CellValue::Missing => 0.0,
            CellValue::Number(v) => *v,
            CellValue::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        };
        if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        }
    }

    /// 单元格 → 去空白文本；缺失/空白 → None
    pub fn to_text(cell: &CellValue) -> Option<String> {
        match cell {
            CellValue::Missing => None,
            CellValue::Number(v) => Some(Self::format_number(*v)),
            CellValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
        }
    }

    /// 单元格 → 标签；缺失/空白 → "Unknown"
    pub fn to_label(cell: &CellValue) -> String {
        Self::to_text(cell).unwrap_or_else(|| UNKNOWN_LABEL.to_string())
    }

    /// 整数值不带小数部分（2024.0 → "2024"）
    fn format_number(v: f64) -> String {
        if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
            format!("{}", v as i64)
        } else {
            v.to_string()
        }
    }
}
