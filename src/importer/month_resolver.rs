// ==========================================
// 人力规划表格导入 - 月份列识别
// ==========================================
// 产能表: 正则匹配月份全称（可带 Capacity/Hours/Forecast 后缀）
//         零命中 → 前 N 个数值列按位置映射 Jan..
// 需求表: 子串匹配三字母缩写
//         命中数 < 阈值 → 丢弃结果，从固定起始列按位置映射 Jan..Dec
// 输出: (月份, 列序号)，按日历顺序
// ==========================================

use crate::domain::month::Month;
use crate::domain::table::SheetTable;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// 月份 → 列序号（日历顺序）
pub type MonthColumns = Vec<(Month, usize)>;

static CAPACITY_MONTH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(January|February|March|April|May|June|July|August|September|October|November|December)\s*(Capacity|Hours|Forecast)?",
    )
    .expect("月份正则合法")
});

// ==========================================
// MonthResolver - 月份列识别器
// ==========================================
pub struct MonthResolver;

impl MonthResolver {
    /// 产能表月份列
    ///
    /// 同一月份出现多列时以最后一列为准
    pub fn resolve_capacity(table: &SheetTable, max_fallback_months: usize) -> MonthColumns {
        let mut found: BTreeMap<Month, usize> = BTreeMap::new();

        for (idx, column) in table.columns().iter().enumerate() {
            let matched = CAPACITY_MONTH_PATTERN
                .captures(column)
                .and_then(|caps| caps.get(1))
                .and_then(|m| Month::parse(m.as_str()));
            if let Some(month) = matched {
                found.insert(month, idx);
            }
        }

        if !found.is_empty() {
            return found.into_iter().collect();
        }

        // 兜底: 未标注的数值列视为从 1 月开始的连续月份
        let limit = max_fallback_months.min(Month::ALL.len());
        let numeric: Vec<usize> = (0..table.columns().len())
            .filter(|&idx| table.is_numeric_column(idx))
            .take(limit)
            .collect();

        warn!(
            sheet = %table.name,
            numeric_columns = numeric.len(),
            "产能表未识别到月份表头，按数值列位置映射月份"
        );

        numeric
            .into_iter()
            .enumerate()
            .filter_map(|(i, idx)| Month::from_index(i).map(|m| (m, idx)))
            .collect()
    }

    /// 需求表月份列
    ///
    /// 每列取日历顺序中第一个命中的月份；同一月份出现多列时以最后一列为准
    pub fn resolve_demand(
        columns: &[String],
        start_column: usize,
        min_named_months: usize,
    ) -> MonthColumns {
        let mut found: BTreeMap<Month, usize> = BTreeMap::new();

        for (idx, column) in columns.iter().enumerate() {
            let lower = column.to_lowercase();
            let matched = Month::ALL
                .iter()
                .copied()
                .find(|m| lower.contains(&m.abbr().to_lowercase()));
            if let Some(month) = matched {
                found.insert(month, idx);
            }
        }

        if found.len() >= min_named_months {
            debug!(months = found.len(), "需求表按表头识别月份列");
            return found.into_iter().collect();
        }

        warn!(
            named = found.len(),
            threshold = min_named_months,
            start_column,
            "需求表月份表头不足，按固定起始列映射月份"
        );

        Month::ALL
            .iter()
            .copied()
            .enumerate()
            .filter_map(|(i, month)| {
                let idx = start_column + i;
                (idx < columns.len()).then_some((month, idx))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::CellValue;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn header_only(names: &[&str]) -> SheetTable {
        SheetTable::new("Ref Role Grouping 23", cols(names), Vec::new())
    }

    #[test]
    fn test_capacity_pattern_variants() {
        let table = header_only(&[
            "Global Team",
            "march hours",
            "JANUARY Capacity",
            "February",
            "Notes",
        ]);
        let months = MonthResolver::resolve_capacity(&table, 12);
        assert_eq!(
            months,
            vec![(Month::Jan, 2), (Month::Feb, 3), (Month::Mar, 1)]
        );
    }

    #[test]
    fn test_capacity_abbreviations_do_not_match() {
        // 只有全称可命中；缩写表头走数值兜底
        let table = SheetTable::new(
            "cap",
            cols(&["Team", "Role", "Jan", "Feb"]),
            vec![vec![
                CellValue::Text("Digital".into()),
                CellValue::Text("Dev".into()),
                CellValue::Number(1.0),
                CellValue::Number(2.0),
            ]],
        );
        let months = MonthResolver::resolve_capacity(&table, 12);
        assert_eq!(months, vec![(Month::Jan, 2), (Month::Feb, 3)]);
    }

    #[test]
    fn test_capacity_numeric_fallback_limit() {
        let names: Vec<String> = (0..14).map(|i| format!("C{}", i)).collect();
        let row: Vec<CellValue> = (0..14).map(|i| CellValue::Number(i as f64)).collect();
        let table = SheetTable::new("cap", names, vec![row]);

        let months = MonthResolver::resolve_capacity(&table, 12);
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], (Month::Jan, 0));
        assert_eq!(months[11], (Month::Dec, 11));

        let limited = MonthResolver::resolve_capacity(&table, 3);
        assert_eq!(limited.len(), 3);
    }

    #[test]
    fn test_capacity_duplicate_month_last_column_wins() {
        let table = header_only(&["January Capacity", "January Forecast"]);
        let months = MonthResolver::resolve_capacity(&table, 12);
        assert_eq!(months, vec![(Month::Jan, 1)]);
    }

    #[test]
    fn test_demand_named_months() {
        let columns = cols(&[
            "Project", "Team", "Jan-25", "Feb-25", "Mar-25", "Apr-25", "May-25", "Jun-25",
            "Jan-25 (copy)",
        ]);
        let months = MonthResolver::resolve_demand(&columns, 26, 6);
        assert_eq!(months.len(), 6);
        assert_eq!(months[0], (Month::Jan, 8));
        assert_eq!(months[1], (Month::Feb, 3));
        assert_eq!(months[5], (Month::Jun, 7));
    }

    #[test]
    fn test_demand_market_header_does_not_take_march() {
        let columns = cols(&[
            "Project", "Global Team/Market", "Role Group", "Location",
            "Jan", "Feb", "Mar", "Apr", "May", "Jun",
        ]);
        let months = MonthResolver::resolve_demand(&columns, 26, 6);
        assert_eq!(
            months,
            vec![
                (Month::Jan, 4),
                (Month::Feb, 5),
                (Month::Mar, 6),
                (Month::Apr, 7),
                (Month::May, 8),
                (Month::Jun, 9)
            ]
        );
    }

    #[test]
    fn test_demand_below_threshold_uses_offset() {
        let mut names: Vec<String> = vec!["Project".into(), "Market".into()];
        names.extend((2..30).map(|i| format!("Col{}", i)));
        // "Market" 命中 Mar，仅 1 个，低于阈值 → 整体丢弃
        let months = MonthResolver::resolve_demand(&names, 26, 6);
        assert_eq!(
            months,
            vec![
                (Month::Jan, 26),
                (Month::Feb, 27),
                (Month::Mar, 28),
                (Month::Apr, 29)
            ]
        );
    }

    #[test]
    fn test_demand_offset_beyond_columns() {
        let months = MonthResolver::resolve_demand(&cols(&["Project", "Team"]), 26, 6);
        assert!(months.is_empty());
    }
}
