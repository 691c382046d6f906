// ==========================================
// 人力规划表格导入 - 数据集
// ==========================================
// 职责: 产能 + 需求 + 合并月份轴 + 解析元信息
// 红线: 合并阶段不做任何数值重算，不做供需匹配
// ==========================================

use crate::domain::capacity::CapacityResult;
use crate::domain::demand::DemandResult;
use crate::domain::month::Month;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// DatasetMetadata - 解析元信息
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub parsed_at: NaiveDateTime, // 本地时间，ISO-8601
    pub file_name: String,        // 源文件名（仅文件名部分）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_demo: Option<bool>,
}

// ==========================================
// ParsedDataset - 下游界面消费的完整数据
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDataset {
    pub capacity: CapacityResult,
    pub demand: DemandResult,
    pub months: Vec<Month>, // 两侧月份的并集，日历顺序
    pub metadata: DatasetMetadata,
}

impl ParsedDataset {
    /// 合并产能与需求结果
    pub fn merge(capacity: CapacityResult, demand: DemandResult, metadata: DatasetMetadata) -> Self {
        let months = merge_months(&capacity.months, &demand.months);
        Self {
            capacity,
            demand,
            months,
            metadata,
        }
    }

    pub fn is_demo(&self) -> bool {
        self.metadata.is_demo.unwrap_or(false)
    }
}

/// 月份轴合并：去重 + 日历排序
pub fn merge_months(a: &[Month], b: &[Month]) -> Vec<Month> {
    a.iter()
        .chain(b.iter())
        .copied()
        .collect::<BTreeSet<Month>>()
        .into_iter()
        .collect()
}
