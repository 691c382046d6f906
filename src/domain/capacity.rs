// ==========================================
// 人力规划表格导入 - 产能领域模型
// ==========================================
// 来源: "Ref Role Grouping 23" 工作表
// 粒度: 团队 × 角色 × 地点，按月供给
// ==========================================

use crate::domain::month::Month;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// CapacityBucket - 产能桶
// ==========================================
// 用途: 下游模拟的供给侧输入
// 约束: monthly_capacity 全部为非负有限数；缺失单元格记 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityBucket {
    pub id: String,       // bucket_<行号>
    pub team: String,     // 团队（缺失 → "Unknown"）
    pub role: String,     // 角色组
    pub location: String, // 地点
    pub monthly_capacity: BTreeMap<Month, f64>,
}

impl CapacityBucket {
    /// 全部月份的供给合计
    pub fn total_capacity(&self) -> f64 {
        self.monthly_capacity.values().sum()
    }
}

// ==========================================
// CapacityColumnMapping - 产能表列映射
// ==========================================
// None 表示该角色未解析到任何列（序列化为 null）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapacityColumnMapping {
    pub team: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
}

// ==========================================
// CapacityResult - 产能表解析结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityResult {
    pub buckets: Vec<CapacityBucket>,
    pub months: Vec<Month>, // 日历顺序
    pub column_mapping: CapacityColumnMapping,
}
