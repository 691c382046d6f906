// ==========================================
// 人力规划表格导入 - 需求领域模型
// ==========================================
// 来源: "Consolidated Data" 工作表
// 粒度: 项目 × 团队 × 角色 × 地点，按月需求
// ==========================================

use crate::domain::month::Month;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// DemandProject - 需求项目
// ==========================================
// 不变量:
// - total_demand == monthly_demand 之和
// - total_demand > 0（零需求行在解析阶段丢弃）
// - 同名项目的 unique_id 互不相同
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandProject {
    pub id: String,   // project_<行号>
    pub name: String, // 项目名称（原样，已去空白）
    #[serde(rename = "uniqueId")]
    pub unique_id: String, // 去重后的标识：name / name_1 / name_2 ...
    pub team: String,
    pub role: String,
    pub location: String,
    pub monthly_demand: BTreeMap<Month, f64>,
    pub total_demand: f64,
}

// ==========================================
// DemandColumnMapping - 需求表列映射
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemandColumnMapping {
    pub project: Option<String>,
    pub team: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
}

// ==========================================
// DemandResult - 需求表解析结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandResult {
    pub projects: Vec<DemandProject>, // 按 total_demand 降序
    pub months: Vec<Month>,
    pub column_mapping: DemandColumnMapping,
}
