// ==========================================
// 人力规划表格导入 - 列角色识别
// ==========================================
// 规则表: (谓词, 角色) 有序列表，自左向右扫描列名
// - 每个角色取第一个命中的列，已解析的角色不再覆盖
// - 每列只归属于规则顺序中第一个命中且角色尚未解析的规则
// - 扫描后仍未解析的角色按固定位置兜底；位置越界 → 无列
// ==========================================

use crate::domain::capacity::CapacityColumnMapping;
use crate::domain::demand::DemandColumnMapping;
use std::collections::HashMap;
use tracing::{debug, warn};

/// 逻辑角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnRole {
    Project,
    Team,
    Role,
    Location,
}

/// 单条识别规则（谓词作用于小写列名）
pub struct RoleRule {
    pub role: ColumnRole,
    pub matches: fn(&str) -> bool,
}

fn is_team(lower: &str) -> bool {
    lower.contains("global team") || lower.contains("market")
}

fn is_role(lower: &str) -> bool {
    lower.contains("role") && lower.contains("group")
}

fn is_location(lower: &str) -> bool {
    lower.contains("location")
}

fn is_project(lower: &str) -> bool {
    lower.contains("project")
}

/// 产能表规则
pub const CAPACITY_RULES: &[RoleRule] = &[
    RoleRule { role: ColumnRole::Team, matches: is_team },
    RoleRule { role: ColumnRole::Role, matches: is_role },
    RoleRule { role: ColumnRole::Location, matches: is_location },
];

/// 产能表位置兜底: [0]=team, [1]=role, [2]=location
pub const CAPACITY_DEFAULTS: &[(ColumnRole, usize)] = &[
    (ColumnRole::Team, 0),
    (ColumnRole::Role, 1),
    (ColumnRole::Location, 2),
];

/// 需求表规则
pub const DEMAND_RULES: &[RoleRule] = &[
    RoleRule { role: ColumnRole::Project, matches: is_project },
    RoleRule { role: ColumnRole::Team, matches: is_team },
    RoleRule { role: ColumnRole::Role, matches: is_role },
    RoleRule { role: ColumnRole::Location, matches: is_location },
];

/// 需求表位置兜底: [0]=project, [1]=team, [2]=role, [3]=location
pub const DEMAND_DEFAULTS: &[(ColumnRole, usize)] = &[
    (ColumnRole::Project, 0),
    (ColumnRole::Team, 1),
    (ColumnRole::Role, 2),
    (ColumnRole::Location, 3),
];

// ==========================================
// ColumnResolver - 列角色识别器
// ==========================================
pub struct ColumnResolver;

impl ColumnResolver {
    /// 按规则表 + 位置兜底解析角色
    ///
    /// # 参数
    /// - columns: 已去空白的列名（有序）
    /// - rules: 关键字规则（顺序即优先级）
    /// - defaults: 位置兜底
    ///
    /// # 返回
    /// - 角色 → 列名；无法解析的角色不出现在结果中
    pub fn resolve(
        columns: &[String],
        rules: &[RoleRule],
        defaults: &[(ColumnRole, usize)],
    ) -> HashMap<ColumnRole, String> {
        let mut resolved: HashMap<ColumnRole, String> = HashMap::new();

        for column in columns {
            let lower = column.to_lowercase();
            let claimed = rules
                .iter()
                .find(|rule| !resolved.contains_key(&rule.role) && (rule.matches)(&lower));
            if let Some(rule) = claimed {
                resolved.insert(rule.role, column.clone());
            }
        }

        for &(role, position) in defaults {
            if resolved.contains_key(&role) {
                continue;
            }
            match columns.get(position) {
                Some(column) => {
                    debug!(?role, position, column = %column, "列角色按位置兜底");
                    resolved.insert(role, column.clone());
                }
                None => {
                    warn!(?role, position, "列数不足，角色无对应列");
                }
            }
        }

        resolved
    }

    /// 产能表列映射
    pub fn resolve_capacity(columns: &[String]) -> CapacityColumnMapping {
        let mut resolved = Self::resolve(columns, CAPACITY_RULES, CAPACITY_DEFAULTS);
        CapacityColumnMapping {
            team: resolved.remove(&ColumnRole::Team),
            role: resolved.remove(&ColumnRole::Role),
            location: resolved.remove(&ColumnRole::Location),
        }
    }

    /// 需求表列映射
    pub fn resolve_demand(columns: &[String]) -> DemandColumnMapping {
        let mut resolved = Self::resolve(columns, DEMAND_RULES, DEMAND_DEFAULTS);
        DemandColumnMapping {
            project: resolved.remove(&ColumnRole::Project),
            team: resolved.remove(&ColumnRole::Team),
            role: resolved.remove(&ColumnRole::Role),
            location: resolved.remove(&ColumnRole::Location),
        }
    }
}
