// ==========================================
// 人力规划表格导入 - 演示数据
// ==========================================
// 用途: 无上传文件时供界面演示
// 规模: 8 个产能桶 + 10 个需求项目，Jan..Jun
// 约束: 与真实解析结果同构，满足全部数据不变量
// ==========================================

use crate::domain::capacity::{CapacityBucket, CapacityColumnMapping, CapacityResult};
use crate::domain::dataset::{DatasetMetadata, ParsedDataset};
use crate::domain::demand::{DemandColumnMapping, DemandProject, DemandResult};
use crate::domain::month::Month;
use chrono::Local;
use std::collections::BTreeMap;

pub const DEMO_FILE_NAME: &str = "demo_data.xlsm";

const DEMO_MONTHS: [Month; 6] = [
    Month::Jan,
    Month::Feb,
    Month::Mar,
    Month::Apr,
    Month::May,
    Month::Jun,
];

// (团队, 角色, 地点, 每月产能)
const DEMO_BUCKETS: [(&str, &str, &str, f64); 8] = [
    ("Digital", "UX Designer", "London", 320.0),
    ("Digital", "UX Designer", "Pune", 480.0),
    ("Digital", "Developer", "London", 640.0),
    ("Digital", "Developer", "Pune", 960.0),
    ("Strategy", "Consultant", "London", 480.0),
    ("Strategy", "Consultant", "New York", 320.0),
    ("Analytics", "Data Analyst", "Pune", 480.0),
    ("Analytics", "Data Analyst", "London", 320.0),
];

// (项目, 团队, 角色, 地点, Jan..Jun 需求)
const DEMO_PROJECTS: [(&str, &str, &str, &str, [f64; 6]); 10] = [
    ("Project Alpha", "Digital", "UX Designer", "London", [200.0, 180.0, 160.0, 140.0, 120.0, 100.0]),
    ("Project Beta", "Digital", "UX Designer", "Pune", [300.0, 350.0, 400.0, 350.0, 300.0, 250.0]),
    ("Project Gamma", "Digital", "Developer", "London", [400.0, 450.0, 500.0, 450.0, 400.0, 350.0]),
    ("Project Delta", "Digital", "Developer", "Pune", [600.0, 700.0, 800.0, 750.0, 650.0, 550.0]),
    ("Project Epsilon", "Strategy", "Consultant", "London", [250.0, 300.0, 350.0, 300.0, 250.0, 200.0]),
    ("Project Zeta", "Strategy", "Consultant", "New York", [180.0, 200.0, 220.0, 200.0, 180.0, 160.0]),
    ("Project Eta", "Analytics", "Data Analyst", "Pune", [300.0, 350.0, 400.0, 380.0, 340.0, 300.0]),
    ("Project Theta", "Analytics", "Data Analyst", "London", [200.0, 220.0, 250.0, 230.0, 210.0, 190.0]),
    ("Project Iota", "Digital", "UX Designer", "London", [150.0, 160.0, 170.0, 160.0, 150.0, 140.0]),
    ("Project Kappa", "Digital", "Developer", "Pune", [500.0, 550.0, 600.0, 580.0, 520.0, 480.0]),
];

fn demo_buckets() -> Vec<CapacityBucket> {
    DEMO_BUCKETS
        .iter()
        .enumerate()
        .map(|(idx, &(team, role, location, hours))| CapacityBucket {
            id: format!("bucket_{}", idx),
            team: team.to_string(),
            role: role.to_string(),
            location: location.to_string(),
            monthly_capacity: DEMO_MONTHS.iter().map(|&m| (m, hours)).collect(),
        })
        .collect()
}

fn demo_projects() -> Vec<DemandProject> {
    let mut projects: Vec<DemandProject> = DEMO_PROJECTS
        .iter()
        .enumerate()
        .map(|(idx, &(name, team, role, location, demand))| {
            let monthly_demand: BTreeMap<Month, f64> =
                DEMO_MONTHS.iter().copied().zip(demand).collect();
            let total_demand: f64 = monthly_demand.values().sum();
            DemandProject {
                id: format!("project_{}", idx),
                name: name.to_string(),
                unique_id: name.to_string(),
                team: team.to_string(),
                role: role.to_string(),
                location: location.to_string(),
                monthly_demand,
                total_demand,
            }
        })
        .collect();

    projects.sort_by(|a, b| b.total_demand.total_cmp(&a.total_demand));
    projects
}

/// 生成演示数据集（除时间戳外完全确定）
pub fn generate_demo_dataset() -> ParsedDataset {
    let capacity = CapacityResult {
        buckets: demo_buckets(),
        months: DEMO_MONTHS.to_vec(),
        column_mapping: CapacityColumnMapping {
            team: Some("Team".to_string()),
            role: Some("Role".to_string()),
            location: Some("Location".to_string()),
        },
    };

    let demand = DemandResult {
        projects: demo_projects(),
        months: DEMO_MONTHS.to_vec(),
        column_mapping: DemandColumnMapping {
            project: Some("Project".to_string()),
            team: Some("Team".to_string()),
            role: Some("Role".to_string()),
            location: Some("Location".to_string()),
        },
    };

    let metadata = DatasetMetadata {
        parsed_at: Local::now().naive_local(),
        file_name: DEMO_FILE_NAME.to_string(),
        is_demo: Some(true),
    };

    ParsedDataset::merge(capacity, demand, metadata)
}
