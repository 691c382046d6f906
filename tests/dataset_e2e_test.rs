// ==========================================
// 数据集解析端到端测试
// ==========================================
// 测试目标: 真实 .xlsx 文件 → ParsedDataset 的完整流程
// 覆盖: 月份识别、兜底映射、零需求过滤、同名去重、排序、幂等
// ==========================================


use std::collections::HashSet;
use workforce_ingest::importer::ErrorCategory;
use workforce_ingest::{logging, parse_dataset, Month};
use test_helpers::*;

#[test]
fn test_labelled_capacity_months() {
    logging::init_test();

    let capacity = labelled_capacity_sheet(vec![vec![
        t("Digital"),
        t("UX Designer"),
        t("Pune"),
        n(160.0),
        n(160.0),
    ]]);
    let demand = template_demand_sheet(vec![("Project A", flat_year(10.0))]);
    let (_dir, path) = create_test_workbook("plan.xlsx", &[capacity, demand]).unwrap();

    let dataset = parse_dataset(&path).unwrap();

    assert_eq!(dataset.capacity.buckets.len(), 1);
    let bucket = &dataset.capacity.buckets[0];
    assert_eq!(bucket.team, "Digital");
    assert_eq!(bucket.role, "UX Designer");
    assert_eq!(bucket.location, "Pune");
    assert_eq!(bucket.monthly_capacity.len(), 2);
    assert_eq!(bucket.monthly_capacity[&Month::Jan], 160.0);
    assert_eq!(bucket.monthly_capacity[&Month::Feb], 160.0);

    assert_eq!(dataset.capacity.months, vec![Month::Jan, Month::Feb]);
    assert_eq!(dataset.months, Month::ALL.to_vec());
    assert_eq!(dataset.metadata.file_name, "plan.xlsx");
    assert_eq!(dataset.metadata.is_demo, None);
}

#[test]
fn test_all_zero_demand_row_dropped() {
    let capacity = labelled_capacity_sheet(vec![vec![t("Digital"), t("Dev"), t("London"), n(1.0), n(1.0)]]);
    let demand = template_demand_sheet(vec![("Project X", flat_year(0.0)), ("Project Y", flat_year(1.0))]);
    let (_dir, path) = create_test_workbook("plan.xlsm", &[capacity, demand]).unwrap();

    let dataset = parse_dataset(&path).unwrap();

    let names: Vec<&str> = dataset.demand.projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Project Y"]);
    assert_eq!(dataset.demand.projects[0].total_demand, 12.0);
    assert_eq!(dataset.demand.projects[0].id, "project_1");
}

#[test]
fn test_duplicate_project_names() {
    let capacity = labelled_capacity_sheet(vec![vec![t("Digital"), t("Dev"), t("London"), n(1.0), n(1.0)]]);
    let demand = template_demand_sheet(vec![
        ("Project X", flat_year(1.0)),
        ("Project X", flat_year(2.0)),
        ("Project X", flat_year(0.0)),
        ("Project X", flat_year(3.0)),
    ]);
    let (_dir, path) = create_test_workbook("plan.xlsx", &[capacity, demand]).unwrap();

    let dataset = parse_dataset(&path).unwrap();
    let projects = &dataset.demand.projects;
    assert_eq!(projects.len(), 3);

    // 排序后: 3.0×12 / 2.0×12 / 1.0×12
    assert_eq!(projects[0].unique_id, "Project X_3");
    assert_eq!(projects[1].unique_id, "Project X_1");
    assert_eq!(projects[2].unique_id, "Project X");

    let unique: HashSet<&str> = projects.iter().map(|p| p.unique_id.as_str()).collect();
    assert_eq!(unique.len(), projects.len());
}

#[test]
fn test_numeric_capacity_fallback() {
    let mut header = vec![t("Team"), t("Role"), t("Location")];
    header.extend((1..=6).map(|i| t(&format!("Week Block {}", i))));
    let mut row = vec![t("Analytics"), t("Data Analyst"), t("Pune")];
    row.extend((1..=6).map(|i| n(i as f64 * 100.0)));
    let capacity = TestSheet::new(CAPACITY_SHEET, vec![header, row]);
    let demand = template_demand_sheet(vec![("Project A", flat_year(1.0))]);
    let (_dir, path) = create_test_workbook("plan.xlsx", &[capacity, demand]).unwrap();

    let dataset = parse_dataset(&path).unwrap();

    assert_eq!(dataset.capacity.months, Month::ALL[..6].to_vec());
    let bucket = &dataset.capacity.buckets[0];
    assert_eq!(bucket.monthly_capacity[&Month::Jan], 100.0);
    assert_eq!(bucket.monthly_capacity[&Month::Jun], 600.0);
    assert_eq!(dataset.capacity.column_mapping.team.as_deref(), Some("Team"));
}

#[test]
fn test_dataset_invariants_and_idempotence() {
    let capacity = labelled_capacity_sheet(vec![
        vec![t("Digital"), t("Dev"), t("London"), n(640.0), n(640.0)],
        vec![Cell::Empty, Cell::Empty, t("Nowhere"), n(1.0), n(1.0)],
        vec![t("Strategy"), Cell::Empty, Cell::Empty, t("n/a"), n(80.0)],
    ]);
    let mut months = [0.0; 12];
    months[3] = 7.0;
    let demand = template_demand_sheet(vec![
        ("Gamma", flat_year(5.0)),
        ("Alpha", months),
        ("   ", flat_year(9.0)),
        ("Beta", flat_year(20.0)),
    ]);
    let (_dir, path) = create_test_workbook("plan.xlsx", &[capacity, demand]).unwrap();

    let first = parse_dataset(&path).unwrap();
    let second = parse_dataset(&path).unwrap();

    assert_eq!(first.capacity.buckets, second.capacity.buckets);
    assert_eq!(first.demand.projects, second.demand.projects);
    assert_eq!(first.months, second.months);

    // 产能: 团队与角色全空的行被跳过
    assert_eq!(first.capacity.buckets.len(), 2);
    let strategy = &first.capacity.buckets[1];
    assert_eq!(strategy.id, "bucket_2");
    assert_eq!(strategy.role, "Unknown");
    assert_eq!(strategy.location, "Unknown");
    assert_eq!(strategy.monthly_capacity[&Month::Jan], 0.0);

    // 需求: 空名跳过，按总需求降序
    let names: Vec<&str> = first.demand.projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Beta", "Gamma", "Alpha"]);
    for pair in first.demand.projects.windows(2) {
        assert!(pair[0].total_demand >= pair[1].total_demand);
    }
    for project in &first.demand.projects {
        let sum: f64 = project.monthly_demand.values().sum();
        assert_eq!(project.total_demand, sum);
        assert!(project.total_demand > 0.0);
    }
}

#[test]
fn test_missing_demand_sheet_is_parse_error() {
    let capacity = labelled_capacity_sheet(vec![vec![t("Digital"), t("Dev"), t("London"), n(1.0), n(1.0)]]);
    let (_dir, path) = create_test_workbook("plan.xlsx", &[capacity]).unwrap();

    let err = parse_dataset(&path).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Parse);
    let msg = err.to_string();
    assert!(msg.contains("Consolidated Data"), "{}", msg);
    assert!(msg.contains(CAPACITY_SHEET), "{}", msg);
}

#[test]
fn test_missing_file_reported_against_capacity_sheet() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = parse_dataset(&dir.path().join("absent.xlsx")).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Parse);
    assert!(err.to_string().starts_with("产能表解析失败"));
}

#[test]
fn test_csv_directory_workbook() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(format!("{}.csv", CAPACITY_SHEET)),
        "Global Team,Role Group,Location,March Hours\nDigital,Dev,Pune, 120 \n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join(format!("{}.csv", DEMAND_SHEET)),
        "Project,Global Team,Role Group,Location,Jan,Feb,Mar,Apr,May,Jun\n\
         Alpha,Digital,Dev,Pune,1,2,3,4,5,6\n",
    )
    .unwrap();

    let dataset = parse_dataset(dir.path()).unwrap();
    assert_eq!(dataset.capacity.buckets[0].monthly_capacity[&Month::Mar], 120.0);
    assert_eq!(dataset.demand.projects[0].total_demand, 21.0);
    assert_eq!(dataset.months, Month::ALL[..6].to_vec());
}

#[test]
fn test_blank_leading_column_keeps_template_offset() {
    let capacity = labelled_capacity_sheet(vec![vec![t("Digital"), t("Dev"), t("London"), n(1.0), n(1.0)]]);

    // A 列整列为空，月份列从第 27 列开始
    let mut header = vec![Cell::Empty, t("Project"), t("Global Team"), t("Role Group"), t("Location")];
    header.extend((5..27).map(|i| t(&format!("Field {}", i))));
    header.extend((1..=12).map(|i| t(&format!("P{:02}", i))));
    let mut row = vec![Cell::Empty, t("Alpha"), t("Digital"), t("Dev"), t("London")];
    row.extend((5..27).map(|_| Cell::Empty));
    row.extend((1..=12).map(|i| n(i as f64)));
    let demand = TestSheet::new(DEMAND_SHEET, vec![header, row]);

    let (_dir, path) = create_test_workbook("plan.xlsx", &[capacity, demand]).unwrap();
    let dataset = parse_dataset(&path).unwrap();

    let project = &dataset.demand.projects[0];
    assert_eq!(project.name, "Alpha");
    assert_eq!(project.team, "Digital");
    assert_eq!(project.monthly_demand[&Month::Jan], 0.0);
    assert_eq!(project.monthly_demand[&Month::Feb], 1.0);
    assert_eq!(project.monthly_demand[&Month::Dec], 11.0);
    assert_eq!(project.total_demand, 66.0);
    assert_eq!(dataset.demand.column_mapping.project.as_deref(), Some("Project"));
}
