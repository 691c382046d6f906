// ==========================================
// 人力规划表格导入 - 导入配置读取 Trait
// ==========================================
// 职责: 定义解析管道所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use std::error::Error;

// ==========================================
// IngestConfigReader Trait
// ==========================================
// 用途: 构建 ParserConfig
// 实现者: ConfigManager（从 JSON 配置文件读取）
pub trait IngestConfigReader: Send + Sync {
    // ===== 工作表名称 =====

    /// 获取产能表名称
    ///
    /// # 默认值
    /// - "Ref Role Grouping 23"
    fn get_capacity_sheet_name(&self) -> Result<String, Box<dyn Error>>;

    /// 获取需求表名称
    ///
    /// # 默认值
    /// - "Consolidated Data"
    fn get_demand_sheet_name(&self) -> Result<String, Box<dyn Error>>;

    // ===== 月份列识别 =====

    /// 需求表按位置映射月份时的起始列（0 起）
    ///
    /// # 默认值
    /// - 26
    ///
    /// # 说明
    /// - 对应固定模板中 1 月所在列，其他模板可覆写
    fn get_demand_month_start_column(&self) -> Result<usize, Box<dyn Error>>;

    /// 需求表按表头识别月份的最少命中数（低于则改用位置映射）
    ///
    /// # 默认值
    /// - 6
    fn get_demand_min_named_months(&self) -> Result<usize, Box<dyn Error>>;

    /// 产能表数值列兜底时最多映射的月份数
    ///
    /// # 默认值
    /// - 12
    fn get_capacity_max_fallback_months(&self) -> Result<usize, Box<dyn Error>>;
}
