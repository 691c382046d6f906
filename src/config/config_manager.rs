// ==========================================
// 人力规划表格导入 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、快照
// 存储: JSON 配置文件（扁平 key-value），缺省项取默认值
// 默认位置: <系统配置目录>/workforce-ingest/config.json
// ==========================================

use crate::config::ingest_config_trait::IngestConfigReader;
use crate::config::parser_config::{
    DEFAULT_CAPACITY_MAX_FALLBACK_MONTHS, DEFAULT_CAPACITY_SHEET, DEFAULT_DEMAND_MIN_NAMED_MONTHS,
    DEFAULT_DEMAND_MONTH_START_COLUMN, DEFAULT_DEMAND_SHEET,
};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::path::{Path, PathBuf};

/// 配置目录名
const CONFIG_DIR_NAME: &str = "workforce-ingest";

/// 配置文件名
const CONFIG_FILE_NAME: &str = "config.json";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 从配置文件创建 ConfigManager
    ///
    /// # 参数
    /// - path: JSON 文件路径，顶层必须是对象；字符串/数值/布尔值均可
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("配置文件读取失败 ({}): {}", path.display(), e))?;

        let parsed: Value = serde_json::from_str(&raw)?;
        let object = parsed
            .as_object()
            .ok_or_else(|| format!("配置文件顶层必须是 JSON 对象: {}", path.display()))?;

        let values = object
            .iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    _ => {
                        tracing::warn!(config_key = %key, "配置值类型不支持，已忽略");
                        return None;
                    }
                };
                Some((key.clone(), text))
            })
            .collect();

        tracing::info!(path = %path.display(), "已加载配置文件");

        Ok(Self {
            values,
            source: Some(path.to_path_buf()),
        })
    }

    /// 全部取默认值
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// 从 key-value 创建（测试/嵌入场景）
    pub fn from_values(values: HashMap<String, String>) -> Self {
        Self {
            values,
            source: None,
        }
    }

    /// 默认配置文件路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// 从默认位置加载；文件不存在时全部取默认值
    pub fn from_default_location() -> Result<Self, Box<dyn Error>> {
        match Self::default_config_path() {
            Some(path) if path.is_file() => Self::new(path),
            _ => {
                tracing::debug!("未找到默认配置文件，使用默认配置");
                Ok(Self::with_defaults())
            }
        }
    }

    /// 配置来源文件（默认配置时为 None）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 读取配置值
    ///
    /// # 返回
    /// - Some(String): 配置值（已去空白，空值视为未配置）
    /// - None: 配置不存在
    fn get_config_value(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// 读取配置值，带默认值
    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config_value(key)
            .unwrap_or_else(|| default.to_string())
    }

    /// 读取非负整数配置；格式错误时告警并回退默认值
    fn get_usize_or_default(&self, key: &str, default: usize) -> usize {
        let value = self.get_config_or_default(key, &default.to_string());
        value.parse::<usize>().unwrap_or_else(|_| {
            tracing::warn!(
                config_key = key,
                raw_value = %value,
                "配置值不是非负整数，使用默认值"
            );
            default
        })
    }

    /// 获取生效配置的快照（JSON格式，含默认值）
    ///
    /// # 用途
    /// - CLI 输出 / 排查列识别结果时确认实际参数
    pub fn get_config_snapshot(&self) -> Result<String, Box<dyn Error>> {
        let mut snapshot: BTreeMap<String, Value> = BTreeMap::new();
        snapshot.insert(
            config_keys::CAPACITY_SHEET_NAME.to_string(),
            Value::from(self.get_capacity_sheet_name()?),
        );
        snapshot.insert(
            config_keys::DEMAND_SHEET_NAME.to_string(),
            Value::from(self.get_demand_sheet_name()?),
        );
        snapshot.insert(
            config_keys::DEMAND_MONTH_START_COLUMN.to_string(),
            Value::from(self.get_demand_month_start_column()?),
        );
        snapshot.insert(
            config_keys::DEMAND_MIN_NAMED_MONTHS.to_string(),
            Value::from(self.get_demand_min_named_months()?),
        );
        snapshot.insert(
            config_keys::CAPACITY_MAX_FALLBACK_MONTHS.to_string(),
            Value::from(self.get_capacity_max_fallback_months()?),
        );

        Ok(serde_json::to_string(&snapshot)?)
    }
}

// ==========================================
// IngestConfigReader Trait 实现
// ==========================================
impl IngestConfigReader for ConfigManager {
    // ===== 工作表名称 =====

    fn get_capacity_sheet_name(&self) -> Result<String, Box<dyn Error>> {
        Ok(self.get_config_or_default(config_keys::CAPACITY_SHEET_NAME, DEFAULT_CAPACITY_SHEET))
    }

    fn get_demand_sheet_name(&self) -> Result<String, Box<dyn Error>> {
        Ok(self.get_config_or_default(config_keys::DEMAND_SHEET_NAME, DEFAULT_DEMAND_SHEET))
    }

    // ===== 月份列识别 =====

    fn get_demand_month_start_column(&self) -> Result<usize, Box<dyn Error>> {
        Ok(self.get_usize_or_default(
            config_keys::DEMAND_MONTH_START_COLUMN,
            DEFAULT_DEMAND_MONTH_START_COLUMN,
        ))
    }

    fn get_demand_min_named_months(&self) -> Result<usize, Box<dyn Error>> {
        Ok(self.get_usize_or_default(
            config_keys::DEMAND_MIN_NAMED_MONTHS,
            DEFAULT_DEMAND_MIN_NAMED_MONTHS,
        ))
    }

    fn get_capacity_max_fallback_months(&self) -> Result<usize, Box<dyn Error>> {
        let value = self.get_usize_or_default(
            config_keys::CAPACITY_MAX_FALLBACK_MONTHS,
            DEFAULT_CAPACITY_MAX_FALLBACK_MONTHS,
        );
        Ok(value.min(DEFAULT_CAPACITY_MAX_FALLBACK_MONTHS))
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 工作表
    pub const CAPACITY_SHEET_NAME: &str = "capacity_sheet_name";
    pub const DEMAND_SHEET_NAME: &str = "demand_sheet_name";

    // 月份列识别
    pub const DEMAND_MONTH_START_COLUMN: &str = "demand_month_start_column";
    pub const DEMAND_MIN_NAMED_MONTHS: &str = "demand_min_named_months";
    pub const CAPACITY_MAX_FALLBACK_MONTHS: &str = "capacity_max_fallback_months";
}
