// ==========================================
// 人力规划表格导入 - 导入 API
// ==========================================
// 职责: 上传校验、临时文件生命周期、响应封装
// 接口: 服务描述 / 健康检查 / 上传解析 / 本地文件解析 / 演示数据
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::{IngestConfigReader, ParserConfig};
use crate::domain::capacity::CapacityResult;
use crate::domain::dataset::ParsedDataset;
use crate::domain::demand::DemandResult;
use crate::importer::dataset_importer::base_name;
use crate::importer::{
    generate_demo_dataset, CapacityImporter, DatasetImporter, DemandImporter, SheetKind,
    SheetReader, UniversalSheetReader,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tempfile::TempDir;
use tracing::{info, warn};

/// 允许上传的扩展名
pub const UPLOAD_EXTENSIONS: [&str; 3] = [".xlsm", ".xlsx", ".xls"];

/// 统一成功响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}

/// 服务描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub name: String,
    pub version: String,
    /// 路径 → 说明
    pub endpoints: BTreeMap<String, String>,
}

/// 健康检查结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

// ==========================================
// IngestApi - 导入 API
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct IngestApi {
    config: ParserConfig,
}

impl IngestApi {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// 从配置读取器构建
    pub fn from_config(reader: &dyn IngestConfigReader) -> ApiResult<Self> {
        Ok(Self::new(ParserConfig::from_reader(reader)?))
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn service_info(&self) -> ServiceDescriptor {
        let endpoints = [
            ("/api/health", "健康检查"),
            ("/api/upload", "上传 Excel 文件 (POST)"),
            ("/api/demo", "获取演示数据 (GET)"),
        ]
        .into_iter()
        .map(|(path, desc)| (path.to_string(), desc.to_string()))
        .collect();

        ServiceDescriptor {
            name: crate::APP_NAME.to_string(),
            version: crate::VERSION.to_string(),
            endpoints,
        }
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy".to_string(),
            message: "API 运行中".to_string(),
        }
    }

    /// 上传并解析工作簿
    ///
    /// # 参数
    /// - file_name: 客户端提供的文件名（仅取文件名部分）
    /// - bytes: 文件内容
    ///
    /// # 返回
    /// - Ok(ApiResponse<ParsedDataset>)
    /// - Err(InvalidInput): 未提供文件名或扩展名不在 .xlsm/.xlsx/.xls 内（400）
    /// - Err(ParseFailed): 工作表缺失或格式无法读取（422）
    /// - Err(InternalError): 临时文件或 IO 故障（500）
    pub fn upload(
        &self,
        file_name: Option<&str>,
        bytes: &[u8],
    ) -> ApiResult<ApiResponse<ParsedDataset>> {
        let file_name = match file_name.map(base_name) {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                warn!("上传请求未提供文件");
                return Err(ApiError::InvalidInput("未提供文件".to_string()));
            }
        };

        let lower = file_name.to_lowercase();
        if !UPLOAD_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            warn!(file = %file_name, "上传文件类型不支持");
            return Err(ApiError::InvalidInput(
                "文件类型不支持，请上传 Excel 文件（.xlsm、.xlsx 或 .xls）".to_string(),
            ));
        }

        info!(file = %file_name, bytes = bytes.len(), "收到上传文件");

        // TempDir 在离开作用域时删除（含错误返回路径）
        let temp_dir = TempDir::new()
            .map_err(|e| ApiError::InternalError(format!("创建临时目录失败: {}", e)))?;
        let temp_path = temp_dir.path().join(&file_name);
        std::fs::write(&temp_path, bytes)
            .map_err(|e| ApiError::InternalError(format!("写入临时文件失败: {}", e)))?;

        let dataset = DatasetImporter::new(self.config.clone()).import(
            &UniversalSheetReader,
            &temp_path,
            Some(&file_name),
        )?;

        Ok(ApiResponse::ok(dataset, format!("文件解析成功: {}", file_name)))
    }

    /// 解析本地工作簿（Excel 或 CSV 目录）
    pub fn import_file(&self, path: &Path) -> ApiResult<ApiResponse<ParsedDataset>> {
        let dataset =
            DatasetImporter::new(self.config.clone()).import(&UniversalSheetReader, path, None)?;
        let message = format!("文件解析成功: {}", dataset.metadata.file_name);
        Ok(ApiResponse::ok(dataset, message))
    }

    /// 单独解析产能表
    ///
    /// sheet_name 为 None 时使用配置的产能表名
    pub fn import_capacity_sheet(
        &self,
        path: &Path,
        sheet_name: Option<&str>,
    ) -> ApiResult<ApiResponse<CapacityResult>> {
        let config = self.config_with(SheetKind::Capacity, sheet_name);
        let result = CapacityImporter::new(config).import(&UniversalSheetReader, path)?;
        let message = format!("产能表解析成功: {} 个产能桶", result.buckets.len());
        Ok(ApiResponse::ok(result, message))
    }

    /// 单独解析需求表
    pub fn import_demand_sheet(
        &self,
        path: &Path,
        sheet_name: Option<&str>,
    ) -> ApiResult<ApiResponse<DemandResult>> {
        let config = self.config_with(SheetKind::Demand, sheet_name);
        let result = DemandImporter::new(config).import(&UniversalSheetReader, path)?;
        let message = format!("需求表解析成功: {} 个项目", result.projects.len());
        Ok(ApiResponse::ok(result, message))
    }

    /// 使用自定义读取器解析（测试与嵌入场景）
    pub fn import_with_reader<R: SheetReader + ?Sized>(
        &self,
        reader: &R,
        path: &Path,
    ) -> ApiResult<ApiResponse<ParsedDataset>> {
        let dataset = DatasetImporter::new(self.config.clone()).import(reader, path, None)?;
        let message = format!("文件解析成功: {}", dataset.metadata.file_name);
        Ok(ApiResponse::ok(dataset, message))
    }

    /// 演示数据（不会失败）
    pub fn demo(&self) -> ApiResponse<ParsedDataset> {
        ApiResponse::ok(generate_demo_dataset(), "演示数据加载成功")
    }

    // 以指定工作表名覆盖配置
    fn config_with(&self, kind: SheetKind, sheet_name: Option<&str>) -> ParserConfig {
        let mut config = self.config.clone();
        if let Some(name) = sheet_name {
            match kind {
                SheetKind::Capacity => config.capacity_sheet_name = name.to_string(),
                SheetKind::Demand => config.demand_sheet_name = name.to_string(),
            }
        }
        config
    }
}
