// ==========================================
// 人力规划表格导入 - 命令行入口
// ==========================================
// 命令: parse <FILE> / sheet <FILE> --kind ... / demo / config
// 输出: stdout 为 JSON 响应；日志与错误写入 stderr
// ==========================================

use anyhow::anyhow;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use workforce_ingest::api::{ApiError, ApiResult, IngestApi};
use workforce_ingest::config::ConfigManager;
use workforce_ingest::logging;

#[derive(Debug, Parser)]
#[command(name = "workforce-ingest", version, about = "人力规划表格解析（产能 + 需求）")]
struct Cli {
    /// 配置文件路径（默认: 用户配置目录下 workforce-ingest/config.json）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 解析整本工作簿（产能表 + 需求表）
    Parse {
        file: PathBuf,
    },
    /// 单独解析一个工作表（Excel 或 CSV）
    Sheet {
        file: PathBuf,
        #[arg(long, value_enum)]
        kind: SheetArg,
        /// 覆盖配置中的工作表名
        #[arg(long)]
        sheet: Option<String>,
    },
    /// 输出演示数据
    Demo,
    /// 输出生效配置（含默认值）
    Config,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SheetArg {
    Capacity,
    Demand,
}

fn load_config(config_path: Option<&PathBuf>) -> anyhow::Result<ConfigManager> {
    let manager = match config_path {
        Some(path) => ConfigManager::new(path)
            .map_err(|e| anyhow!("无法加载配置文件 {}: {}", path.display(), e))?,
        None => ConfigManager::from_default_location().map_err(|e| anyhow!("{}", e))?,
    };
    tracing::debug!(source = ?manager.source(), "配置加载完成");
    Ok(manager)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_outcome<T: Serialize>(result: ApiResult<T>) -> anyhow::Result<ExitCode> {
    match result {
        Ok(response) => {
            print_json(&response)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Ok(report_error(&err)),
    }
}

fn report_error(err: &ApiError) -> ExitCode {
    tracing::error!(code = err.code(), status = err.status_code(), "{}", err);
    match serde_json::to_string(&err.to_body()) {
        Ok(body) => eprintln!("{}", body),
        Err(_) => eprintln!("{}", err),
    }
    ExitCode::FAILURE
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let manager = load_config(cli.config.as_ref())?;
    let api = IngestApi::from_config(&manager)?;

    match cli.command {
        Command::Parse { file } => print_outcome(api.import_file(&file)),
        Command::Sheet { file, kind, sheet } => match kind {
            SheetArg::Capacity => print_outcome(api.import_capacity_sheet(&file, sheet.as_deref())),
            SheetArg::Demand => print_outcome(api.import_demand_sheet(&file, sheet.as_deref())),
        },
        Command::Demo => {
            print_json(&api.demo())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Config => {
            let snapshot = manager
                .get_config_snapshot()
                .map_err(|e| anyhow!("配置快照生成失败: {}", e))?;
            println!("{}", snapshot);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    tracing::info!("{} v{}", workforce_ingest::APP_NAME, workforce_ingest::VERSION);

    match run(cli) {
        Ok(code) => code,
        Err(err) => report_error(&ApiError::Other(err)),
    }
}
