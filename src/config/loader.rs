//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（chapterdex.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["chapterdex", "chapterdex.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "CHAPTERDEX";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `CHAPTERDEX_`，层级分隔符 `__`）
/// 2. 配置文件（chapterdex.toml 或 chapterdex.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `CHAPTERDEX_PROJECT__ROOT=/srv/book`
/// - `CHAPTERDEX_OUTPUT__PATH=docs/README.md`
/// - `CHAPTERDEX_README__STATISTICS=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("project.root", ".")?
        .set_default("project.repository_url", "https://github.com/MKProj/ZigUnleashed")?
        .set_default("output.path", "README.md")?
        .set_default("readme.software_requirements", false)?
        .set_default("readme.statistics", false)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: CHAPTERDEX_OUTPUT__PATH=docs/README.md
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let url = config.project.repository_url.trim();
    if url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Repository URL cannot be empty".to_string(),
        ));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "Repository URL must start with http:// or https://: {}",
            url
        )));
    }

    if config.output.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Output path cannot be empty".to_string(),
        ));
    }

    if !LOG_LEVELS.contains(&config.log.level.to_ascii_lowercase().as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "Unknown log level: {}",
            config.log.level
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Project Root: {}", config.project.root.display());
    tracing::info!("Repository URL: {}", config.project.repository_url);
    tracing::info!("Output: {}", config.output_path().display());
    tracing::info!("Software Requirements: {}", config.readme.software_requirements);
    tracing::info!("Statistics: {}", config.readme.statistics);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
