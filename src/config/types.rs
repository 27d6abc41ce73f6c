//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 书籍仓库配置
    #[serde(default)]
    pub project: ProjectConfig,

    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,

    /// README 可选段落
    #[serde(default)]
    pub readme: ReadmeConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// 输出文件的实际路径（相对路径基于 project.root）
    pub fn output_path(&self) -> PathBuf {
        if self.output.path.is_absolute() {
            self.output.path.clone()
        } else {
            self.project.root.join(&self.output.path)
        }
    }
}

/// 书籍仓库配置
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// 章节目录所在的根目录
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// 章节链接指向的仓库地址
    #[serde(default = "default_repository_url")]
    pub repository_url: String,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_repository_url() -> String {
    "https://github.com/MKProj/ZigUnleashed".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            repository_url: default_repository_url(),
        }
    }
}

/// 输出配置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// 输出文件路径
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("README.md")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

/// README 可选段落（默认全部关闭）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadmeConfig {
    /// 软件要求段落
    #[serde(default)]
    pub software_requirements: bool,

    /// 源码统计段落
    #[serde(default)]
    pub statistics: bool,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
