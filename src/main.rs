//! chapterdex - 根据磁盘上的章节目录重新生成 README.md

use std::sync::Arc;

use anyhow::Context;

use chapterdex::application::{GenerateReadme, GenerateReadmeHandler};
use chapterdex::config::{load_config, print_config, AppConfig, LogConfig};
use chapterdex::domain::ChapterTable;
use chapterdex::infrastructure::{FileDocumentSink, FsChapterProbe, FsSourceStats};

fn init_logging(log: &LogConfig) {
    let log_filter = format!("{},chapterdex={}", log.level, log.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    // 日志写到 stderr
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(config: &AppConfig) -> anyhow::Result<()> {
    let root = &config.project.root;

    // 章节表在启动时构造一次，之后只读
    let table = ChapterTable::zig_unleashed().context("Invalid chapter table")?;
    tracing::debug!("Chapter table: {} chapters", table.len());
    let table = Arc::new(table);

    let handler = GenerateReadmeHandler::new(
        table,
        Arc::new(FsChapterProbe::new(root)),
        Arc::new(FileDocumentSink::new(config.output_path())),
        Arc::new(FsSourceStats::new(root)),
    );

    let command = GenerateReadme {
        repository_url: config.project.repository_url.clone(),
        software_requirements: config.readme.software_requirements,
        statistics: config.readme.statistics,
    };

    let response = handler
        .handle(command)
        .with_context(|| format!("Failed to generate {}", config.output_path().display()))?;

    let listed: Vec<String> = response
        .chapters
        .iter()
        .map(|c| c.dir_name())
        .collect();
    tracing::info!(
        "Wrote {} ({} bytes), chapters: [{}]",
        response.output_path.display(),
        response.bytes_written,
        listed.join(", ")
    );

    Ok(())
}

fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().context("Failed to load config")?;

    init_logging(&config.log);

    tracing::info!("chapterdex - README generator");
    print_config(&config);

    if let Err(e) = run(&config) {
        tracing::error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}
