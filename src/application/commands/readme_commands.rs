//! README Commands

/// 重新生成 README 命令
#[derive(Debug, Clone)]
pub struct GenerateReadme {
    /// 章节链接指向的仓库地址
    pub repository_url: String,
    /// 是否追加软件要求段落
    pub software_requirements: bool,
    /// 是否追加源码统计段落
    pub statistics: bool,
}
