//! 命令行参数
//!
//! 命令行参数覆盖环境变量中的同名配置。

use crate::config::{Config, OutputFormat};
use clap::Parser;

/// 从 OCR 生成的 Markdown 中提取 AWS 认证考试题目
#[derive(Debug, Parser)]
#[command(name = "md_question_extract", version, about)]
pub struct Cli {
    /// 单个 .md 文件或包含 .md 文件的目录
    pub input: Option<String>,

    /// 导出目录
    #[arg(short, long)]
    pub output: Option<String>,

    /// 导出格式：json 或 toml
    #[arg(long, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// 只导出 `A. xxx` 形式的选项行
    #[arg(long)]
    pub answers_only: bool,

    /// 题号列表文件（每行一个题号），只导出其中的题目
    #[arg(long, value_name = "FILE")]
    pub numbers: Option<String>,

    /// 输出校验报告（缺答案、重复题号、未知选项）
    #[arg(long)]
    pub report: bool,

    /// 同时解析的文档数量
    #[arg(short = 'j', long)]
    pub jobs: Option<usize>,

    /// 显示详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_format(raw: &str) -> Result<OutputFormat, String> {
    raw.parse().map_err(|e: crate::error::ConfigError| e.to_string())
}

impl Cli {
    /// 把命令行参数合并到配置中
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(input) = self.input {
            config.input_path = input;
        }
        if let Some(output) = self.output {
            config.output_folder = output;
        }
        if let Some(format) = self.format {
            config.output_format = format;
        }
        if let Some(jobs) = self.jobs.filter(|&n| n > 0) {
            config.max_concurrent_documents = jobs;
        }
        if self.numbers.is_some() {
            config.numbers_file = self.numbers;
        }
        config.answers_only |= self.answers_only;
        config.report |= self.report;
        config.verbose_logging |= self.verbose;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "md_question_extract",
            "exam.md",
            "-o",
            "out",
            "--format",
            "toml",
            "--numbers",
            "nums.txt",
            "--report",
            "-v",
        ]);
        let config = cli.apply(Config::default());

        assert_eq!(config.input_path, "exam.md");
        assert_eq!(config.output_folder, "out");
        assert_eq!(config.output_format, OutputFormat::Toml);
        assert_eq!(config.numbers_file.as_deref(), Some("nums.txt"));
        assert!(config.report);
        assert!(config.verbose_logging);
        assert!(!config.answers_only);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["md_question_extract", "--format", "yaml"]).is_err());
    }
}
