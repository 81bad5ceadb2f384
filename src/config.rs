use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// 导出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

impl OutputFormat {
    /// 导出文件扩展名
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Toml => "toml",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "toml" => Ok(OutputFormat::Toml),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 输入路径：单个 .md 文件或包含 .md 文件的目录
    pub input_path: String,
    /// 导出目录
    pub output_folder: String,
    /// 同时解析的文档数量
    pub max_concurrent_documents: usize,
    /// 导出格式
    pub output_format: OutputFormat,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 只导出 `A. xxx` 形式的选项行
    pub answers_only: bool,
    /// 题号列表文件；设置后只导出列表中的题目
    pub numbers_file: Option<String>,
    /// 是否输出校验报告
    pub report: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: "output_md".to_string(),
            output_folder: "output_json".to_string(),
            max_concurrent_documents: 8,
            output_format: OutputFormat::Json,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            answers_only: false,
            numbers_file: None,
            report: false,
        }
    }
}

impl Config {
    /// 从环境变量读取配置，缺失或无法解析的值使用默认值
    pub fn from_env() -> Self {
        let (config, issues) = Self::from_env_checked();
        for issue in &issues {
            warn!("⚠️ {}，使用默认值", issue);
        }
        config
    }

    /// 从环境变量读取配置，同时返回无法解析的变量
    ///
    /// 供日志初始化之前调用：此时 `warn!` 还没有输出目标，由调用方稍后记录。
    pub fn from_env_checked() -> (Self, Vec<ConfigError>) {
        let default = Self::default();
        let mut issues = Vec::new();

        let config = Self {
            input_path: std::env::var("EXTRACT_INPUT_PATH").unwrap_or(default.input_path),
            output_folder: std::env::var("EXTRACT_OUTPUT_FOLDER").unwrap_or(default.output_folder),
            max_concurrent_documents: env_parse("MAX_CONCURRENT_DOCUMENTS", "usize", &mut issues)
                .filter(|&n: &usize| n > 0)
                .unwrap_or(default.max_concurrent_documents),
            output_format: env_parse("OUTPUT_FORMAT", "json|toml", &mut issues)
                .unwrap_or(default.output_format),
            verbose_logging: env_parse("VERBOSE_LOGGING", "bool", &mut issues)
                .unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            ..default
        };

        (config, issues)
    }
}

/// 读取并解析环境变量；解析失败时记入 `issues` 并返回 `None`
fn env_parse<T: FromStr>(
    var_name: &str,
    expected_type: &str,
    issues: &mut Vec<ConfigError>,
) -> Option<T> {
    let value = std::env::var(var_name).ok()?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            issues.push(ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            });
            None
        }
    }
}
