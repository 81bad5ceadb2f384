//! 导出服务
//!
//! 只负责把解析结果写到磁盘，不关心解析流程。

use crate::config::OutputFormat;
use crate::error::{AppError, AppResult, ExportError};
use crate::models::question::Question;
use crate::models::record::{QuestionRecord, RecordDocument};
use crate::utils::logging::truncate_text;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// 导出服务
pub struct Exporter {
    output_folder: PathBuf,
    format: OutputFormat,
}

impl Exporter {
    pub fn new(output_folder: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            output_folder: output_folder.into(),
            format,
        }
    }

    /// 导出一份文档的题目，返回写入的文件路径
    pub async fn export_questions(&self, stem: &str, questions: &[Question]) -> AppResult<PathBuf> {
        let path = self
            .output_folder
            .join(format!("{}.{}", stem, self.format.extension()));
        let content = render(stem, questions, self.format)?;

        write_file(&path, &content).await?;
        info!("💾 已导出 {} 道题 -> {}", questions.len(), path.display());
        Ok(path)
    }

    /// 只导出选项行（每行一个 `A. xxx`）
    pub async fn export_answer_lines(&self, stem: &str, lines: &[String]) -> AppResult<PathBuf> {
        let path = self.output_folder.join(format!("{}.txt", stem));
        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }

        write_file(&path, &content).await?;
        info!("💾 已导出 {} 行选项 -> {}", lines.len(), path.display());
        Ok(path)
    }
}

/// 按格式渲染题目列表
pub fn render(source: &str, questions: &[Question], format: OutputFormat) -> Result<String, ExportError> {
    let records: Vec<QuestionRecord> = questions.iter().map(QuestionRecord::from).collect();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&records)?),
        OutputFormat::Toml => {
            let document = RecordDocument {
                source: source.to_string(),
                questions: records,
            };
            Ok(toml::to_string_pretty(&document)?)
        }
    }
}

async fn write_file(path: &Path, content: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::file_write_failed(parent.display().to_string(), e))?;
    }
    fs::write(path, content)
        .await
        .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;
    debug!("写入 {} 字节: {}", content.len(), path.display());
    Ok(())
}

/// 在日志中预览前三道题
pub fn log_summary(stem: &str, questions: &[Question]) {
    info!("📋 [{}] 预览（共 {} 道题）:", stem, questions.len());
    for question in questions.iter().take(3) {
        info!(
            "  #{} [{}] {} | 选项 {} 个 | 答案: {} | 解析 {} 字",
            question.number,
            question.kind(),
            truncate_text(&question.text, 40),
            question.options.len(),
            question.correct_answer.as_deref().unwrap_or("无"),
            question.explanation.chars().count()
        );
    }
}
