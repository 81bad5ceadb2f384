//! 单份文档处理器 - 编排层
//!
//! 解析 → 按题号挑选 → 校验 → 导出，一次只处理一份文档。
//! 解析本身是纯 CPU 计算，放到阻塞线程池里执行。

use crate::models::MarkdownDocument;
use crate::parser::{self, Extraction};
use crate::services::{log_summary, select_by_numbers, validate, Exporter, ValidationReport};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// 处理一份文档所需的共享设置
#[derive(Clone)]
pub struct DocumentJob {
    pub exporter: Arc<Exporter>,
    /// 只导出这些题号（按列表顺序）
    pub numbers: Option<Arc<Vec<u32>>>,
    pub answers_only: bool,
    pub report: bool,
}

/// 单份文档的处理结果
#[derive(Debug, Default)]
pub struct DocumentStats {
    pub headers_found: usize,
    pub extracted: usize,
    pub dropped: usize,
    pub exported: usize,
    pub missing_numbers: Vec<u32>,
    pub report: Option<ValidationReport>,
    pub output_path: Option<PathBuf>,
}

/// 处理单份文档
pub async fn process_document(
    document: MarkdownDocument,
    doc_index: usize,
    job: &DocumentJob,
) -> Result<DocumentStats> {
    log_document_start(doc_index, &document.name, document.content.chars().count());

    let mut stats = DocumentStats::default();

    if job.answers_only {
        let lines = parser::extract_answer_lines(&document.content);
        stats.exported = lines.len();
        stats.output_path = Some(job.exporter.export_answer_lines(&document.name, &lines).await?);
        log_document_complete(doc_index, &stats);
        return Ok(stats);
    }

    let content = document.content;
    let extraction: Extraction =
        tokio::task::spawn_blocking(move || parser::extract_document(&content)).await?;

    stats.headers_found = extraction.headers_found;
    stats.extracted = extraction.questions.len();
    stats.dropped = extraction.dropped.len();
    if !extraction.dropped.is_empty() {
        warn!(
            "[文档 {}] 丢弃了 {} 道无法解析的题: {:?}",
            doc_index, stats.dropped, extraction.dropped
        );
    }

    let questions = match &job.numbers {
        Some(numbers) => {
            let selection = select_by_numbers(&extraction.questions, numbers);
            stats.missing_numbers = selection.missing;
            selection.questions
        }
        None => extraction.questions,
    };

    if questions.is_empty() {
        warn!("[文档 {}] ⚠️ 没有可导出的题目: {}", doc_index, document.name);
        log_document_complete(doc_index, &stats);
        return Ok(stats);
    }

    log_summary(&document.name, &questions);

    if job.report {
        let report = validate(&questions);
        report.log(&document.name);
        stats.report = Some(report);
    }

    stats.exported = questions.len();
    stats.output_path = Some(job.exporter.export_questions(&document.name, &questions).await?);

    log_document_complete(doc_index, &stats);
    Ok(stats)
}

fn log_document_start(doc_index: usize, name: &str, chars: usize) {
    info!("\n[文档 {}] 📄 开始解析: {} ({} 字符)", doc_index, name, chars);
}

fn log_document_complete(doc_index: usize, stats: &DocumentStats) {
    info!(
        "[文档 {}] ✓ 完成: 标题 {} | 解析 {} | 丢弃 {} | 导出 {}",
        doc_index, stats.headers_found, stats.extracted, stats.dropped, stats.exported
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    fn document(content: &str) -> MarkdownDocument {
        MarkdownDocument {
            name: "saa".to_string(),
            path: PathBuf::from("saa.md"),
            content: content.to_string(),
        }
    }

    fn job(dir: &TempDir) -> DocumentJob {
        DocumentJob {
            exporter: Arc::new(Exporter::new(dir.path(), OutputFormat::Json)),
            numbers: None,
            answers_only: false,
            report: true,
        }
    }

    #[tokio::test]
    async fn test_process_document_exports_and_reports() {
        let dir = TempDir::new().unwrap();
        let doc = document("## Question #1\nQ?\nA. a\nB. b\n\n**Correct Answer:** A\n## Question #2\nNo options here.\n");

        let stats = process_document(doc, 1, &job(&dir)).await.unwrap();
        assert_eq!(stats.headers_found, 2);
        assert_eq!(stats.extracted, 1);
        assert_eq!(stats.dropped, 1);
        assert_eq!(stats.exported, 1);
        assert!(stats.report.unwrap().is_clean());
        assert!(dir.path().join("saa.json").exists());
    }

    #[tokio::test]
    async fn test_process_document_with_numbers() {
        let dir = TempDir::new().unwrap();
        let mut job = job(&dir);
        job.numbers = Some(Arc::new(vec![2, 5]));
        let doc = document("## Question #1\nQ?\nA. a\nB. b\n## Question #2\nQ?\nA. a\nB. b\n");

        let stats = process_document(doc, 1, &job).await.unwrap();
        assert_eq!(stats.exported, 1);
        assert_eq!(stats.missing_numbers, vec![5]);
    }

    #[tokio::test]
    async fn test_answers_only_mode() {
        let dir = TempDir::new().unwrap();
        let mut job = job(&dir);
        job.answers_only = true;
        let doc = document("## Question #1\nQ?\nA. a\nB. b\n");

        let stats = process_document(doc, 1, &job).await.unwrap();
        assert_eq!(stats.exported, 2);
        let written = std::fs::read_to_string(dir.path().join("saa.txt")).unwrap();
        assert_eq!(written, "A. a\nB. b\n");
    }
}
