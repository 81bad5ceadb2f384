//! 批量文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量文档的加载、并发调度和全局统计。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：写日志文件头、准备导出服务、读取题号列表
//! 2. **批量加载**：扫描并加载所有待解析的 Markdown 文档
//! 3. **并发控制**：使用 Semaphore 限制同时解析的文档数量
//! 4. **全局统计**：汇总所有文档的处理结果
//!
//! 单份文档的细节委托给 `document_processor`。

use crate::config::Config;
use crate::models::{load_markdown_documents, load_question_numbers, MarkdownDocument};
use crate::orchestrator::document_processor::{self, DocumentJob, DocumentStats};
use crate::services::Exporter;
use crate::utils::logging;
use anyhow::Result;
use futures::future::join_all;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    job: DocumentJob,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        logging::init_log_file(&config.output_log_file)?;
        logging::log_startup(&config);

        let numbers = match &config.numbers_file {
            Some(path) => {
                let numbers = load_question_numbers(Path::new(path)).await?;
                info!("🔢 从 {} 读取了 {} 个题号", path, numbers.len());
                Some(Arc::new(numbers))
            }
            None => None,
        };

        let job = DocumentJob {
            exporter: Arc::new(Exporter::new(&config.output_folder, config.output_format)),
            numbers,
            answers_only: config.answers_only,
            report: config.report,
        };

        Ok(Self { config, job })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<ProcessingStats> {
        let documents = self.load_documents().await?;

        if documents.is_empty() {
            warn!("⚠️ 没有找到待解析的Markdown文件，程序结束");
            return Ok(ProcessingStats::default());
        }

        logging::log_documents_loaded(documents.len(), self.config.max_concurrent_documents);

        let stats = self.process_all_documents(documents).await?;
        logging::print_final_stats(&stats, &self.config.output_log_file);

        Ok(stats)
    }

    /// 加载文档
    async fn load_documents(&self) -> Result<Vec<MarkdownDocument>> {
        info!("\n📁 正在扫描待解析的文档: {}", self.config.input_path);
        load_markdown_documents(&self.config.input_path).await
    }

    /// 并发处理所有文档
    async fn process_all_documents(&self, documents: Vec<MarkdownDocument>) -> Result<ProcessingStats> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_documents));
        let mut handles = Vec::with_capacity(documents.len());

        for (idx, document) in documents.into_iter().enumerate() {
            let doc_index = idx + 1;
            let permit = semaphore.clone().acquire_owned().await?;
            let job = self.job.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                document_processor::process_document(document, doc_index, &job).await
            });
            handles.push((doc_index, handle));
        }

        let (indices, handles): (Vec<usize>, Vec<_>) = handles.into_iter().unzip();
        let results = join_all(handles).await;

        let mut stats = ProcessingStats {
            total: indices.len(),
            ..Default::default()
        };

        for (doc_index, result) in indices.into_iter().zip(results) {
            match result {
                Ok(Ok(doc_stats)) => stats.record(&doc_stats),
                Ok(Err(e)) => {
                    error!("[文档 {}] ❌ 处理过程中发生错误: {:#}", doc_index, e);
                    stats.failed += 1;
                }
                Err(e) => {
                    error!("[文档 {}] 任务执行失败: {}", doc_index, e);
                    stats.failed += 1;
                }
            }
        }

        Ok(stats)
    }
}

/// 全局处理统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    /// 文档总数
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    /// 成功解析的题目数
    pub questions: usize,
    /// 因解析失败丢弃的题目数
    pub dropped: usize,
    /// 导出的题目（或选项行）数
    pub exported: usize,
    /// 缺少正确答案的题目数（仅在开启校验报告时统计）
    pub null_answers: usize,
}

impl ProcessingStats {
    fn record(&mut self, doc: &DocumentStats) {
        self.success += 1;
        self.questions += doc.extracted;
        self.dropped += doc.dropped;
        self.exported += doc.exported;
        if let Some(report) = &doc.report {
            self.null_answers += report.null_answers.len();
        }
    }
}
