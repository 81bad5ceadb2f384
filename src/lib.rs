//! # Markdown Question Extract
//!
//! 从 OCR 生成的 Markdown 中提取 AWS 认证考试题目，导出为结构化 JSON / TOML
//!
//! ## 架构设计
//!
//! ### ① 解析层（Parser）
//! - `parser/` - 纯函数：一份文档进，`Vec<Question>` 出，不做 I/O
//! - `dialect` - 各批次文档的标题 / 答案 / 投票写法，按优先级登记为数据
//! - `choice` / `hotspot` - 两种题型的题干与选项
//! - `answer` / `explanation` - 正确答案与解析
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 只处理一份文档的解析结果
//! - `Exporter` - 写 JSON / TOML / 选项行
//! - `validate` - 缺答案、重复题号、未知选项
//! - `select_by_numbers` - 按题号挑选
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量加载文档，控制并发，汇总统计
//! - `orchestrator/document_processor` - 单份文档：解析 → 挑选 → 校验 → 导出
//!
//! ## 模块结构

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::{Config, OutputFormat};
pub use error::{AppError, AppResult, ParseError};
pub use models::question::{AnswerOptions, ChoiceOption, HotspotStep, Question, QuestionKind};
pub use models::record::QuestionRecord;
pub use orchestrator::{App, ProcessingStats};
pub use parser::{extract_correct_answer, extract_document, extract_explanation, extract_questions};
