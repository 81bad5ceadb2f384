//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文档处理器
//! - 管理应用生命周期（初始化、运行）
//! - 批量加载文档（Vec<MarkdownDocument>）
//! - 控制并发数量（Semaphore）
//! - 输出全局统计信息
//!
//! ### `document_processor` - 单份文档处理器
//! - 调用解析层得到 Vec<Question>
//! - 按题号挑选、校验、导出
//! - 输出单份文档的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<MarkdownDocument>)
//!     ↓
//! document_processor (处理一份文档)
//!     ↓
//! parser (纯函数：文本 → Vec<Question>)
//!     ↓
//! services (导出 / 校验 / 挑选)
//! ```

pub mod batch_processor;
pub mod document_processor;

pub use batch_processor::{App, ProcessingStats};
pub use document_processor::{process_document, DocumentJob, DocumentStats};
