//! 业务能力层：导出、校验、按题号挑选
//!
//! 每个服务只处理一份文档的解析结果，不关心批量调度。

pub mod exporter;
pub mod selection;
pub mod validation;

pub use exporter::{log_summary, render, Exporter};
pub use selection::{select_by_numbers, Selection};
pub use validation::{validate, ValidationReport};
