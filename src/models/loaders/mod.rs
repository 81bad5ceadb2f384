pub mod markdown_loader;
pub mod number_list;

pub use markdown_loader::{load_markdown_document, load_markdown_documents, MarkdownDocument};
pub use number_list::{load_question_numbers, parse_question_numbers};
