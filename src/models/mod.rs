pub mod loaders;
pub mod question;
pub mod record;

pub use loaders::{
    load_markdown_document, load_markdown_documents, load_question_numbers, MarkdownDocument,
};
pub use question::{AnswerOptions, ChoiceOption, HotspotStep, Question, QuestionKind};
pub use record::{QuestionRecord, RecordAnswers, RecordDocument};
