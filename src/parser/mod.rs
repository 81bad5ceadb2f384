//! Markdown 题目解析（纯函数层）
//!
//! ## 流程
//!
//! ```text
//! 整份文档
//!     ↓ splitter::split        按题目标题切分
//! (题号, 正文) 序列
//!     ↓ body::parse_body       判断题型并分派
//! choice / hotspot             题干 + 选项
//! answer                       显式答案 → HOTSPOT 答案区 → 社区投票
//! explanation                  投票区分隔线之后的解析
//!     ↓
//! Vec<Question>
//! ```
//!
//! 本层不做任何 I/O，也没有共享状态：同一份文档解析多少次结果都相同，
//! 不同文档可以放心地并发解析。

pub mod answer;
pub mod body;
pub mod choice;
pub mod dialect;
pub mod explanation;
pub mod hotspot;
pub mod splitter;

pub use answer::extract_correct_answer;
pub use body::{is_hotspot, parse_body};
pub use choice::extract_answer_lines;
pub use explanation::extract_explanation;

use crate::models::question::Question;

/// 一份文档的解析结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// 成功解析的题目（文档顺序）
    pub questions: Vec<Question>,
    /// 找到的题目标题数
    pub headers_found: usize,
    /// 因解析失败而丢弃的题号
    pub dropped: Vec<String>,
}

/// 解析整份文档，返回题目列表
///
/// 单题失败只会丢弃该题；空文档或没有任何标题时返回空列表。
pub fn extract_questions(document: &str) -> Vec<Question> {
    extract_document(document).questions
}

/// 解析整份文档，同时保留统计信息
pub fn extract_document(document: &str) -> Extraction {
    let raw = splitter::split(document);
    let mut extraction = Extraction {
        headers_found: raw.len(),
        ..Default::default()
    };

    for item in raw {
        match parse_body(item.number, item.body) {
            Some(question) => extraction.questions.push(question),
            None => extraction.dropped.push(item.number.to_string()),
        }
    }

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::{AnswerOptions, ChoiceOption, QuestionKind};

    #[test]
    fn test_single_question_with_votes_and_explanation() {
        let doc = "## Question #1\nWhat is S3?\nA. Storage\nB. Compute\n\n**Correct Answer:** B\n\n**Community vote distribution**\n- B (100%)\n---\nExplanation text.";
        let questions = extract_questions(doc);
        assert_eq!(questions.len(), 1);

        let q = &questions[0];
        assert_eq!(q.number, 1);
        assert_eq!(q.text, "What is S3?");
        assert_eq!(
            q.options,
            AnswerOptions::Choices(vec![
                ChoiceOption::new('A', "Storage"),
                ChoiceOption::new('B', "Compute"),
            ])
        );
        assert_eq!(q.correct_answer.as_deref(), Some("B"));
        assert_eq!(q.explanation, "Explanation text.");
    }

    #[test]
    fn test_hotspot_step_sections() {
        let doc = "## Question #5\nHOTSPOT\nSelect the step order.\n\n**Hot Area:**\n\n**Step 1:**\n- Select...\n- Create bucket\n- Upload object\n\n**Step 2:**\n- Select...\n- Enable versioning\n- Enable logging\n\n**Correct Answer:**\n\n**Step 1:** **Create bucket**\n\n**Step 2:** **Enable versioning**\n";
        let questions = extract_questions(doc);
        assert_eq!(questions.len(), 1);

        let q = &questions[0];
        assert_eq!(q.kind(), QuestionKind::Hotspot);
        let AnswerOptions::Steps(steps) = &q.options else {
            panic!("应为 HOTSPOT 步骤");
        };
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].id, "step1");
        assert_eq!(steps[0].candidates, vec!["Create bucket", "Upload object"]);
        assert_eq!(steps[1].id, "step2");
        assert_eq!(steps[1].candidates, vec!["Enable versioning", "Enable logging"]);
        assert_eq!(
            q.correct_answer.as_deref(),
            Some(r#"{"Step 1":"Create bucket","Step 2":"Enable versioning"}"#)
        );
    }

    #[test]
    fn test_vote_fallback_without_explicit_answer() {
        let doc = "## Question #2\nWhich?\nA. one\nB. two\nC. three\n\n**Community vote distribution**\n- A (0%)\n- B (37%)\n- C (63%)\n---\n";
        let questions = extract_questions(doc);
        assert_eq!(questions[0].correct_answer.as_deref(), Some("C"));
    }

    #[test]
    fn test_explicit_answer_beats_vote_majority() {
        let doc = "## Question #3\nWhich?\nA. one\nB. two\nC. three\n\n**Correct Answer:** A\n\n**Community vote distribution**\n- C (80%)\n- A (20%)\n---\n";
        let questions = extract_questions(doc);
        assert_eq!(questions[0].correct_answer.as_deref(), Some("A"));
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let doc = "## Question #1\nQ1?\nA. a\nB. b\n\n**Correct Answer:** A\n## Question #2\nHOTSPOT\nPick.\n- x\n- y\n";
        assert_eq!(extract_document(doc), extract_document(doc));
    }

    #[test]
    fn test_well_formed_document_yields_every_question() {
        let doc: String = (1..=5)
            .map(|n| {
                format!(
                    "## Question #{n}\nWhich service fits case {n}?\nA. one\nB. two\nC. three\nD. four\n\n**Correct Answer:** C\n\n"
                )
            })
            .collect();
        let questions = extract_questions(&doc);

        assert_eq!(questions.len(), 5);
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q.number as usize, i + 1);
            assert_eq!(q.options.len(), 4);
            assert!(q.correct_answer.is_some());
        }
    }

    #[test]
    fn test_option_letters_strictly_increase() {
        let doc = "## Question #1\nQ?\n- A. one\n- C. three\n- B. late\n- D. four\n";
        let questions = extract_questions(doc);
        let letters = questions[0].options.letters();
        assert_eq!(letters, vec!['A', 'C', 'D']);
        assert!(letters.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_question_without_options_is_dropped() {
        let doc = "## Question #1\nSee the exhibit below.\n\n## Question #2\nQ?\nA. yes\nB. no\n";
        let extraction = extract_document(doc);
        assert_eq!(extraction.headers_found, 2);
        assert_eq!(extraction.dropped, vec!["1".to_string()]);
        assert_eq!(extraction.questions.len(), 1);
        assert_eq!(extraction.questions[0].number, 2);
    }

    #[test]
    fn test_empty_document() {
        assert!(extract_questions("").is_empty());
        assert!(extract_questions("# Cover page only\n").is_empty());
    }
}
