use serde::{Deserialize, Serialize};
use std::fmt;

/// 题目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// 普通选择题（A-F 字母选项）
    MultipleChoice,
    /// HOTSPOT 题（按步骤/特性的下拉选择）
    Hotspot,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::MultipleChoice => write!(f, "multiple_choice"),
            QuestionKind::Hotspot => write!(f, "hotspot"),
        }
    }
}

/// 单个字母选项，例如 `A. Amazon S3`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub letter: char,
    pub text: String,
}

impl ChoiceOption {
    pub fn new(letter: char, text: impl Into<String>) -> Self {
        Self {
            letter,
            text: text.into(),
        }
    }
}

impl fmt::Display for ChoiceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.letter, self.text)
    }
}

/// HOTSPOT 题的一个步骤及其下拉候选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotspotStep {
    /// 步骤标识，形如 `step1`
    pub id: String,
    pub candidates: Vec<String>,
}

impl HotspotStep {
    pub fn new(number: usize, candidates: Vec<String>) -> Self {
        Self {
            id: format!("step{}", number),
            candidates,
        }
    }
}

/// 题目的选项
///
/// 选择题是有序的字母选项；HOTSPOT 题是 `stepN -> 候选项` 的有序映射。
/// 导出时的旧格式（字符串 / JSON 字符串）只在 `record` 模块里处理。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOptions {
    Choices(Vec<ChoiceOption>),
    Steps(Vec<HotspotStep>),
}

impl AnswerOptions {
    pub fn kind(&self) -> QuestionKind {
        match self {
            AnswerOptions::Choices(_) => QuestionKind::MultipleChoice,
            AnswerOptions::Steps(_) => QuestionKind::Hotspot,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            AnswerOptions::Choices(choices) => choices.len(),
            AnswerOptions::Steps(steps) => steps.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 选择题的字母列表（HOTSPOT 题为空）
    pub fn letters(&self) -> Vec<char> {
        match self {
            AnswerOptions::Choices(choices) => choices.iter().map(|c| c.letter).collect(),
            AnswerOptions::Steps(_) => Vec::new(),
        }
    }

    /// 所有步骤共享的候选池（去重，保持首次出现顺序），只用于日志/报告
    pub fn candidate_pool(&self) -> Vec<&str> {
        let mut pool: Vec<&str> = Vec::new();
        if let AnswerOptions::Steps(steps) = self {
            for candidate in steps.iter().flat_map(|s| s.candidates.iter()) {
                if !pool.contains(&candidate.as_str()) {
                    pool.push(candidate);
                }
            }
        }
        pool
    }
}

/// 解析出的一道题
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// 题号（正整数，下游唯一的关联键）
    pub number: u32,
    pub text: String,
    pub options: AnswerOptions,
    /// 选择题为紧凑字母串（如 `AC`）；HOTSPOT 题为序列化后的步骤映射
    pub correct_answer: Option<String>,
    /// 没有解析到时为空字符串
    pub explanation: String,
}

impl Question {
    pub fn kind(&self) -> QuestionKind {
        self.options.kind()
    }

    /// 正确答案中不在选项里的字母（仅选择题）
    pub fn unknown_answer_letters(&self) -> Vec<char> {
        let (AnswerOptions::Choices(_), Some(answer)) = (&self.options, &self.correct_answer)
        else {
            return Vec::new();
        };
        let letters = self.options.letters();
        answer.chars().filter(|c| !letters.contains(c)).collect()
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Question #{} [{}]: {} 个选项, 答案: {}, 解析: {} 字符",
            self.number,
            self.kind(),
            self.options.len(),
            self.correct_answer.as_deref().unwrap_or("无"),
            self.explanation.chars().count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice_question(answer: Option<&str>) -> Question {
        Question {
            number: 1,
            text: "What is S3?".to_string(),
            options: AnswerOptions::Choices(vec![
                ChoiceOption::new('A', "Storage"),
                ChoiceOption::new('B', "Compute"),
            ]),
            correct_answer: answer.map(str::to_string),
            explanation: String::new(),
        }
    }

    #[test]
    fn test_unknown_answer_letters() {
        assert!(choice_question(Some("B")).unknown_answer_letters().is_empty());
        assert_eq!(choice_question(Some("BD")).unknown_answer_letters(), vec!['D']);
        assert!(choice_question(None).unknown_answer_letters().is_empty());
    }

    #[test]
    fn test_candidate_pool_dedupes_across_steps() {
        let options = AnswerOptions::Steps(vec![
            HotspotStep::new(1, vec!["Lambda".into(), "EC2".into()]),
            HotspotStep::new(2, vec!["EC2".into(), "S3".into()]),
        ]);
        assert_eq!(options.kind(), QuestionKind::Hotspot);
        assert_eq!(options.candidate_pool(), vec!["Lambda", "EC2", "S3"]);
        assert!(options.letters().is_empty());
    }
}
