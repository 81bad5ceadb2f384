//! 单题正文解析入口：判断题型并分派，失败时只丢弃这一题

use crate::error::ParseError;
use crate::models::question::{AnswerOptions, Question, QuestionKind};
use crate::parser::dialect::HOTSPOT_LINE;
use crate::parser::{answer, choice, explanation, hotspot};
use tracing::{debug, warn};

/// 正文是否为 HOTSPOT 题
///
/// 先找区分大小写的 `HOTSPOT`，再退到大小写不敏感的单独标记行。
pub fn is_hotspot(body: &str) -> bool {
    body.contains("HOTSPOT") || HOTSPOT_LINE.is_match(body)
}

/// 解析单题正文；失败时记录警告并返回 `None`
pub fn parse_body(number: &str, body: &str) -> Option<Question> {
    match try_parse_body(number, body) {
        Ok(question) => Some(question),
        Err(e) => {
            warn!("⚠️ 题目 #{} 解析失败，已跳过: {}", number, e);
            None
        }
    }
}

/// 解析单题正文，返回失败原因
pub fn try_parse_body(number: &str, body: &str) -> Result<Question, ParseError> {
    let number = parse_number(number)?;

    let (text, options) = if is_hotspot(body) {
        let (text, steps) = hotspot::parse(body)?;
        (text, AnswerOptions::Steps(steps))
    } else {
        let (text, choices) = choice::parse(body)?;
        (text, AnswerOptions::Choices(choices))
    };

    let question = Question {
        number,
        text,
        options,
        correct_answer: answer::extract_correct_answer(body),
        explanation: explanation::extract_explanation(body),
    };

    let unknown = question.unknown_answer_letters();
    if !unknown.is_empty() {
        warn!(
            "⚠️ 题目 #{} 的正确答案 {:?} 包含选项中不存在的字母: {:?}",
            number, question.correct_answer, unknown
        );
    }
    if question.kind() == QuestionKind::Hotspot {
        debug!(
            "题目 #{} 候选池: {:?}",
            number,
            question.options.candidate_pool()
        );
    }

    Ok(question)
}

fn parse_number(raw: &str) -> Result<u32, ParseError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::InvalidNumber(raw.to_string())),
    }
}
