//! 导出记录
//!
//! 下游导入脚本沿用的 JSON 结构：`answers` 对选择题是字符串数组，
//! 对 HOTSPOT 题是 `stepN -> [候选项]` 的对象，并带 `"type": "steps"`。

use crate::models::question::{AnswerOptions, HotspotStep, Question};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// 导出时 `type` 字段的取值
pub const STEPS_TYPE: &str = "steps";

/// 单条导出记录
#[derive(Debug, Clone, Serialize)]
pub struct QuestionRecord {
    pub question_number: u32,
    pub question_text: String,
    pub answers: RecordAnswers,
    pub correct_answer: Option<String>,
    pub explanation: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// `answers` 字段的两种形状
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RecordAnswers {
    List(Vec<String>),
    #[serde(serialize_with = "serialize_steps")]
    Steps(Vec<HotspotStep>),
}

fn serialize_steps<S>(steps: &[HotspotStep], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(steps.len()))?;
    for step in steps {
        map.serialize_entry(&step.id, &step.candidates)?;
    }
    map.end()
}

impl From<&Question> for QuestionRecord {
    fn from(question: &Question) -> Self {
        let (answers, kind) = match &question.options {
            AnswerOptions::Choices(choices) => (
                RecordAnswers::List(choices.iter().map(|c| c.to_string()).collect()),
                None,
            ),
            AnswerOptions::Steps(steps) => (
                RecordAnswers::Steps(steps.clone()),
                Some(STEPS_TYPE.to_string()),
            ),
        };

        Self {
            question_number: question.number,
            question_text: question.text.clone(),
            answers,
            correct_answer: question.correct_answer.clone(),
            explanation: question.explanation.clone(),
            kind,
        }
    }
}

/// TOML 导出的顶层结构（TOML 不允许顶层数组）
#[derive(Debug, Clone, Serialize)]
pub struct RecordDocument {
    pub source: String,
    pub questions: Vec<QuestionRecord>,
}
