//! 解析结果校验
//!
//! 只报告问题，不修改题目：缺答案、重复题号、答案引用了不存在的选项字母。

use crate::models::question::Question;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// 一份文档的校验报告
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub total: usize,
    /// 正确答案为空的题号
    pub null_answers: Vec<u32>,
    /// 出现多次的题号及次数
    pub duplicates: Vec<(u32, usize)>,
    /// 答案中含未知字母的题号及字母
    pub unknown_letters: Vec<(u32, Vec<char>)>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.null_answers.is_empty() && self.duplicates.is_empty() && self.unknown_letters.is_empty()
    }

    /// 有正确答案的题目占比
    pub fn answer_coverage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.total - self.null_answers.len()) as f64 / self.total as f64
    }

    pub fn log(&self, source: &str) {
        if self.is_clean() {
            info!("✅ [{}] 校验通过：{} 道题全部有答案", source, self.total);
            return;
        }

        info!(
            "📊 [{}] 答案覆盖率 {:.1}% ({}/{})",
            source,
            self.answer_coverage() * 100.0,
            self.total - self.null_answers.len(),
            self.total
        );
        if !self.null_answers.is_empty() {
            warn!("⚠️ [{}] 缺少答案的题号: {:?}", source, self.null_answers);
        }
        for (number, count) in &self.duplicates {
            warn!("⚠️ [{}] 题号 {} 出现了 {} 次", source, number, count);
        }
        for (number, letters) in &self.unknown_letters {
            warn!("⚠️ [{}] 题号 {} 的答案含未知选项: {:?}", source, number, letters);
        }
    }
}

/// 校验一份文档的题目
pub fn validate(questions: &[Question]) -> ValidationReport {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for question in questions {
        *counts.entry(question.number).or_default() += 1;
    }

    ValidationReport {
        total: questions.len(),
        null_answers: questions
            .iter()
            .filter(|q| q.correct_answer.is_none())
            .map(|q| q.number)
            .collect(),
        duplicates: counts.into_iter().filter(|&(_, count)| count > 1).collect(),
        unknown_letters: questions
            .iter()
            .map(|q| (q.number, q.unknown_answer_letters()))
            .filter(|(_, letters)| !letters.is_empty())
            .collect(),
    }
}
