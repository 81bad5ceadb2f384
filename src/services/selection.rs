//! 按题号挑选题目

use crate::models::question::Question;
use tracing::warn;

/// 挑选结果
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// 按请求顺序排列的题目
    pub questions: Vec<Question>,
    /// 文档中不存在的题号
    pub missing: Vec<u32>,
}

/// 按题号列表挑选题目，保持列表顺序；题号重复时取文档中第一次出现的题目
pub fn select_by_numbers(questions: &[Question], numbers: &[u32]) -> Selection {
    let mut selection = Selection::default();

    for &number in numbers {
        match questions.iter().find(|q| q.number == number) {
            Some(question) => selection.questions.push(question.clone()),
            None => selection.missing.push(number),
        }
    }

    if !selection.missing.is_empty() {
        warn!("⚠️ 以下题号未在文档中找到: {:?}", selection.missing);
    }

    selection
}
