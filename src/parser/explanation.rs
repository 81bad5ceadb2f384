//! 解析文本提取

use crate::parser::dialect::{CODE_FENCE, EXPLANATION_AFTER_VOTES, EXPLANATION_MARKERS};

/// 提取解析
///
/// 社区投票区之后第一条分隔线以下的全部内容即为解析；
/// 没有投票区时尝试旧文档的 `**Explanation:**` 标记。都没有则返回空字符串。
pub fn extract_explanation(body: &str) -> String {
    let raw = EXPLANATION_AFTER_VOTES
        .captures(body)
        .and_then(|caps| caps.get(1))
        .or_else(|| {
            EXPLANATION_MARKERS
                .iter()
                .find_map(|marker| marker.captures(body).and_then(|caps| caps.get(1)))
        });

    match raw {
        Some(m) => CODE_FENCE.replace_all(m.as_str(), "").trim().to_string(),
        None => String::new(),
    }
}
