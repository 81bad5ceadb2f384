//! 正确答案提取
//!
//! 按信号强弱依次尝试，先命中的为准：
//!
//! 1. 显式的 `Correct Answer` 写法（见 [`EXPLICIT_ANSWER_PATTERNS`]）
//! 2. HOTSPOT 题：正确答案区里每个步骤/特性被加粗的选项，序列化为 JSON
//! 3. 选择题：社区投票分布中百分比最高的选项
//!
//! 都没有时返回 `None`，这是源数据本身缺失，不是错误。

use crate::parser::body::is_hotspot;
use crate::parser::dialect::{
    is_placeholder, BOLD_SPAN, CORRECT_SECTION_END, CORRECT_SECTION_START,
    EXPLICIT_ANSWER_PATTERNS, FEATURE_ANSWER, FEATURE_HEADER, FENCED_BLOCK, STEP_HEADING,
    STEP_LABEL, VOTE_PATTERNS, VOTE_SECTION,
};
use serde_json::{Map, Value};
use tracing::debug;

/// 多个步骤答案的连接符（无法构造映射时使用）
pub const STEP_ANSWER_DELIMITER: &str = " | ";

/// 投票区里解析出的一条记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteMatch {
    /// 选项字母（已去掉空白）
    pub option: String,
    pub percentage: u32,
    /// 命中的写法名称
    pub pattern: &'static str,
}

/// 提取正确答案
pub fn extract_correct_answer(body: &str) -> Option<String> {
    if let Some(answer) = explicit_answer(body) {
        return Some(answer);
    }

    if is_hotspot(body) {
        return hotspot_answer(body);
    }

    vote_answer(body)
}

/// 显式写出的答案，规范化为大写字母串（去掉逗号和空白）
pub fn explicit_answer(body: &str) -> Option<String> {
    EXPLICIT_ANSWER_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.regex.captures(body)?;
        let answer: String = caps[1]
            .chars()
            .filter(|c| *c != ',' && !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        debug!("显式答案命中写法 {}: {}", pattern.name, answer);
        (!answer.is_empty()).then_some(answer)
    })
}

/// HOTSPOT 题的正确答案
///
/// 优先返回 `{"Step 1": "...", ...}` 或 `{"特性": "..."}` 形式的 JSON；
/// 构造不出映射时退回到各步骤加粗文本的 `" | "` 拼接。
pub fn hotspot_answer(body: &str) -> Option<String> {
    let start = CORRECT_SECTION_START.find(body)?.end();
    let rest = &body[start..];
    let end = CORRECT_SECTION_END
        .find(rest)
        .map(|m| m.start())
        .unwrap_or(rest.len());
    let section = rest[..end].trim();

    let search = FENCED_BLOCK
        .captures(section)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(section);

    let mut selections = step_selections(search);
    if selections.is_empty() {
        selections = feature_selections(search);
    }

    if !selections.is_empty() {
        return serde_json::to_string(&selections).ok();
    }

    let joined = fallback_step_list(section);
    (!joined.is_empty()).then(|| joined.join(STEP_ANSWER_DELIMITER))
}

/// 每个步骤标题及其内容
fn step_sections(text: &str) -> Vec<(String, &str)> {
    let headings: Vec<(String, usize, usize)> = STEP_HEADING
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let number = caps.get(1).or_else(|| caps.get(2))?;
            Some((format!("Step {}", number.as_str()), whole.start(), whole.end()))
        })
        .collect();

    headings
        .iter()
        .enumerate()
        .map(|(i, (id, _, content_start))| {
            let content_end = headings
                .get(i + 1)
                .map(|(_, next, _)| *next)
                .unwrap_or(text.len());
            let content = &text[*content_start..content_end];
            let content = content.split("---").next().unwrap_or(content);
            (id.clone(), content)
        })
        .collect()
}

fn first_selected(content: &str) -> Option<String> {
    BOLD_SPAN
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| normalize_space(m.as_str()))
        .find(|text| !is_placeholder(text) && !STEP_LABEL.is_match(text))
}

fn step_selections(search: &str) -> Map<String, Value> {
    let mut selections = Map::new();
    for (id, content) in step_sections(search) {
        if let Some(selected) = first_selected(content) {
            selections.entry(id).or_insert(Value::String(selected));
        }
    }
    selections
}

/// `- **特性:**` 下面一行 `- **答案**` 的写法
fn feature_selections(search: &str) -> Map<String, Value> {
    let mut selections = Map::new();
    let mut current_feature: Option<String> = None;

    for line in search.lines().map(str::trim) {
        if let Some(caps) = FEATURE_HEADER.captures(line) {
            current_feature = Some(caps[1].trim().to_string());
            continue;
        }

        let Some(feature) = &current_feature else {
            continue;
        };
        if !line.contains("**") || line.starts_with("- Select") {
            continue;
        }

        if let Some(caps) = FEATURE_ANSWER.captures(line) {
            let answer = caps[1].trim();
            if !answer.contains(':') && !is_placeholder(answer) && answer.chars().count() > 3 {
                selections.insert(feature.clone(), Value::String(answer.to_string()));
            }
        }
    }

    selections
}

/// 整个正确答案区（不限代码块）里各步骤第一个加粗文本，去重
fn fallback_step_list(section: &str) -> Vec<String> {
    let mut answers: Vec<String> = Vec::new();
    for (_, content) in step_sections(section) {
        if let Some(selected) = first_selected(content) {
            if !answers.contains(&selected) {
                answers.push(selected);
            }
        }
    }
    answers
}

fn normalize_space(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 投票区内所有写法的匹配结果，按写法顺序、再按出现顺序排列
pub fn vote_tally(body: &str) -> Vec<VoteMatch> {
    let Some(section) = VOTE_SECTION.captures(body).and_then(|caps| caps.get(1)) else {
        return Vec::new();
    };
    let text = section.as_str().trim();

    VOTE_PATTERNS
        .iter()
        .flat_map(|pattern| {
            pattern.regex.captures_iter(text).filter_map(move |caps| {
                let option = pattern.transform.apply(caps.get(1)?.as_str())?;
                let percentage = caps.get(2)?.as_str().parse().ok()?;
                Some(VoteMatch {
                    option,
                    percentage,
                    pattern: pattern.name,
                })
            })
        })
        .collect()
}

/// 投票百分比最高的选项
///
/// 只有严格更高才替换，所以并列时取合并顺序中第一个到达最高值的；
/// 全部为 0% 时返回 `None`。
pub fn vote_answer(body: &str) -> Option<String> {
    let tally = vote_tally(body);
    let mut best: Option<&VoteMatch> = None;

    for vote in &tally {
        if vote.percentage > best.map_or(0, |b| b.percentage) {
            best = Some(vote);
        }
    }

    best.map(|vote| {
        debug!(
            "投票答案: {} ({}%，写法 {})",
            vote.option, vote.percentage, vote.pattern
        );
        vote.option.clone()
    })
}
