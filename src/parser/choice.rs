//! 普通选择题解析：题干 + A-F 字母选项

use crate::error::ParseError;
use crate::models::question::ChoiceOption;
use crate::parser::dialect::{
    ANSWER_LINE, ANSWER_SECTION, CASE_STUDY, CODE_FENCE, LINE_OPTION, LOOSE_OPTION, OPTION_END,
    TOPIC_LINE,
};
use regex::Regex;
use tracing::debug;

/// 选项标记在正文中的位置
#[derive(Debug, Clone, Copy)]
struct OptionMarker {
    letter: char,
    /// 标记起点（题干到此为止）
    start: usize,
    /// 选项文本起点
    text_start: usize,
}

/// 解析选择题正文，返回题干和选项
pub fn parse(body: &str) -> Result<(String, Vec<ChoiceOption>), ParseError> {
    // 选项只在答案/投票/解析区之前查找，避免把解析里的 "A. ..." 当成选项
    let region_end = ANSWER_SECTION
        .find(body)
        .map(|m| m.start())
        .unwrap_or(body.len());
    let region = &body[..region_end];

    let mut markers = find_markers(region, &LINE_OPTION);
    if markers.is_empty() {
        debug!("行首选项未匹配，改用宽松模式");
        markers = find_markers(region, &LOOSE_OPTION);
    }
    let first = markers.first().ok_or(ParseError::NoOptions)?;

    let text = question_text(&body[..first.start]);
    let options = collect_options(region, &markers);
    if options.is_empty() {
        return Err(ParseError::NoOptions);
    }

    Ok((text, options))
}

fn find_markers(region: &str, pattern: &Regex) -> Vec<OptionMarker> {
    pattern
        .captures_iter(region)
        .filter_map(|caps| {
            let letter_match = caps.get(1)?;
            let letter = letter_match.as_str().chars().next()?;
            // 宽松模式会吃掉前面的空白，或只从 `**` 的第二个星号开始匹配；
            // 起点跳过空白，再向前包含整段星号
            let whole = caps.get(0)?;
            let mut start =
                whole.start() + whole.as_str().len() - whole.as_str().trim_start().len();
            while start > 0 && region.as_bytes()[start - 1] == b'*' {
                start -= 1;
            }
            Some(OptionMarker {
                letter,
                start,
                text_start: whole.end(),
            })
        })
        .collect()
}

/// 按标记切出每个选项；字母必须严格递增，其余标记只作为上一个选项的边界
fn collect_options(region: &str, markers: &[OptionMarker]) -> Vec<ChoiceOption> {
    let mut options: Vec<ChoiceOption> = Vec::new();

    for (i, marker) in markers.iter().enumerate() {
        if let Some(last) = options.last() {
            if marker.letter <= last.letter {
                debug!("忽略乱序选项标记 {}.", marker.letter);
                continue;
            }
        }

        let next_start = markers
            .get(i + 1)
            .map(|m| m.start)
            .unwrap_or(region.len())
            .max(marker.text_start);
        let candidate = &region[marker.text_start..next_start];
        let end = OPTION_END
            .find(candidate)
            .map(|m| m.start())
            .unwrap_or(candidate.len());

        let text = clean_option_text(&candidate[..end]);
        if !text.is_empty() {
            options.push(ChoiceOption::new(marker.letter, text));
        }
    }

    options
}

fn clean_option_text(raw: &str) -> String {
    let without_fences = CODE_FENCE.replace_all(raw, "");
    without_fences
        .trim()
        .trim_matches('*')
        .trim()
        .to_string()
}

/// 题干：去掉 `**Case Study**` / `**Topic N**` 标记行，保留案例正文
fn question_text(prefix: &str) -> String {
    let text = CASE_STUDY.replace(prefix, "");
    let text = TOPIC_LINE.replace(&text, "");
    text.trim().to_string()
}

/// 提取文档中所有形如 `A. xxx` 的行（只导出选项列表时使用）
pub fn extract_answer_lines(document: &str) -> Vec<String> {
    document
        .lines()
        .map(str::trim)
        .filter(|line| ANSWER_LINE.is_match(line))
        .map(str::to_string)
        .collect()
}
