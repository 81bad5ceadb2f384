//! HOTSPOT 题解析
//!
//! HOTSPOT 题没有字母选项，而是若干步骤（或特性）各自的下拉候选项。
//! 源文档有四种写法：
//!
//! 1. `**Step N:**` 分节，位于 `Hot Area` 之下，每节列出自己的候选项
//! 2. `### Step N` 标题，候选项是正文开头的一组 `- xxx` 列表
//! 3. 只有 `Hot Area` 的特性映射题，候选项同 2
//! 4. 其它：题干到第一条 `- xxx` 为止，候选项是之后的所有 `- xxx`
//!
//! 2 和 3 的源文档没有逐步结构，固定复制成 3 个步骤。

use crate::error::ParseError;
use crate::models::question::HotspotStep;
use crate::parser::dialect::{
    is_placeholder, ANSWER_SECTION, BOLD_STEP, CORRECT_SECTION_START, HOT_AREA,
};
use tracing::{debug, warn};

/// 无逐步结构时复制出的步骤数
pub const REPLICATED_STEP_COUNT: usize = 3;

/// HOTSPOT 正文的写法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotspotLayout {
    StepMarked,
    HeadingMarked,
    FeatureMapping,
    Generic,
}

impl HotspotLayout {
    pub fn detect(body: &str) -> Self {
        if body.contains("**Step") {
            HotspotLayout::StepMarked
        } else if body.contains("### Step") {
            HotspotLayout::HeadingMarked
        } else if HOT_AREA.is_match(body) {
            HotspotLayout::FeatureMapping
        } else {
            HotspotLayout::Generic
        }
    }
}

/// 解析 HOTSPOT 正文，返回题干和各步骤候选项
pub fn parse(body: &str) -> Result<(String, Vec<HotspotStep>), ParseError> {
    let layout = HotspotLayout::detect(body);
    debug!("HOTSPOT 写法: {:?}", layout);

    let (text, steps) = match layout {
        HotspotLayout::StepMarked => parse_step_marked(body)?,
        HotspotLayout::HeadingMarked => {
            let text = text_before(body, body.find("### Step"))?;
            (text, replicate(flat_candidates(body)))
        }
        HotspotLayout::FeatureMapping => {
            let text = text_before(body, None)?;
            (text, replicate(flat_candidates(body)))
        }
        HotspotLayout::Generic => parse_generic(body)?,
    };

    if steps.iter().all(|s| s.candidates.is_empty()) {
        warn!("HOTSPOT 题未找到任何候选项");
    }

    Ok((text, steps))
}

/// `Hot Area` 之前的内容；没有 `Hot Area` 时退到 `fallback` 位置
fn text_before(body: &str, fallback: Option<usize>) -> Result<String, ParseError> {
    let end = HOT_AREA
        .find(body)
        .map(|m| m.start())
        .or(fallback)
        .ok_or(ParseError::MissingQuestionText)?;
    Ok(body[..end].trim().to_string())
}

fn parse_step_marked(body: &str) -> Result<(String, Vec<HotspotStep>), ParseError> {
    let first_step = BOLD_STEP.find(body).map(|m| m.start());
    let text = text_before(body, first_step)?;

    // Hot Area 到正确答案之间
    let area_start = HOT_AREA
        .find(body)
        .map(|m| m.end())
        .or(first_step)
        .unwrap_or(0);
    let area = &body[area_start..];
    let area_end = CORRECT_SECTION_START
        .find(area)
        .map(|m| m.start())
        .unwrap_or(area.len());
    let area = &area[..area_end];

    let headings: Vec<(usize, usize, usize)> = BOLD_STEP
        .captures_iter(area)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let number = caps.get(1)?.as_str().parse().ok()?;
            Some((number, whole.start(), whole.end()))
        })
        .collect();

    let mut steps: Vec<HotspotStep> = Vec::with_capacity(headings.len());
    for (i, &(number, _, content_start)) in headings.iter().enumerate() {
        let content_end = headings
            .get(i + 1)
            .map(|&(_, next, _)| next)
            .unwrap_or(area.len());
        let candidates = dash_items(&area[content_start..content_end])
            .into_iter()
            .filter(|c| !is_placeholder(c))
            .collect();
        push_step(&mut steps, HotspotStep::new(number, candidates));
    }

    Ok((text, steps))
}

/// 追加步骤；同一步骤号重复出现时（OCR 重复）用后出现的候选项覆盖，位置不变
fn push_step(steps: &mut Vec<HotspotStep>, step: HotspotStep) {
    match steps.iter_mut().find(|s| s.id == step.id) {
        Some(existing) => {
            debug!("步骤 {} 重复出现，使用后一组候选项", step.id);
            existing.candidates = step.candidates;
        }
        None => steps.push(step),
    }
}

fn parse_generic(body: &str) -> Result<(String, Vec<HotspotStep>), ParseError> {
    // 题干至少占一行：第一条列表项不能在正文开头
    let list_start = lines_with_offsets(body)
        .find(|&(offset, line)| offset > 0 && dash_item(line).is_some())
        .map(|(offset, _)| offset)
        .ok_or(ParseError::MissingQuestionText)?;

    let text = body[..list_start].trim().to_string();
    let rest = &body[list_start..];
    let end = ANSWER_SECTION
        .find(rest)
        .map(|m| m.start())
        .unwrap_or(rest.len());

    let candidates = dash_items(&rest[..end])
        .into_iter()
        .filter(|c| !is_placeholder(c))
        .collect();

    Ok((text, vec![HotspotStep::new(1, candidates)]))
}

/// 正文中第一组连续的行首 `- xxx`（只在 `Hot Area` 和答案区之前查找）
fn flat_candidates(body: &str) -> Vec<String> {
    let end = [HOT_AREA.find(body), ANSWER_SECTION.find(body)]
        .into_iter()
        .flatten()
        .map(|m| m.start())
        .min()
        .unwrap_or(body.len());

    body[..end]
        .lines()
        .skip_while(|line| !starts_flat_item(line))
        .take_while(|line| starts_flat_item(line))
        .filter_map(dash_item)
        .filter(|c| !is_placeholder(c))
        .collect()
}

fn starts_flat_item(line: &str) -> bool {
    line.starts_with('-') && dash_item(line).is_some()
}

/// 同一组候选项复制到固定数量的步骤
fn replicate(candidates: Vec<String>) -> Vec<HotspotStep> {
    (1..=REPLICATED_STEP_COUNT)
        .map(|n| HotspotStep::new(n, candidates.clone()))
        .collect()
}

fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_inclusive('\n').scan(0, |offset, line| {
        let start = *offset;
        *offset += line.len();
        Some((start, line))
    })
}

fn dash_items(section: &str) -> Vec<String> {
    section.lines().filter_map(dash_item).collect()
}

/// `- xxx` 行的内容；分隔线 `---` 不算
fn dash_item(line: &str) -> Option<String> {
    let rest = line.trim().strip_prefix('-')?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let item = rest.trim();
    (!item.is_empty()).then(|| item.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(steps: &[HotspotStep]) -> Vec<&str> {
        steps.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_step_marked_layout() {
        let body = "\n**HOTSPOT**\n\nOrder the migration steps.\n\n**Hot Area:**\n\n**Step 1:**\n- Select...\n- Create a VPC\n- Create a subnet\n\n**Step 2:**\n- Select...\n- Launch EC2\n- Attach EBS\n\n**Correct Answer:**\n\n**Step 1:** **Create a VPC**\n";
        let (text, steps) = parse(body).unwrap();
        assert_eq!(text, "**HOTSPOT**\n\nOrder the migration steps.");
        assert_eq!(ids(&steps), vec!["step1", "step2"]);
        assert_eq!(steps[0].candidates, vec!["Create a VPC", "Create a subnet"]);
        assert_eq!(steps[1].candidates, vec!["Launch EC2", "Attach EBS"]);
    }

    #[test]
    fn test_step_marked_without_hot_area() {
        let body = "\nHOTSPOT\nPick per step.\n**Step 1:**\n- Select...\n- A1\n- A2\n**Step 2:**\n- Select...\n- B1\n- B2\n";
        let (text, steps) = parse(body).unwrap();
        assert_eq!(text, "HOTSPOT\nPick per step.");
        assert_eq!(steps[0].candidates, vec!["A1", "A2"]);
        assert_eq!(steps[1].candidates, vec!["B1", "B2"]);
    }

    #[test]
    fn test_heading_marked_replicates_three_steps() {
        let body = "\nHOTSPOT\n- Amazon SageMaker\n- Amazon Comprehend\n- Amazon Polly\n\nSelect the service for each step.\n\n**Hot Area:**\n\n### Step 1\n### Step 2\n";
        let (text, steps) = parse(body).unwrap();
        assert!(text.ends_with("Select the service for each step."));
        // 源格式限制：无论实际有几步，都固定复制为 3 步
        assert_eq!(ids(&steps), vec!["step1", "step2", "step3"]);
        for step in &steps {
            assert_eq!(
                step.candidates,
                vec!["Amazon SageMaker", "Amazon Comprehend", "Amazon Polly"]
            );
        }
    }

    #[test]
    fn test_heading_marked_ignores_lists_after_hot_area() {
        let body = "\nHOTSPOT\nSelect the service.\n\n**Hot Area:**\n\n### Step 1\n- Lambda\n- EC2\n";
        let (_, steps) = parse(body).unwrap();
        assert_eq!(steps.len(), REPLICATED_STEP_COUNT);
        assert!(steps.iter().all(|s| s.candidates.is_empty()));
    }

    #[test]
    fn test_repeated_step_number_is_merged() {
        let body = "\nHOTSPOT\nPick.\n\n**Hot Area:**\n\n**Step 1:**\n- a\n- b\n\n**Step 1:**\n- c\n- d\n\n**Step 2:**\n- e\n";
        let (_, steps) = parse(body).unwrap();
        assert_eq!(ids(&steps), vec!["step1", "step2"]);
        assert_eq!(steps[0].candidates, vec!["c", "d"]);
        assert_eq!(steps[1].candidates, vec!["e"]);
    }

    #[test]
    fn test_feature_mapping_replicates_three_steps() {
        let body = "\nHOTSPOT\nMatch each feature.\n- Bedrock\n- Kendra\n\n### Hot Area:\n- **Search:**\n";
        let (text, steps) = parse(body).unwrap();
        assert_eq!(text, "HOTSPOT\nMatch each feature.\n- Bedrock\n- Kendra");
        assert_eq!(steps.len(), REPLICATED_STEP_COUNT);
        assert_eq!(steps[2].candidates, vec!["Bedrock", "Kendra"]);
    }

    #[test]
    fn test_generic_layout() {
        let body = "\nHOTSPOT\nChoose the storage tiers.\n- S3 Standard\n- Select...\n- S3 Glacier\n\n**Correct Answer:** see image\n- Not a candidate\n";
        let (text, steps) = parse(body).unwrap();
        assert_eq!(text, "HOTSPOT\nChoose the storage tiers.");
        assert_eq!(ids(&steps), vec!["step1"]);
        assert_eq!(steps[0].candidates, vec!["S3 Standard", "S3 Glacier"]);
    }

    #[test]
    fn test_generic_without_list_fails() {
        assert_eq!(
            parse("\nHOTSPOT\nSee the image.\n"),
            Err(ParseError::MissingQuestionText)
        );
    }

    #[test]
    fn test_dash_item_ignores_rules() {
        assert_eq!(dash_item("  - Lambda "), Some("Lambda".to_string()));
        assert_eq!(dash_item("---"), None);
        assert_eq!(dash_item("-"), None);
    }
}
