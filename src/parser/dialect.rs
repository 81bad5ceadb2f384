//! 源文档方言表
//!
//! 不同批次的 OCR 文档使用了不同的标题、答案和投票写法。
//! 这里把每种写法登记为一条数据（正则 + 转换方式），解析器按表中顺序依次尝试。
//! 表的顺序就是优先级，调整顺序会改变解析结果。

use once_cell::sync::Lazy;
use phf::phf_set;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("内置正则无效 {}: {}", pattern, e))
}

// ========== 题目标题 ==========

/// 题目标题：`## Question #N`、`### Question #N`、`**Question #N**`、`**QUESTION N**`、`QUESTION N`
pub static QUESTION_HEADER: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?mi)(?:^[ \t]*(?:#{2,3}[ \t]+)?|\*\*)question[ \t]+#?(\d+)(?:\*\*)?")
});

// ========== 选择题 ==========

/// 行首的字母选项：`A. xxx`、`- A. xxx`、`**A.** xxx`、`**A. xxx**`
pub static LINE_OPTION: Lazy<Regex> =
    Lazy::new(|| compile(r"(?m)^[ \t]*(?:-[ \t]*)?(?:\*\*)?([A-F])\.(?:\*\*)?[ \t]+"));

/// 宽松的字母选项：不要求在行首（选项紧跟在题干后面的情况）
pub static LOOSE_OPTION: Lazy<Regex> =
    Lazy::new(|| compile(r"(?:^|[\s*])([A-F])\.(?:\*\*)?[ \t]+"));

/// 选项文本的结束位置：空行、分隔线、正确答案标记
pub static OPTION_END: Lazy<Regex> =
    Lazy::new(|| compile(r"\n[ \t]*\n|---|\*\*Correct Answer"));

/// 选项区之后的答案 / 投票 / 解析区起点
pub static ANSWER_SECTION: Lazy<Regex> = Lazy::new(|| {
    compile(r"\*\*Correct Answer|#{1,3}[ \t]*Correct Answer|Correct Answer:|Community vote distribution|\*\*Explanation")
});

/// 案例分析前言
pub static CASE_STUDY: Lazy<Regex> = Lazy::new(|| compile(r"^\s*\*\*Case Study\*\*[ \t]*\n?"));

/// 旧文档里题干前的 `**Topic N**` 行
pub static TOPIC_LINE: Lazy<Regex> = Lazy::new(|| compile(r"^\s*\*\*Topic \d+\*\*[ \t]*\n?"));

/// 代码块标记
pub static CODE_FENCE: Lazy<Regex> = Lazy::new(|| compile(r"```\w*\n?"));

/// 仅含 "answers only" 模式需要的选项行
pub static ANSWER_LINE: Lazy<Regex> = Lazy::new(|| compile(r"^[A-F]\.\s+.+$"));

// ========== HOTSPOT ==========

/// 大小写不敏感的 HOTSPOT 标记行（主判断是区分大小写的 `HOTSPOT` 字面量）
pub static HOTSPOT_LINE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?mi)^[ \t]*(?:\*\*)?[ \t]*hotspot[ \t]*(?:\*\*)?[ \t]*$"));

pub static HOT_AREA: Lazy<Regex> = Lazy::new(|| compile(r"\*\*Hot Area:\*\*|###[ \t]*Hot Area:"));

/// `**Step N:**` 形式的步骤
pub static BOLD_STEP: Lazy<Regex> = Lazy::new(|| compile(r"\*\*Step[ \t]+(\d+)[ \t]*:?\*\*:?"));

/// 正确答案区里的步骤标题：`### Step N:`（第 1 组）或 `**Step N:**`（第 2 组）
pub static STEP_HEADING: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?m)^[ \t]*(?:###[ \t]*Step[ \t]+(\d+)[ \t]*:?|\*\*Step[ \t]+(\d+)[ \t]*:?\*\*:?)")
});

/// 正确答案区起点
pub static CORRECT_SECTION_START: Lazy<Regex> =
    Lazy::new(|| compile(r"\*\*Correct Answer:\*\*|###[ \t]*Correct Answer:"));

/// 正确答案区终点
pub static CORRECT_SECTION_END: Lazy<Regex> = Lazy::new(|| {
    compile(r"\*\*Section:|\*\*Explanation|###[ \t]*Section|\*\*Community vote distribution\*\*")
});

/// 正确答案区内的代码块（优先在其中查找）
pub static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| compile(r"(?s)```\w*\n?(.*?)```"));

pub static BOLD_SPAN: Lazy<Regex> = Lazy::new(|| compile(r"\*\*([^*]+)\*\*"));

/// `- **Feature:**` 特性标题行
pub static FEATURE_HEADER: Lazy<Regex> = Lazy::new(|| compile(r"^-\s*\*\*([^*]+):\*\*"));

/// `- **Answer**` 特性下被选中的答案
pub static FEATURE_ANSWER: Lazy<Regex> = Lazy::new(|| compile(r"-\s*\*\*([^*]+)\*\*"));

pub static STEP_LABEL: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^step\s*\d+\s*:?$"));

/// 下拉框占位项，不算候选答案
pub static PLACEHOLDERS: phf::Set<&'static str> = phf_set! {
    "Select...",
    "Select",
    "Select…",
    "",
};

pub fn is_placeholder(text: &str) -> bool {
    PLACEHOLDERS.contains(text.trim())
}

// ========== 正确答案 ==========

/// 一种显式答案写法
pub struct AnswerPattern {
    pub name: &'static str,
    pub regex: Regex,
}

/// 显式答案写法，按优先级排列
pub static EXPLICIT_ANSWER_PATTERNS: Lazy<Vec<AnswerPattern>> = Lazy::new(|| {
    vec![
        // **Correct Answer:** AC / **Correct Answer:** B, D
        AnswerPattern {
            name: "bold_colon_outside",
            regex: compile(r"\*\*Correct Answer:\*\*\s*([A-Z]+(?:,\s*[A-Z]+)*)\b"),
        },
        // **Correct Answer: C**
        AnswerPattern {
            name: "bold_colon_inside",
            regex: compile(r"\*\*Correct Answer:\s*([A-Z]+(?:,\s*[A-Z]+)*)\*\*"),
        },
        // **Correct Answer: A C E**
        AnswerPattern {
            name: "bold_spaced",
            regex: compile(r"\*\*Correct Answer:\s*([A-Z]+(?:[ \t]+[A-Z]+)*)\*\*"),
        },
        // ### Correct Answer: A
        AnswerPattern {
            name: "heading",
            regex: compile(r"###[ \t]*Correct Answer:[ \t]*([A-Z]+(?:[ \t,]+[A-Z]+)*)\b"),
        },
        // Correct Answer: B
        AnswerPattern {
            name: "plain",
            regex: compile(r"Correct Answer:[ \t]*([A-Z]+(?:,[ \t]*[A-Z]+)*)\b"),
        },
    ]
});

// ========== 投票分布 ==========

/// 投票区：`Community vote distribution` 到下一个分隔线或结尾
pub static VOTE_SECTION: Lazy<Regex> =
    Lazy::new(|| compile(r"(?s)(?:\*\*)?Community vote distribution(?:\*\*)?(.*?)(?:---|\z)"));

/// 投票匹配结果的转换方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTransform {
    /// 捕获的就是选项字母，去掉空白即可（`C E` -> `CE`）
    Letters,
    /// 捕获的是图片占位编号，1 -> A、8 -> H
    NumberToLetter,
}

/// 一种投票写法：正则的第 1 组是选项，第 2 组是百分比
pub struct VotePattern {
    pub name: &'static str,
    pub regex: Regex,
    pub transform: VoteTransform,
}

/// 投票写法，从严格到宽松排列；所有写法的匹配结果会合并到一起
pub static VOTE_PATTERNS: Lazy<Vec<VotePattern>> = Lazy::new(|| {
    vec![
        // - AC (100%)
        VotePattern {
            name: "dash",
            regex: compile(r"-\s*([A-Z]+(?:\s+[A-Z])*)\s*\((\d+)%\)"),
            transform: VoteTransform::Letters,
        },
        // - **BCE (713)** 14%
        VotePattern {
            name: "bold_count",
            regex: compile(r"-\s*\*\*([A-Z]+(?:\s+[A-Z])*)\s*\(\d+\)\*\*\s*(\d+)%"),
            transform: VoteTransform::Letters,
        },
        // - ![8](url) 8 (89%)
        VotePattern {
            name: "image_number",
            regex: compile(r"-\s*!\[\d+\].*?\s*(\d+)\s*\((\d+)%\)"),
            transform: VoteTransform::NumberToLetter,
        },
        // - **ACE (100%)**
        VotePattern {
            name: "bold_percent",
            regex: compile(r"-\s*\*\*([A-Z]+(?:\s+[A-Z])*)\s*\((\d+)%\)\*\*"),
            transform: VoteTransform::Letters,
        },
        // A (0%)
        VotePattern {
            name: "bare",
            regex: compile(r"([A-Z]+(?:\s+[A-Z])*)\s*\((\d+)%\)"),
            transform: VoteTransform::Letters,
        },
        // ABC(88%)
        VotePattern {
            name: "tight",
            regex: compile(r"([A-Z]+)\s*\((\d+)%\)"),
            transform: VoteTransform::Letters,
        },
        VotePattern {
            name: "permissive",
            regex: compile(r"\*?\*?([A-Z](?:\s+[A-Z])*)\s*\((\d+)%\)\*?\*?"),
            transform: VoteTransform::Letters,
        },
    ]
});

impl VoteTransform {
    pub fn apply(self, raw: &str) -> Option<String> {
        match self {
            VoteTransform::Letters => {
                Some(raw.chars().filter(|c| !c.is_whitespace()).collect())
            }
            VoteTransform::NumberToLetter => {
                let n: u8 = raw.trim().parse().ok()?;
                (1..=26)
                    .contains(&n)
                    .then(|| char::from(b'A' + n - 1).to_string())
            }
        }
    }
}

// ========== 解析 ==========

/// 投票区之后、分隔线之后的全部内容
pub static EXPLANATION_AFTER_VOTES: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?s)Community vote distribution.*?-{3,}[ \t]*(?:\r?\n|\z)(.*)")
});

/// 旧文档的解析标记，按优先级排列
pub static EXPLANATION_MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?s)\*\*Explanation/Reference:\*\*\s*\*\*Explanation:\*\*(.*)"),
        compile(r"(?s)\*\*Explanation:\*\*(.*)"),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_transform() {
        assert_eq!(VoteTransform::Letters.apply("C E").as_deref(), Some("CE"));
        assert_eq!(VoteTransform::NumberToLetter.apply("8").as_deref(), Some("H"));
        assert_eq!(VoteTransform::NumberToLetter.apply("1").as_deref(), Some("A"));
        assert_eq!(VoteTransform::NumberToLetter.apply("0"), None);
        assert_eq!(VoteTransform::NumberToLetter.apply("27"), None);
    }

    #[test]
    fn test_placeholders() {
        assert!(is_placeholder("Select..."));
        assert!(is_placeholder("  Select "));
        assert!(!is_placeholder("Amazon S3"));
    }

    #[test]
    fn test_vote_pattern_order_is_stable() {
        let names: Vec<&str> = VOTE_PATTERNS.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "dash",
                "bold_count",
                "image_number",
                "bold_percent",
                "bare",
                "tight",
                "permissive"
            ]
        );
    }

    #[test]
    fn test_question_header_variants() {
        for header in [
            "## Question #1",
            "### Question #6",
            "**Question #5**",
            "**QUESTION 94**",
            "QUESTION 3",
            "question 7",
        ] {
            let caps = QUESTION_HEADER.captures(header).unwrap();
            assert!(caps[1].parse::<u32>().is_ok(), "{}", header);
        }
    }
}
