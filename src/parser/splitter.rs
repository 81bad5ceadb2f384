//! 文档切分：按题目标题把整份 Markdown 切成"题号 + 原始正文"

use crate::parser::dialect::QUESTION_HEADER;

/// 切分出来的一道题（尚未解析）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawQuestion<'a> {
    /// 标题里的题号原文
    pub number: &'a str,
    /// 标题之后、下一个标题之前的全部内容
    pub body: &'a str,
}

/// 按题目标题切分文档
///
/// 第一个标题之前的内容（封面、目录等）被丢弃；
/// 重复的题号按出现顺序全部保留，去重交给下游。
pub fn split(document: &str) -> Vec<RawQuestion<'_>> {
    let headers: Vec<(&str, usize, usize)> = QUESTION_HEADER
        .captures_iter(document)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let number = caps.get(1)?;
            Some((number.as_str(), whole.start(), whole.end()))
        })
        .collect();

    headers
        .iter()
        .enumerate()
        .map(|(i, &(number, _, body_start))| {
            let body_end = headers
                .get(i + 1)
                .map(|&(_, next_start, _)| next_start)
                .unwrap_or(document.len());
            RawQuestion {
                number,
                body: &document[body_start..body_end],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_discards_front_matter() {
        let doc = "# AWS SAA-C03\nintro\n## Question #1\nfirst\n## Question #2\nsecond\n";
        let raw = split(doc);
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0].number, "1");
        assert_eq!(raw[0].body, "\nfirst\n");
        assert_eq!(raw[1].number, "2");
        assert_eq!(raw[1].body, "\nsecond\n");
    }

    #[test]
    fn test_split_mixed_header_conventions() {
        let doc = "**QUESTION 5**\nfive\n### Question #6\nsix\nQUESTION 7\nseven\n**Question #8**\neight";
        let numbers: Vec<&str> = split(doc).iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec!["5", "6", "7", "8"]);
    }

    #[test]
    fn test_split_keeps_duplicate_numbers_in_order() {
        let doc = "## Question #3\na\n## Question #3\nb\n";
        let raw = split(doc);
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0].body.trim(), "a");
        assert_eq!(raw[1].body.trim(), "b");
    }

    #[test]
    fn test_split_without_headers_is_empty() {
        assert!(split("just some notes\nA. nothing").is_empty());
        assert!(split("").is_empty());
    }
}
