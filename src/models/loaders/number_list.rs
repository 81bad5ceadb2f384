use crate::error::{AppError, AppResult};
use std::path::Path;
use tokio::fs;

/// 从文本文件读取题号列表
///
/// 每行一个整数；空行和非数字行被忽略。
pub async fn load_question_numbers(path: &Path) -> AppResult<Vec<u32>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    Ok(parse_question_numbers(&content))
}

pub fn parse_question_numbers(content: &str) -> Vec<u32> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|line| line.parse().ok())
        .collect()
}
