use crate::error::FileError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 一份待解析的 Markdown 文档
#[derive(Debug, Clone)]
pub struct MarkdownDocument {
    /// 文件名（不含扩展名），用作导出文件名
    pub name: String,
    pub path: PathBuf,
    pub content: String,
}

/// 读取单个 Markdown 文件
pub async fn load_markdown_document(path: &Path) -> Result<MarkdownDocument> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取Markdown文件: {}", path.display()))?;

    let name = path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(MarkdownDocument {
        name,
        path: path.to_path_buf(),
        content,
    })
}

/// 加载输入路径下的所有 Markdown 文档
///
/// 输入可以是单个文件，也可以是文件夹（只加载 `.md` 文件，按文件名排序）。
/// 文件夹中读取失败的文件会被跳过并记录警告。
pub async fn load_markdown_documents(input_path: &str) -> Result<Vec<MarkdownDocument>> {
    let input = PathBuf::from(input_path);

    if !input.exists() {
        return Err(FileError::NotFound {
            path: input_path.to_string(),
        }
        .into());
    }

    if input.is_file() {
        return Ok(vec![load_markdown_document(&input).await?]);
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&input)
        .await
        .with_context(|| format!("无法读取文件夹: {}", input_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("md") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_markdown_document(&path).await {
            Ok(document) => {
                tracing::info!("成功加载 {} 字符", document.content.chars().count());
                documents.push(document);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
            }
        }
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_folder_only_markdown_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.md"), "## Question #2\n").unwrap();
        std::fs::write(dir.path().join("a.md"), "## Question #1\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let docs = load_markdown_documents(dir.path().to_str().unwrap())
            .await
            .unwrap();

        let names: Vec<&str> = docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_missing_input_is_error() {
        assert!(load_markdown_documents("/definitely/not/here").await.is_err());
    }
}
