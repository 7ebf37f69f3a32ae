//! 文本来源 - 基础设施层
//!
//! 持有唯一的文档资源，只暴露"按页取文本"的能力

use crate::error::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// 分页文本分隔符（pdftotext 等抽取工具的换页约定）
const PAGE_SEPARATOR: char = '\u{0C}';

/// 文档文本来源
///
/// 职责：
/// - 持有唯一的文档资源
/// - 暴露按页读取已抽取文本的能力
/// - 不认识 Question / Option
/// - 不处理解析流程
///
/// 解析引擎不要求保留页边界，所有页文本会在规整阶段合并为一个行序列
pub trait TextSource {
    /// 按页返回已抽取的文本，纯图片页返回空字符串
    fn page_texts(&self) -> AppResult<Vec<String>>;
}

/// 纯文本文件来源
///
/// 读取上游抽取步骤产出的 txt 文件，页与页之间以换页符（`\x0C`）分隔。
/// 文件不存在或内容不是合法 UTF-8 时返回抽取错误，由流程层降级处理
pub struct PlainTextSource {
    path: PathBuf,
}

impl PlainTextSource {
    /// 以文件路径创建文本来源，读取发生在 `page_texts` 调用时
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 获取源文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for PlainTextSource {
    fn page_texts(&self) -> AppResult<Vec<String>> {
        let path_str = self.path.to_string_lossy().to_string();

        let bytes = std::fs::read(&self.path)
            .map_err(|e| AppError::extract_read_failed(&path_str, e))?;

        let text = String::from_utf8(bytes)
            .map_err(|_| AppError::invalid_encoding(&path_str))?;

        Ok(text.split(PAGE_SEPARATOR).map(str::to_string).collect())
    }
}

/// 内存文本来源
///
/// 直接持有各页文本，供测试和内嵌调用方使用
pub struct StaticSource {
    pages: Vec<String>,
}

impl StaticSource {
    /// 以各页文本创建来源
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }
}

impl TextSource for StaticSource {
    fn page_texts(&self) -> AppResult<Vec<String>> {
        Ok(self.pages.clone())
    }
}
