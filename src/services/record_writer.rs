//! 解析结果写出服务 - 业务能力层
//!
//! 只负责"把一份解析结果写成文件"能力，不关心流程

use crate::error::{AppError, AppResult};
use crate::models::ParsedPaper;
use std::path::PathBuf;
use tracing::debug;

/// 输出文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON，供下游系统导入
    Json,
    /// TOML，供人工复核时直接编辑
    Toml,
}

impl OutputFormat {
    /// 输出文件扩展名
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Toml => "toml",
        }
    }

    /// 尝试从字符串解析输出格式（精确匹配，不区分大小写）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "toml" => Some(OutputFormat::Toml),
            _ => None,
        }
    }
}

/// 解析结果写出服务
///
/// 职责：
/// - 把单份 ParsedPaper 序列化并写入输出目录
/// - 只处理单份试卷
/// - 不关心流程顺序
pub struct RecordWriter {
    output_folder: PathBuf,
    format: OutputFormat,
}

impl RecordWriter {
    /// 创建新的写出服务
    pub fn new(output_folder: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            output_folder: output_folder.into(),
            format,
        }
    }

    /// 写出一份解析结果，返回写入的文件路径
    pub async fn write(&self, paper: &ParsedPaper) -> AppResult<PathBuf> {
        tokio::fs::create_dir_all(&self.output_folder)
            .await
            .map_err(|e| {
                AppError::file_write_failed(self.output_folder.to_string_lossy(), e)
            })?;

        let file_path = self
            .output_folder
            .join(format!("{}.{}", paper.name, self.format.extension()));

        let body = self.serialize(paper)?;

        tokio::fs::write(&file_path, body)
            .await
            .map_err(|e| AppError::file_write_failed(file_path.to_string_lossy(), e))?;

        debug!(
            "已写出 {} 道题目到 {}",
            paper.questions.len(),
            file_path.display()
        );

        Ok(file_path)
    }

    fn serialize(&self, paper: &ParsedPaper) -> AppResult<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(paper)?),
            OutputFormat::Toml => Ok(toml::to_string_pretty(paper)?),
        }
    }
}
