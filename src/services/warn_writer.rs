//! 警告写入服务 - 业务能力层
//!
//! 只负责"写 warn.txt"能力，不关心流程

use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 识别失败时提示给使用者的题号格式说明
pub const SUPPORTED_MARKERS_HINT: &str = "\"Câu 1:\" / \"Question 1.\" / \"Bài 1)\" / \"1.\"";

/// 警告写入服务
///
/// 职责：
/// - 将未识别出任何题目的文档记入 warn.txt
/// - 只处理单份文档的警告
/// - 不关心流程顺序
pub struct WarnWriter {
    warn_file_path: String,
}

impl WarnWriter {
    /// 创建新的警告写入服务
    pub fn new() -> Self {
        Self {
            warn_file_path: "warn.txt".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    /// 记录一份未识别出任何题目的文档
    ///
    /// # 参数
    /// - `doc_name`: 文档名称
    /// - `total_lines`: 规整后的总行数
    pub async fn write(&self, doc_name: &str, total_lines: usize) -> Result<()> {
        debug!("写入警告: 文档 {} | 行数 {}", doc_name, total_lines);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)?;

        let warn_msg = format!(
            "文档 {} | 行数 {} | 未识别出任何题目，支持的题号格式: {}\n",
            doc_name, total_lines, SUPPORTED_MARKERS_HINT
        );

        file.write_all(warn_msg.as_bytes())?;

        Ok(())
    }
}

impl Default for WarnWriter {
    fn default() -> Self {
        Self::new()
    }
}
