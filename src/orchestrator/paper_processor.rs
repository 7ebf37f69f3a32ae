//! 单个文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责单份文档的端到端处理，是文档级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **流程调度**：创建并运行 `ParseFlow`
//! 2. **结果写出**：识别出题目时写出记录文件
//! 3. **兜底记录**：未识别出题目时写入 warn.txt 并提示支持的题号格式
//! 4. **统计输出**：记录单份文档的解析统计

use crate::config::Config;
use crate::infrastructure::PlainTextSource;
use crate::models::{ParseStats, ParsedPaper};
use crate::services::{RecordWriter, WarnWriter};
use crate::services::warn_writer::SUPPORTED_MARKERS_HINT;
use crate::workflow::{PaperCtx, ParseFlow};
use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

/// 单份文档处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocOutcome {
    /// 识别出题目并写出记录
    Extracted { questions: usize },
    /// 未识别出任何题目（已写入 warn.txt）
    Empty,
}

/// 处理单份文档
///
/// # 参数
/// - `path`: 文本文件路径
/// - `doc_index`: 文档序号（用于日志）
/// - `config`: 配置
///
/// # 返回
/// 返回文档处理结果
pub async fn process_document(
    path: &Path,
    doc_index: usize,
    config: &Config,
) -> Result<DocOutcome> {
    let name = path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let ctx = PaperCtx::new(doc_index, name);

    log_doc_start(doc_index, &ctx.name, path);

    // 创建流程对象并运行（解析本身是同步的）
    let flow = ParseFlow::new(config)?;
    let source = PlainTextSource::new(path);
    let report = flow.run(&source, &ctx);
    let stats = report.stats;

    // 分支：什么都没识别出来（包括抽取失败被降级的情况）
    if report.questions.is_empty() {
        warn!("[文档 {}] ⚠️ 未识别出任何题目，写入 warn.txt", doc_index);
        warn!(
            "[文档 {}] 💡 支持的题号格式: {}",
            doc_index, SUPPORTED_MARKERS_HINT
        );

        WarnWriter::with_path(&config.warn_file)
            .write(&ctx.name, stats.total_lines)
            .await?;

        return Ok(DocOutcome::Empty);
    }

    // 组装输出记录
    let paper = ParsedPaper {
        name: ctx.name.clone(),
        parsed_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        questions: report.questions,
        source_file: Some(path.to_string_lossy().to_string()),
    };

    let writer = RecordWriter::new(&config.output_folder, config.output_format);
    let file_path = writer.write(&paper).await?;

    log_doc_complete(doc_index, paper.questions.len(), &stats, &file_path);

    Ok(DocOutcome::Extracted {
        questions: paper.questions.len(),
    })
}

// ========== 日志辅助函数 ==========

fn log_doc_start(doc_index: usize, name: &str, path: &Path) {
    info!("\n[文档 {}] {}", doc_index, "─".repeat(30));
    info!("[文档 {}] 开始处理", doc_index);
    info!("[文档 {}] 名称: {}", doc_index, name);
    info!("[文档 {}] 路径: {}", doc_index, path.display());
}

fn log_doc_complete(doc_index: usize, questions: usize, stats: &ParseStats, file_path: &Path) {
    info!(
        "[文档 {}] 解析统计: 题目 {}, 总行数 {}, 噪声行 {}, 题前丢弃行 {}",
        doc_index, questions, stats.total_lines, stats.noise_lines, stats.dropped_leading_lines
    );
    info!(
        "[文档 {}] ✅ 记录已写出: {}\n",
        doc_index,
        file_path.display()
    );
}
