//! 文档解析流程 - 流程层
//!
//! 核心职责：定义"一份文档"的完整解析流程
//!
//! 流程顺序：
//! 1. 按页抽取文本
//! 2. 规整为行序列
//! 3. 分类 + 切分为题目序列
//! 4. 产出解析报告

use anyhow::Result;
use tracing::{error, info};

use crate::config::Config;
use crate::infrastructure::TextSource;
use crate::models::ParseReport;
use crate::services::{normalize_lines, Segmenter};
use crate::utils::logging::truncate_text;
use crate::workflow::paper_ctx::PaperCtx;

/// 文档解析流程
///
/// 职责：
/// - 编排完整的单文档解析流程
/// - 抽取失败在此处吸收：记日志并降级为空报告，不向上传播
/// - 不持有文档资源，资源以 TextSource 的形式由调用方传入
/// - 解析本身是同步纯函数，单次调用之外没有状态
pub struct ParseFlow {
    segmenter: Segmenter,
    verbose_logging: bool,
}

impl ParseFlow {
    /// 创建新的解析流程
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            segmenter: Segmenter::new()?,
            verbose_logging: config.verbose_logging,
        })
    }

    /// 解析一份文档，返回解析报告
    ///
    /// 抽取失败不会返回 Err：记 error 日志后返回空报告，
    /// 与"合法地什么都没识别出来"共用同一种结果形态，
    /// 由调用方的日志通道区分两者
    pub fn run(&self, source: &dyn TextSource, ctx: &PaperCtx) -> ParseReport {
        let pages = match source.page_texts() {
            Ok(pages) => pages,
            Err(e) => {
                error!("[文档 {}] ❌ 文本抽取失败: {}", ctx.doc_index, e);
                return ParseReport::default();
            }
        };

        let lines = normalize_lines(&pages);
        info!(
            "[文档 {}] 共 {} 页，规整后 {} 行",
            ctx.doc_index,
            pages.len(),
            lines.len()
        );

        let report = self.segmenter.segment(&lines);

        if self.verbose_logging {
            self.log_questions(ctx.doc_index, &report);
        }

        info!(
            "[文档 {}] ✓ 切分完成: 题目 {}, 噪声行 {}, 题前丢弃行 {}",
            ctx.doc_index,
            report.questions.len(),
            report.stats.noise_lines,
            report.stats.dropped_leading_lines
        );

        report
    }

    // ========== 日志辅助方法 ==========

    /// 显示识别出的题干预览
    fn log_questions(&self, doc_index: usize, report: &ParseReport) {
        for (i, question) in report.questions.iter().take(3).enumerate() {
            info!(
                "[文档 {}]   {}. {} (选项 {})",
                doc_index,
                i + 1,
                truncate_text(&question.content, 40),
                question.options.len()
            );
        }
    }
}
