//! 批量文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量文档的处理和调度。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：写日志文件头、输出启动信息
//! 2. **批量扫描**：扫描输入目录中所有待解析的文本文件
//! 3. **并发控制**：使用 Semaphore 限制并发数量
//! 4. **分批处理**：将文档分批次处理，每批完成后再开始下一批
//! 5. **全局统计**：汇总所有文档的处理结果
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单份文档的细节
//! - **并发安全**：通过 Semaphore 和 tokio::spawn 实现并发；
//!   每个任务持有独立的解析游标，任务之间没有共享可变状态
//! - **向下委托**：委托 paper_processor 处理单份文档

use crate::config::Config;
use crate::orchestrator::paper_processor::{self, DocOutcome};
use crate::utils::logging::{
    init_log_file, log_batch_complete, log_batch_start, log_docs_loaded, log_startup,
    print_final_stats,
};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(config.max_concurrent_docs);

        Ok(Self { config })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 扫描所有待解析的文档
        let all_docs = self.scan_documents().await?;

        if all_docs.is_empty() {
            warn!("⚠️ 没有找到待解析的文本文件，程序结束");
            return Ok(());
        }

        let total_docs = all_docs.len();
        log_docs_loaded(total_docs, self.config.max_concurrent_docs);

        // 处理所有文档
        let stats = self.process_all_documents(all_docs).await?;

        // 输出最终统计
        print_final_stats(
            stats.extracted,
            stats.empty,
            stats.failed,
            stats.questions,
            stats.total,
            &self.config.output_log_file,
        );

        Ok(())
    }

    /// 扫描输入目录中的 txt 文件
    async fn scan_documents(&self) -> Result<Vec<PathBuf>> {
        info!("\n📁 正在扫描待解析的文本文件...");

        let folder = PathBuf::from(&self.config.input_folder);

        if !folder.exists() {
            anyhow::bail!("文件夹不存在: {}", self.config.input_folder);
        }

        let mut docs = Vec::new();
        let mut entries = tokio::fs::read_dir(&folder)
            .await
            .with_context(|| format!("无法读取文件夹: {}", self.config.input_folder))?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("txt") {
                docs.push(path);
            }
        }

        // 固定处理顺序，文档序号在多次运行间保持稳定
        docs.sort();

        Ok(docs)
    }

    /// 处理所有文档
    async fn process_all_documents(&self, all_docs: Vec<PathBuf>) -> Result<ProcessingStats> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_docs));
        let total_docs = all_docs.len();
        let mut stats = ProcessingStats {
            total: total_docs,
            ..Default::default()
        };

        // 分批处理
        for batch_start in (0..total_docs).step_by(self.config.max_concurrent_docs) {
            let batch_end = (batch_start + self.config.max_concurrent_docs).min(total_docs);
            let batch_docs = &all_docs[batch_start..batch_end];
            let batch_num = (batch_start / self.config.max_concurrent_docs) + 1;
            let total_batches = (total_docs + self.config.max_concurrent_docs - 1)
                / self.config.max_concurrent_docs;

            log_batch_start(
                batch_num,
                total_batches,
                batch_start + 1,
                batch_end,
                total_docs,
            );

            // 处理本批
            let batch_result = self
                .process_batch(batch_docs, batch_start, semaphore.clone())
                .await?;

            stats.extracted += batch_result.extracted;
            stats.empty += batch_result.empty;
            stats.failed += batch_result.failed;
            stats.questions += batch_result.questions;

            log_batch_complete(batch_num, batch_result.extracted, batch_docs.len());
        }

        Ok(stats)
    }

    /// 处理单个批次
    async fn process_batch(
        &self,
        batch_docs: &[PathBuf],
        batch_start: usize,
        semaphore: Arc<Semaphore>,
    ) -> Result<BatchResult> {
        let mut batch_handles = Vec::new();

        // 为本批创建并发任务
        for (idx, doc_path) in batch_docs.iter().enumerate() {
            let doc_index = batch_start + idx + 1;
            let permit = semaphore.clone().acquire_owned().await?;

            let doc_path_clone = doc_path.clone();
            let config_clone = self.config.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                match paper_processor::process_document(&doc_path_clone, doc_index, &config_clone)
                    .await
                {
                    Ok(outcome) => Ok(outcome),
                    Err(e) => {
                        error!("[文档 {}] ❌ 处理过程中发生错误: {}", doc_index, e);
                        Err(e)
                    }
                }
            });
            batch_handles.push((doc_index, handle));
        }

        // 等待本批所有任务完成
        let mut result = BatchResult::default();

        for (doc_index, handle) in batch_handles {
            match handle.await {
                Ok(Ok(DocOutcome::Extracted { questions })) => {
                    result.extracted += 1;
                    result.questions += questions;
                }
                Ok(Ok(DocOutcome::Empty)) => {
                    result.empty += 1;
                }
                Ok(Err(_)) => {
                    result.failed += 1;
                }
                Err(e) => {
                    error!("[文档 {}] 任务执行失败: {}", doc_index, e);
                    result.failed += 1;
                }
            }
        }

        Ok(result)
    }
}

/// 处理统计
#[derive(Debug, Default)]
struct ProcessingStats {
    extracted: usize,
    empty: usize,
    failed: usize,
    questions: usize,
    total: usize,
}

/// 批次处理结果
#[derive(Debug, Default)]
struct BatchResult {
    extracted: usize,
    empty: usize,
    failed: usize,
    questions: usize,
}
