//! # Paper Question Extract
//!
//! 一个从已抽取的试卷文本中重建题目与选项的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有文档资源，只暴露能力
//! - `TextSource` - 唯一的文档 owner，提供按页取文本的能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单行或单个行序列
//! - `normalize_lines` - 行规整能力
//! - `LineClassifier` - 行分类能力（噪声 / 题目起始 / 选项起始 / 延续）
//! - `normalize_label` - 选项标记规整能力
//! - `Segmenter` - 行序列切分能力（核心状态机）
//! - `RecordWriter` - 写解析结果文件能力
//! - `WarnWriter` - 写 warn.txt 能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份文档"的完整解析流程
//! - `PaperCtx` - 上下文封装（doc_index + name）
//! - `ParseFlow` - 流程编排（抽取 → 规整 → 切分 → 报告）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量文档处理器，管理并发和全局统计
//! - `orchestrator/paper_processor` - 单个文档处理器，解析并写出记录
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{PlainTextSource, StaticSource, TextSource};
pub use models::{ParseReport, ParseStats, ParsedPaper, Question, QuestionOption, QuestionType};
pub use orchestrator::{process_document, App, DocOutcome};
pub use services::{LineClassifier, LineKind, OutputFormat, Segmenter};
pub use workflow::{PaperCtx, ParseFlow};
