//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文档处理器
//! - 管理应用生命周期（初始化、运行）
//! - 扫描待解析的文本文件（Vec<PathBuf>）
//! - 控制并发数量（Semaphore）
//! - 输出全局统计信息
//!
//! ### `paper_processor` - 单个文档处理器
//! - 创建并运行 ParseFlow
//! - 写出解析结果记录
//! - 未识别出题目时写入 warn.txt
//! - 输出单个文档的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<文档>)
//!     ↓
//! paper_processor (处理单份文档)
//!     ↓
//! workflow::ParseFlow (抽取 → 规整 → 切分)
//!     ↓
//! services (能力层：classify / segment / write / warn)
//!     ↓
//! infrastructure (基础设施：TextSource)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：batch_processor 管批量，paper_processor 管单个
//! 2. **向下依赖**：编排层 → workflow → services → infrastructure
//! 3. **无业务逻辑**：只做调度和统计，不做具体解析判断

pub mod batch_processor;
pub mod paper_processor;

// 重新导出主要类型
pub use batch_processor::App;
pub use paper_processor::{process_document, DocOutcome};
