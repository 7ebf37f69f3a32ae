//! 文档处理上下文
//!
//! 封装"我正在处理第几份文档"这一信息

use std::fmt::Display;

/// 文档处理上下文
#[derive(Debug, Clone)]
pub struct PaperCtx {
    /// 文档序号（仅用于日志显示）
    pub doc_index: usize,

    /// 文档显示名称（来自文件名，不含扩展名）
    pub name: String,
}

impl PaperCtx {
    /// 创建新的文档上下文
    pub fn new(doc_index: usize, name: impl Into<String>) -> Self {
        Self {
            doc_index,
            name: name.into(),
        }
    }
}

impl Display for PaperCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[文档 #{} {}]", self.doc_index, self.name)
    }
}
