use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 文本抽取错误
    Extract(ExtractError),
    /// 文件操作错误
    File(FileError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Extract(e) => write!(f, "文本抽取错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Extract(e) => Some(e),
            AppError::File(e) => Some(e),
        }
    }
}

/// 文本抽取相关错误
///
/// 抽取失败在流程层被吸收并降级为空结果，这里只负责描述原因
#[derive(Debug)]
pub enum ExtractError {
    /// 读取文档失败（不存在、无权限、IO 错误等）
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 文档内容不是合法的 UTF-8 文本（损坏或非文本内容）
    InvalidEncoding {
        path: String,
    },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::ReadFailed { path, source } => {
                write!(f, "读取文档失败 ({}): {}", path, source)
            }
            ExtractError::InvalidEncoding { path } => {
                write!(f, "文档不是合法的 UTF-8 文本: {}", path)
            }
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::ReadFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            ExtractError::InvalidEncoding { .. } => None,
        }
    }
}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 序列化解析结果失败
    SerializeFailed {
        format: &'static str,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::WriteFailed { path, source } => {
                write!(f, "写入文件失败 ({}): {}", path, source)
            }
            FileError::SerializeFailed { format, source } => {
                write!(f, "序列化失败 ({}): {}", format, source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::WriteFailed { source, .. } | FileError::SerializeFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::File(FileError::SerializeFailed {
            format: "json",
            source: Box::new(err),
        })
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::File(FileError::SerializeFailed {
            format: "toml",
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文档读取错误
    pub fn extract_read_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::Extract(ExtractError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建文档编码错误
    pub fn invalid_encoding(path: impl Into<String>) -> Self {
        AppError::Extract(ExtractError::InvalidEncoding { path: path.into() })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
