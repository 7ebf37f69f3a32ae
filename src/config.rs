use crate::services::record_writer::OutputFormat;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 同时处理的文档数量
    pub max_concurrent_docs: usize,
    /// 待解析文本文件存放目录
    pub input_folder: String,
    /// 解析结果输出目录
    pub output_folder: String,
    /// 输出格式（json 人工复核前导入下游；toml 直接人工编辑）
    pub output_format: OutputFormat,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 未识别文档警告文件
    pub warn_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrent_docs: 4,
            input_folder: "input_text".to_string(),
            output_folder: "output_records".to_string(),
            output_format: OutputFormat::Json,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            warn_file: "warn.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            max_concurrent_docs: std::env::var("MAX_CONCURRENT_DOCS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrent_docs),
            input_folder: std::env::var("INPUT_FOLDER").unwrap_or(default.input_folder),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(default.output_folder),
            output_format: std::env::var("OUTPUT_FORMAT").ok().and_then(|v| OutputFormat::from_str(&v)).unwrap_or(default.output_format),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            warn_file: std::env::var("WARN_FILE").unwrap_or(default.warn_file),
        }
    }
}
