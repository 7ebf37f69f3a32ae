use crate::models::Question;

/// 单次解析的结果
///
/// 空的题目列表是合法结果：可能是文本里确实没有可识别的题目，
/// 也可能是抽取失败被降级；两者共用同一形态，由调用方的日志区分
#[derive(Debug, Default)]
pub struct ParseReport {
    /// 识别出的题目，按出现顺序
    pub questions: Vec<Question>,
    /// 解析过程诊断计数
    pub stats: ParseStats,
}

/// 解析过程诊断计数
///
/// 只用于日志与排查，不影响结构化输出
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseStats {
    /// 规整后消费的总行数
    pub total_lines: usize,
    /// 被当作噪声跳过的行数（答案提示等）
    pub noise_lines: usize,
    /// 在任何题目出现之前被丢弃的行数（标题、页眉等）
    pub dropped_leading_lines: usize,
}
