//! 行分类服务 - 业务能力层
//!
//! 只负责"判定一行属于哪一类"能力，不持有任何解析状态

use crate::services::option_label::normalize_label;
use anyhow::Result;
use regex::Regex;

/// 噪声行长度上限（答案提示行通常很短，长行不按噪声处理）
const NOISE_MAX_CHARS: usize = 50;

/// 噪声行标记词，命中即整行跳过（不区分大小写）
const NOISE_MARKERS: [&str; 5] = ["đáp án", "lời giải", "hướng dẫn", "answer key", "key:"];

/// 单行的分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// 答案提示等噪声行，整行忽略
    Noise,
    /// 新题目的起始行，content 为去掉题号后的内容
    QuestionStart { content: String },
    /// 选项起始行，label 为规整后的选项标记，content 为去掉标记后的内容
    OptionStart { label: char, content: String },
    /// 上一实体的延续行
    Continuation,
}

/// 行分类器
///
/// 职责：
/// - 对单行按固定优先级分类：噪声 → 题目起始 → 选项起始 → 延续
/// - 除编译好的正则外不持有任何状态
/// - 不认识游标，"是否有打开的题目"由调用方传入
///
/// 噪声判定必须最先执行：答案提示行可能以数字开头，
/// 否则会被误判为新题目。没有打开的题目时，
/// 选项形状的行降级为延续行
pub struct LineClassifier {
    question_pattern: Regex,
    option_pattern: Regex,
}

impl LineClassifier {
    /// 创建新的行分类器（正则只编译一次）
    pub fn new() -> Result<Self> {
        // 题目起始: "Câu 1:" / "Question 2." / "Bài 3)" / "12."
        let question_pattern = Regex::new(r"^(?:(?:Câu|Question|Bài)\s*)?\d+[.:)]")?;
        // 选项起始: "A." / "b)" / "C/" / "2-"
        let option_pattern = Regex::new(r"^([A-Da-d1-4])[.)/-]")?;

        Ok(Self {
            question_pattern,
            option_pattern,
        })
    }

    /// 对一行已规整的非空文本分类
    ///
    /// # 参数
    /// - `line`: 已去除首尾空白的非空行
    /// - `question_open`: 当前是否有未关闭的题目
    pub fn classify(&self, line: &str, question_open: bool) -> LineKind {
        if self.is_noise(line) {
            return LineKind::Noise;
        }

        let question = self.question_pattern.find(line);
        let option = if question_open {
            self.match_option(line)
        } else {
            None
        };

        match (question, option) {
            (Some(m), None) => LineKind::QuestionStart {
                content: line[m.end()..].trim().to_string(),
            },
            // 裸数字 1-4 既像题号又像选项标记时按分隔符裁决：
            // "1." 这类点号编号是题号，"1)" 这类括号编号是数字式选项
            (Some(m), Some(_)) if Self::numbered_with_dot(line) => LineKind::QuestionStart {
                content: line[m.end()..].trim().to_string(),
            },
            (_, Some((label, content))) => LineKind::OptionStart { label, content },
            (None, None) => LineKind::Continuation,
        }
    }

    /// 判定噪声行：长度低于上限且包含答案提示标记
    fn is_noise(&self, line: &str) -> bool {
        if line.chars().count() >= NOISE_MAX_CHARS {
            return false;
        }

        let lowered = line.to_lowercase();
        NOISE_MARKERS.iter().any(|marker| lowered.contains(marker))
    }

    /// 匹配选项起始行，返回规整后的标记和去前缀后的内容
    fn match_option(&self, line: &str) -> Option<(char, String)> {
        let caps = self.option_pattern.captures(line)?;
        let raw_label = caps.get(1)?.as_str().chars().next()?;
        let content = line[caps.get(0)?.end()..].trim().to_string();
        Some((normalize_label(raw_label), content))
    }

    /// 题号/选项双匹配只会发生在"单个数字 1-4 加 `.` 或 `)`"的行上，
    /// 此时第二个字符是点号的按题号处理
    fn numbered_with_dot(line: &str) -> bool {
        line.chars().nth(1) == Some('.')
    }
}
