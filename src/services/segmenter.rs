//! 行序列切分服务 - 业务能力层
//!
//! 核心状态机：把分类后的行序列折叠成题目序列
//!
//! 游标同一时刻只处于三种形态之一：
//! 无打开题目 / 打开题目无打开选项 / 题目与选项都打开。
//! 游标以值的形式在折叠中传递，单次解析之外不存在共享状态，
//! 并发解析不同文档无需加锁

use crate::models::{ParseReport, ParseStats, Question, QuestionOption};
use crate::services::line_classifier::{LineClassifier, LineKind};
use anyhow::Result;
use tracing::debug;

/// 扫描游标
///
/// 选项打开时，打开的选项就是当前题目的最后一个选项
#[derive(Debug, Default)]
struct Cursor {
    /// 已关闭并产出的题目，之后不再被修改
    finished: Vec<Question>,
    /// 当前打开的题目
    current: Option<Question>,
    /// 当前题目内是否有打开的选项
    option_open: bool,
    stats: ParseStats,
}

impl Cursor {
    fn question_open(&self) -> bool {
        self.current.is_some()
    }

    /// 消费一行分类结果，返回推进后的游标
    fn advance(mut self, kind: LineKind, line: &str) -> Self {
        self.stats.total_lines += 1;

        match kind {
            LineKind::Noise => {
                // 噪声行完全不触碰游标
                self.stats.noise_lines += 1;
                debug!("跳过噪声行: {}", line);
            }
            LineKind::QuestionStart { content } => {
                self.flush();
                self.current = Some(Question::new_mcq(content));
            }
            LineKind::OptionStart { label, content } => {
                // 分类器保证此时必有打开的题目
                if let Some(question) = self.current.as_mut() {
                    debug!("选项 {} 开始", label);
                    question.options.push(QuestionOption::new(content));
                    self.option_open = true;
                }
            }
            LineKind::Continuation => match self.current.as_mut() {
                // 延续行归属最具体的打开实体：有打开的选项给选项，否则给题目
                Some(question) if self.option_open => {
                    if let Some(option) = question.options.last_mut() {
                        option.content.push(' ');
                        option.content.push_str(line);
                    }
                }
                Some(question) => {
                    question.content.push(' ');
                    question.content.push_str(line);
                }
                None => {
                    // 没有题目可以承接，按原样丢弃，只记入诊断
                    self.stats.dropped_leading_lines += 1;
                    debug!("丢弃题目出现前的行: {}", line);
                }
            },
        }

        self
    }

    /// 把当前打开的题目移入完成序列
    fn flush(&mut self) {
        if let Some(question) = self.current.take() {
            self.finished.push(question);
        }
        self.option_open = false;
    }
}

/// 行序列切分器
///
/// 职责：
/// - 持有分类器，按顺序消费规整后的行
/// - 把行序列折叠成题目序列并收集诊断计数
/// - 不做 IO，不认识文档来源
pub struct Segmenter {
    classifier: LineClassifier,
}

impl Segmenter {
    /// 创建新的切分器
    pub fn new() -> Result<Self> {
        Ok(Self {
            classifier: LineClassifier::new()?,
        })
    }

    /// 把规整后的行序列切分为题目序列
    pub fn segment<S: AsRef<str>>(&self, lines: &[S]) -> ParseReport {
        let mut cursor = lines.iter().fold(Cursor::default(), |cursor, line| {
            let line = line.as_ref();
            let kind = self.classifier.classify(line, cursor.question_open());
            cursor.advance(kind, line)
        });

        // 收尾：最后一道未关闭的题目也要产出
        cursor.flush();

        ParseReport {
            questions: cursor.finished,
            stats: cursor.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuestionType, DEFAULT_SCORE};

    fn segment(lines: &[&str]) -> ParseReport {
        Segmenter::new().expect("切分器创建失败").segment(lines)
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let report = segment(&[]);
        assert!(report.questions.is_empty());
        assert_eq!(report.stats, ParseStats::default());
    }

    /// 完整走一遍：两道题、字母选项、噪声行、无选项的尾题
    #[test]
    fn test_end_to_end_sequence() {
        let report = segment(&[
            "Câu 1: What is 2+2?",
            "A. 3",
            "B. 4",
            "Đáp án: B",
            "Câu 2. Explain gravity",
        ]);

        assert_eq!(report.questions.len(), 2);

        let q1 = &report.questions[0];
        assert_eq!(q1.content, "What is 2+2?");
        assert_eq!(q1.question_type, QuestionType::Mcq);
        assert_eq!(q1.score, DEFAULT_SCORE);
        assert_eq!(q1.options.len(), 2);
        assert_eq!(q1.options[0].content, "3");
        assert_eq!(q1.options[1].content, "4");
        assert!(q1.options.iter().all(|o| !o.is_correct));

        let q2 = &report.questions[1];
        assert_eq!(q2.content, "Explain gravity");
        assert!(q2.options.is_empty());

        assert_eq!(report.stats.noise_lines, 1);
        assert_eq!(report.stats.dropped_leading_lines, 0);
    }

    /// 新题号先关闭并产出上一题，且上一题不再被改动
    #[test]
    fn test_question_start_flushes_previous() {
        let report = segment(&[
            "Câu 1: thứ nhất",
            "A. một",
            "Câu 2: thứ hai",
            "nối dài câu hai",
        ]);

        assert_eq!(report.questions.len(), 2);
        assert_eq!(report.questions[0].content, "thứ nhất");
        assert_eq!(report.questions[0].options.len(), 1);
        assert_eq!(report.questions[1].content, "thứ hai nối dài câu hai");
    }

    /// 数字式选项按出现顺序进入当前题目，标记本身不出现在内容里
    #[test]
    fn test_numeric_option_markers() {
        let report = segment(&["Câu 1: Chọn màu", "1) Red", "2) Blue"]);

        assert_eq!(report.questions.len(), 1);
        let options = &report.questions[0].options;
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].content, "Red");
        assert_eq!(options[1].content, "Blue");
    }

    /// 噪声行不改变游标：前后的延续行仍归属同一实体
    #[test]
    fn test_noise_does_not_mutate_cursor() {
        let report = segment(&[
            "Câu 1: phần đầu",
            "Đáp án: A",
            "phần sau",
        ]);

        assert_eq!(report.questions.len(), 1);
        assert_eq!(report.questions[0].content, "phần đầu phần sau");
        assert_eq!(report.stats.noise_lines, 1);
    }

    /// 延续行归属最具体的打开实体
    #[test]
    fn test_continuation_appends_to_open_option_first() {
        let report = segment(&[
            "Câu 1: dòng đề",
            "dòng đề tiếp theo",
            "A. lựa chọn",
            "lựa chọn tiếp theo",
        ]);

        assert_eq!(report.questions.len(), 1);
        let q = &report.questions[0];
        assert_eq!(q.content, "dòng đề dòng đề tiếp theo");
        assert_eq!(q.options[0].content, "lựa chọn lựa chọn tiếp theo");
    }

    /// 题目出现前的行（标题、选项形状的行）被丢弃且不崩溃
    #[test]
    fn test_leading_lines_are_dropped() {
        let report = segment(&[
            "ĐỀ THI THỬ LẦN 1",
            "A. lựa chọn mồ côi",
            "Câu 1: nội dung",
        ]);

        assert_eq!(report.questions.len(), 1);
        assert_eq!(report.questions[0].content, "nội dung");
        assert!(report.questions[0].options.is_empty());
        assert_eq!(report.stats.dropped_leading_lines, 2);
    }

    /// 全是无法识别的行时产出为空，这是合法结果
    #[test]
    fn test_no_recognizable_question() {
        let report = segment(&["chỉ là văn bản", "không có đánh số"]);
        assert!(report.questions.is_empty());
        assert_eq!(report.stats.total_lines, 2);
        assert_eq!(report.stats.dropped_leading_lines, 2);
    }

    /// 最后一道未关闭的题目在输入结束时产出
    #[test]
    fn test_last_open_question_is_flushed() {
        let report = segment(&["Câu 9: câu cuối", "A. duy nhất"]);
        assert_eq!(report.questions.len(), 1);
        assert_eq!(report.questions[0].options.len(), 1);
    }
}
