use serde::{Deserialize, Serialize};

/// 题目默认分值，由人工复核后调整，解析阶段不从文本推断
pub const DEFAULT_SCORE: f64 = 1.0;

/// 题目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// 选择题
    Mcq,
    /// 问答题（只由下游人工编辑产生，解析引擎不会输出）
    Essay,
}

/// 单个选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// 选项内容（去掉 "A." 等标记后的文本）
    pub content: String,
    /// 是否为正确答案，解析阶段恒为 false，由人工复核后标记
    pub is_correct: bool,
}

impl QuestionOption {
    /// 以选项内容新建一个未标记的选项
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_correct: false,
        }
    }
}

/// 单道题目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// 题干内容（去掉 "Câu 1:" 等题号后的文本）
    pub content: String,
    /// 题目类型
    pub question_type: QuestionType,
    /// 分值
    pub score: f64,
    /// 选项列表，保持出现顺序
    #[serde(default)]
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// 以题干内容新建一道选择题
    pub fn new_mcq(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            question_type: QuestionType::Mcq,
            score: DEFAULT_SCORE,
            options: Vec::new(),
        }
    }
}

/// 一份解析完成的试卷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedPaper {
    /// 试卷名称（来自文件名，不含扩展名）
    pub name: String,
    /// 解析时间
    pub parsed_at: String,
    /// 识别出的题目列表
    pub questions: Vec<Question>,
    /// 源文件路径
    #[serde(skip_serializing, skip_deserializing)]
    pub source_file: Option<String>,
}
