pub mod parse_report;
pub mod question;

pub use parse_report::{ParseReport, ParseStats};
pub use question::{ParsedPaper, Question, QuestionOption, QuestionType, DEFAULT_SCORE};
