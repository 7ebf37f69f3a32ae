pub mod line_classifier;
pub mod line_normalizer;
pub mod option_label;
pub mod record_writer;
pub mod segmenter;
pub mod warn_writer;

pub use line_classifier::{LineClassifier, LineKind};
pub use line_normalizer::normalize_lines;
pub use option_label::normalize_label;
pub use record_writer::{OutputFormat, RecordWriter};
pub use segmenter::Segmenter;
pub use warn_writer::WarnWriter;
