mod chamber;
mod dimensions;
mod filename_parser;
mod glob;
mod modality;
mod record;
mod resolution;
mod temporal;
mod tokenizer;

pub use filename_parser::{FilenameParser, parse_path};
pub use glob::Glob;
pub use modality::{Modality, ModalityRule, classify, modality_rules};
pub use record::FileMetadata;
pub use resolution::{FieldGap, Resolution};
pub use temporal::CaptureTime;
pub use tokenizer::{IntToken, TokenizedPath, tokenize};
