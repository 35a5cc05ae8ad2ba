mod analysis;
mod book;

pub use analysis::{AnalysisKind, AnalysisResult, ModelName};
pub use book::Book;
