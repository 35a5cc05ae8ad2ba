pub mod analysis;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;

pub mod stage {
    use log::{error, info};

    use crate::error::{AnalysisError, FetchError};
    use crate::models::{AnalysisResult, Book};

    pub struct FetchStage;

    impl FetchStage {
        pub fn update(r: &Result<Book, FetchError>) {
            match r {
                Ok(book) => info!(
                    "fetch finish\nid = {}\ntitle = {}",
                    book.id,
                    book.title.as_deref().unwrap_or("(unavailable)")
                ),
                Err(err) => error!("fetch error\n{:?}", err),
            }
        }
    }

    pub struct AnalyzeStage;

    impl AnalyzeStage {
        pub fn update(r: &Result<AnalysisResult, AnalysisError>) {
            match r {
                Ok(result) => info!(
                    "analyze finish\nkind = {}\nmodel = {}",
                    result.kind, result.model
                ),
                Err(err) => error!("analyze error\n{:?}", err),
            }
        }
    }
}
