pub mod config;
pub mod error;
pub mod extractor;
pub mod matcher;
pub mod report;
pub mod similarity;
pub mod skills;
pub mod tokenizer;
pub mod vectorizer;

pub use config::ScoringConfig;
pub use error::{Error, Result};
pub use matcher::Matcher;
pub use report::{ErrorReport, MatchReport};
