use std::path::PathBuf;

pub const DEFAULT_MISSING_LIMIT: usize = 5;

/// Options for a single scoring run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Drop English function words and job-posting boilerplate before vectorizing
    pub stop_words: bool,
    /// Reduce terms to their Snowball English stem
    pub stem: bool,
    /// Use `1 + ln(count)` instead of the raw count as term frequency
    pub sublinear_tf: bool,
    /// Add the `missing` skills list to the report
    pub detailed: bool,
    /// Maximum number of entries in the `missing` list
    pub missing_limit: usize,
    /// Custom skill catalogue replacing the built-in one
    pub skills_path: Option<PathBuf>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            stop_words: true,
            stem: false,
            sublinear_tf: false,
            detailed: false,
            missing_limit: DEFAULT_MISSING_LIMIT,
            skills_path: None,
        }
    }
}
