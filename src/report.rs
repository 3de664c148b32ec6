use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Outcome of one resume/job comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Cosine similarity as a percentage, two decimal places
    pub score: f64,
    /// Skills present in both documents, in job-description order
    pub matched: Vec<String>,
    /// Skills the job asks for that the resume lacks (detailed mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<String>>,
    /// Percentage of requested skills the resume covers (detailed mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<u32>,
}

impl MatchReport {
    pub const fn new(score: f64, matched: Vec<String>) -> Self {
        Self {
            score,
            matched,
            missing: None,
            coverage: None,
        }
    }

    #[must_use]
    pub fn with_skill_gap(mut self, missing: Vec<String>, coverage: u32) -> Self {
        self.missing = Some(missing);
        self.coverage = Some(coverage);
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Writes the report as one line of JSON.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_line(writer, self)
    }
}

/// Machine-readable failure record written in place of a [`MatchReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
    pub detail: String,
}

impl From<&Error> for ErrorReport {
    fn from(err: &Error) -> Self {
        Self {
            error: err.code().to_string(),
            detail: err.to_string(),
        }
    }
}

impl ErrorReport {
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_line(writer, self)
    }
}

fn write_line<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer).map_err(|e| Error::Generic(format!("Failed to write output: {e}")))?;
    writer
        .flush()
        .map_err(|e| Error::Generic(format!("Failed to flush output: {e}")))
}
