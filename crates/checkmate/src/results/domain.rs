use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict code attached to a single requirement.
///
/// Codes the backend may introduce later are kept verbatim in `Other` so the
/// presenter never rejects a summary because of an unfamiliar status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequirementStatus {
    Fulfilled,
    Partial,
    NotFulfilled,
    Other(String),
}

impl RequirementStatus {
    pub fn code(&self) -> &str {
        match self {
            Self::Fulfilled => "FULFILLED",
            Self::Partial => "PARTIAL",
            Self::NotFulfilled => "NOT_FULFILLED",
            Self::Other(code) => code.as_str(),
        }
    }

    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for RequirementStatus {
    fn from(value: &str) -> Self {
        match value {
            "FULFILLED" => Self::Fulfilled,
            "PARTIAL" => Self::Partial,
            "NOT_FULFILLED" => Self::NotFulfilled,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for RequirementStatus {
    fn from(value: String) -> Self {
        match Self::from(value.as_str()) {
            Self::Other(_) => Self::Other(value),
            known => known,
        }
    }
}

impl From<RequirementStatus> for String {
    fn from(value: RequirementStatus) -> Self {
        match value {
            RequirementStatus::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for RequirementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One requirement's verdict as produced by the analysis backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementResult {
    pub requirement_text: String,
    pub status: RequirementStatus,
    #[serde(default)]
    pub evidence: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement_id: Option<u64>,
    /// Keyword match ratio between 0.0 and 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_keyword_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_keyword_count: Option<u32>,
}

impl RequirementResult {
    pub fn new(requirement_text: impl Into<String>, status: impl Into<RequirementStatus>) -> Self {
        Self {
            requirement_text: requirement_text.into(),
            status: status.into(),
            evidence: None,
            reason: None,
            requirement_id: None,
            score: None,
            matched_keyword_count: None,
            total_keyword_count: None,
        }
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Aggregate verdict counts plus the ordered per-requirement details.
///
/// The counts and `details` come from different places in the backend and are
/// not guaranteed to agree; scoring only ever uses the counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub fulfilled: u32,
    pub partial: u32,
    pub not_fulfilled: u32,
    #[serde(default)]
    pub details: Vec<RequirementResult>,
}

impl AnalysisSummary {
    pub fn total(&self) -> u64 {
        u64::from(self.fulfilled) + u64::from(self.partial) + u64::from(self.not_fulfilled)
    }

    pub fn counts_match_details(&self) -> bool {
        self.total() == self.details.len() as u64
    }
}

/// Opaque handle to an uploaded document (requirements or submission).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileRef(pub String);

impl FileRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the result view receives when it is entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultInput {
    pub summary: AnalysisSummary,
    pub requirements_file: FileRef,
    pub submission_file: FileRef,
}
