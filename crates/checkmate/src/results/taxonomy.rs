use super::domain::RequirementStatus;
use tracing::warn;

pub const FULFILLED_LABEL: &str = "충족";
pub const PARTIAL_LABEL: &str = "부분 충족";
pub const NOT_FULFILLED_LABEL: &str = "미충족";

impl RequirementStatus {
    /// Localized label shown next to a requirement. Unrecognized codes are
    /// shown as-is.
    pub fn label(&self) -> &str {
        match self {
            Self::Fulfilled => FULFILLED_LABEL,
            Self::Partial => PARTIAL_LABEL,
            Self::NotFulfilled => NOT_FULFILLED_LABEL,
            Self::Other(code) => {
                warn!(status = %code, "unrecognized requirement status; showing raw code");
                code.as_str()
            }
        }
    }
}

/// Maps a raw verdict code to its display label.
pub fn label(code: &str) -> String {
    RequirementStatus::from(code).label().to_string()
}
