use super::domain::RequirementStatus;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct VerdictCountEntry {
    pub status: RequirementStatus,
    pub status_label: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultItemView {
    pub index: usize,
    pub requirement_text: String,
    pub status: RequirementStatus,
    pub status_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InspectionView {
    pub requirement_text: String,
    pub status: RequirementStatus,
    pub status_label: String,
    pub evidence: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_coverage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultBoardView {
    pub score: f64,
    pub score_label: String,
    pub counts: Vec<VerdictCountEntry>,
    pub items: Vec<ResultItemView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspection: Option<InspectionView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResultView {
    NoData { message: &'static str },
    Ready(ResultBoardView),
}

impl ResultView {
    pub fn board(&self) -> Option<&ResultBoardView> {
        match self {
            Self::Ready(board) => Some(board),
            Self::NoData { .. } => None,
        }
    }
}
