use std::sync::Arc;

use tracing::{debug, warn};

use super::domain::{RequirementStatus, ResultInput};
use super::export::{ExportTrigger, ReportExporter, ReportGateway, ReportSaver};
use super::notify::{ErrorKind, ErrorNotifier};
use super::score::format_score;
use super::selection::{ResolvedItem, SelectionState};
use super::views::{
    InspectionView, ResultBoardView, ResultItemView, ResultView, VerdictCountEntry,
};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("no result input was provided")]
    Missing,
    #[error("result input rejected: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ResultInput {
    pub fn from_value(value: Option<serde_json::Value>) -> Result<Self, InputError> {
        match value {
            None | Some(serde_json::Value::Null) => Err(InputError::Missing),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }
}

/// Result page state: the validated input plus the inspection panel.
///
/// A presenter built without usable input stays in the no-data state for its
/// whole lifetime and ignores every interaction.
#[derive(Debug)]
pub struct ResultPresenter {
    input: Option<ResultInput>,
    selection: SelectionState,
    notifier: Arc<dyn ErrorNotifier>,
}

impl ResultPresenter {
    pub fn new(input: Option<ResultInput>, notifier: Arc<dyn ErrorNotifier>) -> Self {
        match &input {
            Some(input) => {
                let summary = &input.summary;
                if !summary.counts_match_details() {
                    debug!(
                        counted = summary.total(),
                        details = summary.details.len(),
                        "summary counts differ from detail rows"
                    );
                }
            }
            None => {
                let kind = ErrorKind::MissingInput;
                notifier.on_error(kind, kind.message());
            }
        }

        Self {
            input,
            selection: SelectionState::Closed,
            notifier,
        }
    }

    pub fn from_value(value: Option<serde_json::Value>, notifier: Arc<dyn ErrorNotifier>) -> Self {
        let input = match ResultInput::from_value(value) {
            Ok(input) => Some(input),
            Err(err) => {
                warn!(error = %err, "result view entered without usable input");
                None
            }
        };
        Self::new(input, notifier)
    }

    pub fn from_json(raw: &str, notifier: Arc<dyn ErrorNotifier>) -> Self {
        let value = match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(error = %err, "result input is not valid JSON");
                None
            }
        };
        Self::from_value(value, notifier)
    }

    pub fn has_data(&self) -> bool {
        self.input.is_some()
    }

    pub fn input(&self) -> Option<&ResultInput> {
        self.input.as_ref()
    }

    pub fn score(&self) -> Option<f64> {
        self.input.as_ref().map(|input| input.summary.score())
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Opens the detail panel for the item at `index`. Returns `false` when
    /// there is no such item.
    pub fn activate(&mut self, index: usize) -> bool {
        let Some(result) = self
            .input
            .as_ref()
            .and_then(|input| input.summary.details.get(index))
        else {
            return false;
        };

        self.selection.select(result.clone());
        true
    }

    pub fn dismiss(&mut self) {
        self.selection.dismiss();
    }

    pub fn export_trigger<G, S>(
        &self,
        exporter: &Arc<ReportExporter<G, S>>,
    ) -> Option<ExportTrigger<G, S>>
    where
        G: ReportGateway,
        S: ReportSaver,
    {
        self.input.as_ref().map(|input| {
            ExportTrigger::new(
                Arc::clone(exporter),
                input.requirements_file.clone(),
                input.submission_file.clone(),
            )
        })
    }

    pub fn notifier(&self) -> &Arc<dyn ErrorNotifier> {
        &self.notifier
    }

    pub fn view(&self) -> ResultView {
        let Some(input) = &self.input else {
            return ResultView::NoData {
                message: ErrorKind::MissingInput.message(),
            };
        };

        let summary = &input.summary;
        let score = summary.score();

        let counts = [
            (RequirementStatus::Fulfilled, summary.fulfilled),
            (RequirementStatus::Partial, summary.partial),
            (RequirementStatus::NotFulfilled, summary.not_fulfilled),
        ]
        .into_iter()
        .map(|(status, count)| VerdictCountEntry {
            status_label: status.label().to_string(),
            status,
            count,
        })
        .collect();

        let items = summary
            .details
            .iter()
            .enumerate()
            .map(|(index, result)| ResultItemView {
                index,
                requirement_text: result.requirement_text.clone(),
                status: result.status.clone(),
                status_label: result.status.label().to_string(),
            })
            .collect();

        ResultView::Ready(ResultBoardView {
            score,
            score_label: format!("{}점", format_score(score)),
            counts,
            items,
            inspection: self.selection.open_item().map(inspection_view),
        })
    }
}

fn inspection_view(item: &ResolvedItem) -> InspectionView {
    let result = &item.result;
    let keyword_coverage = match (result.matched_keyword_count, result.total_keyword_count) {
        (Some(matched), Some(total)) if total > 0 => Some(format!("{matched}/{total}")),
        _ => None,
    };

    InspectionView {
        requirement_text: result.requirement_text.clone(),
        status: result.status.clone(),
        status_label: item.status_label().to_string(),
        evidence: item.display_evidence.clone(),
        keyword_coverage,
        match_score: result.score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::domain::{AnalysisSummary, FileRef, RequirementResult};
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingNotifier {
        events: Mutex<Vec<(ErrorKind, String)>>,
    }

    impl ErrorNotifier for RecordingNotifier {
        fn on_error(&self, kind: ErrorKind, message: &str) {
            self.events
                .lock()
                .expect("notifier mutex poisoned")
                .push((kind, message.to_string()));
        }
    }

    fn sample_input() -> ResultInput {
        ResultInput {
            summary: AnalysisSummary {
                fulfilled: 3,
                partial: 2,
                not_fulfilled: 0,
                details: vec![
                    RequirementResult::new("회원가입", "FULFILLED").with_evidence("signup()"),
                    RequirementResult::new("A", "PARTIAL")
                        .with_evidence("")
                        .with_reason("근거확인불가"),
                ],
            },
            requirements_file: FileRef::new("requirements.pdf"),
            submission_file: FileRef::new("submission.docx"),
        }
    }

    #[test]
    fn missing_input_notifies_once_and_ignores_interaction() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut presenter = ResultPresenter::new(None, notifier.clone());

        assert!(!presenter.activate(0));
        presenter.dismiss();
        assert!(presenter.score().is_none());
        assert!(matches!(
            presenter.view(),
            ResultView::NoData { message } if message == "결과 데이터가 없습니다. 다시 분석해주세요."
        ));

        let events = notifier.events.lock().expect("notifier mutex poisoned");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, ErrorKind::MissingInput);
    }

    #[test]
    fn activate_opens_resolved_item() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut presenter = ResultPresenter::new(Some(sample_input()), notifier.clone());

        assert!(presenter.activate(1));
        let view = presenter.view();
        let inspection = view
            .board()
            .and_then(|board| board.inspection.as_ref())
            .expect("panel open");
        assert_eq!(inspection.evidence, "근거확인불가");
        assert_eq!(inspection.status_label, "부분 충족");
        assert!(notifier.events.lock().expect("notifier mutex poisoned").is_empty());
    }

    #[test]
    fn out_of_range_activation_keeps_current_selection() {
        let mut presenter =
            ResultPresenter::new(Some(sample_input()), Arc::new(RecordingNotifier::default()));
        presenter.activate(0);
        assert!(!presenter.activate(7));
        let open = presenter.selection().open_item().expect("still open");
        assert_eq!(open.result.requirement_text, "회원가입");
    }

    #[test]
    fn malformed_json_enters_no_data() {
        let notifier = Arc::new(RecordingNotifier::default());
        let presenter = ResultPresenter::from_json(
            r#"{"summary": {"fulfilled": 1}, "requirementsFile": "r", "submissionFile": "s"}"#,
            notifier.clone(),
        );
        assert!(!presenter.has_data());
        assert_eq!(
            notifier.events.lock().expect("notifier mutex poisoned").len(),
            1
        );
    }
}
