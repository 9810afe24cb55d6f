//! Result page core: scoring, verdict labels, evidence resolution, the
//! inspection panel, and report export.

pub mod domain;
pub mod evidence;
pub mod export;
pub mod notify;
pub mod presenter;
pub mod score;
pub mod selection;
pub mod taxonomy;
pub mod views;

pub use domain::{AnalysisSummary, FileRef, RequirementResult, RequirementStatus, ResultInput};
pub use evidence::resolve;
pub use notify::{ErrorKind, ErrorNotifier, TracingNotifier};
pub use presenter::{InputError, ResultPresenter};
pub use score::score;
pub use selection::{ResolvedItem, SelectionEvent, SelectionState};
pub use taxonomy::label;
pub use views::ResultView;
