use serde::Serialize;
use std::fmt::Debug;
use tracing::error;

pub const MISSING_INPUT_MESSAGE: &str = "결과 데이터가 없습니다. 다시 분석해주세요.";
pub const EXPORT_FAILURE_MESSAGE: &str = "보고서 다운로드 중 오류 발생";

/// User-facing error categories. Deliberately coarse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingInput,
    ExportFailure,
}

impl ErrorKind {
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingInput => MISSING_INPUT_MESSAGE,
            Self::ExportFailure => EXPORT_FAILURE_MESSAGE,
        }
    }
}

/// Hook through which the host shows errors to the user (toast, dialog, ...).
pub trait ErrorNotifier: Debug + Send + Sync {
    fn on_error(&self, kind: ErrorKind, message: &str);
}

/// Notifier that only records errors in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl ErrorNotifier for TracingNotifier {
    fn on_error(&self, kind: ErrorKind, message: &str) {
        error!(?kind, %message, "user-facing error");
    }
}
