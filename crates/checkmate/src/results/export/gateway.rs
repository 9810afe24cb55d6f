use std::fmt::Debug;
use std::future::Future;

use mime::Mime;

use crate::results::domain::FileRef;

/// Report bytes returned by the reporting service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub bytes: Vec<u8>,
    pub content_type: Mime,
}

impl ReportArtifact {
    pub fn new(bytes: impl Into<Vec<u8>>, content_type: Mime) -> Self {
        Self {
            bytes: bytes.into(),
            content_type,
        }
    }

    /// Plain-text report, the format the reporting service produces.
    pub fn text(body: impl Into<String>) -> Self {
        Self::new(body.into().into_bytes(), mime::TEXT_PLAIN_UTF_8)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportGatewayError {
    #[error("report service unavailable: {0}")]
    Unavailable(String),
    #[error("report service rejected the request: {0}")]
    Rejected(String),
    #[error("report artifact could not be read: {0}")]
    MalformedArtifact(String),
}

/// Remote capability that turns the two uploaded documents into a report.
pub trait ReportGateway: Debug + Send + Sync {
    fn download_report(
        &self,
        requirements: &FileRef,
        submission: &FileRef,
    ) -> impl Future<Output = Result<ReportArtifact, ReportGatewayError>> + Send;
}
