use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{error, info, warn};

use super::gateway::{ReportGateway, ReportGatewayError};
use super::saver::{ReportSaver, SaveError, SavedReport};
use crate::results::domain::FileRef;
use crate::results::notify::{ErrorKind, ErrorNotifier};

pub const REPORT_FILENAME: &str = "CheckMate_Report.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved(SavedReport),
    /// The user has already been notified; nothing else to do.
    Failed,
    /// Another export was still pending, so this trigger was ignored.
    AlreadyInFlight,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Gateway(#[from] ReportGatewayError),
    #[error(transparent)]
    Save(#[from] SaveError),
}

/// Downloads the report for a pair of documents and hands it to the saver.
///
/// Only one export runs at a time per exporter. Failures are not retried.
#[derive(Debug)]
pub struct ReportExporter<G, S> {
    gateway: G,
    saver: S,
    notifier: Arc<dyn ErrorNotifier>,
    in_flight: AtomicBool,
}

impl<G, S> ReportExporter<G, S>
where
    G: ReportGateway,
    S: ReportSaver,
{
    pub fn new(gateway: G, saver: S, notifier: Arc<dyn ErrorNotifier>) -> Self {
        Self {
            gateway,
            saver,
            notifier,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn saver(&self) -> &S {
        &self.saver
    }

    pub async fn export_report(&self, requirements: &FileRef, submission: &FileRef) -> ExportOutcome {
        let Some(guard) = InFlightGuard::claim(&self.in_flight) else {
            warn!(%requirements, %submission, "report export already pending; ignoring trigger");
            return ExportOutcome::AlreadyInFlight;
        };

        let result = self.download_and_save(requirements, submission).await;
        drop(guard);

        match result {
            Ok(saved) => {
                info!(
                    filename = %saved.filename,
                    location = %saved.location,
                    size_bytes = saved.size_bytes,
                    "report exported"
                );
                ExportOutcome::Saved(saved)
            }
            Err(err) => {
                error!(error = %err, %requirements, %submission, "report export failed");
                let kind = ErrorKind::ExportFailure;
                self.notifier.on_error(kind, kind.message());
                ExportOutcome::Failed
            }
        }
    }

    async fn download_and_save(
        &self,
        requirements: &FileRef,
        submission: &FileRef,
    ) -> Result<SavedReport, ExportError> {
        let artifact = self
            .gateway
            .download_report(requirements, submission)
            .await?;
        let saved = self.saver.save(artifact, REPORT_FILENAME)?;
        Ok(saved)
    }
}

/// Detached export call bound to one result view's documents.
#[derive(Debug)]
pub struct ExportTrigger<G, S> {
    exporter: Arc<ReportExporter<G, S>>,
    requirements: FileRef,
    submission: FileRef,
}

impl<G, S> ExportTrigger<G, S>
where
    G: ReportGateway,
    S: ReportSaver,
{
    pub(crate) fn new(
        exporter: Arc<ReportExporter<G, S>>,
        requirements: FileRef,
        submission: FileRef,
    ) -> Self {
        Self {
            exporter,
            requirements,
            submission,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.exporter.is_pending()
    }

    pub async fn fire(self) -> ExportOutcome {
        self.exporter
            .export_report(&self.requirements, &self.submission)
            .await
    }
}

struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn claim(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
