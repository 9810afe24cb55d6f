pub mod exporter;
pub mod gateway;
pub mod saver;

pub use exporter::{ExportError, ExportOutcome, ExportTrigger, ReportExporter, REPORT_FILENAME};
pub use gateway::{ReportArtifact, ReportGateway, ReportGatewayError};
pub use saver::{DirectorySaver, ReportSaver, SaveError, SavedReport};
