pub mod events;
pub mod json_exporter;
pub mod text_exporter;

use core::str::FromStr;
use std::fmt;
use std::io;

use crate::curve::GenerationRequest;
use crate::geometry::Segment;

pub use events::ExportEvent;
pub use json_exporter::JsonExporter;
pub use text_exporter::TextExporter;

#[derive(Debug)]
pub enum ExportError {
    Io(io::Error),
    Json(serde_json::Error),
    NonFinite { index: usize },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "failed to write segments: {}", e),
            ExportError::Json(e) => write!(f, "failed to encode segments: {}", e),
            ExportError::NonFinite { index } => {
                write!(f, "segment {} has a non-finite coordinate", index)
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            ExportError::Json(e) => Some(e),
            ExportError::NonFinite { .. } => None,
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Json(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Text,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "text" | "txt" => Ok(Format::Text),
            _ => Err(format!("unknown format: {}", s)),
        }
    }
}

/// Consumer of a generated segment sequence
pub trait Exporter {
    type Error;

    /// Prepare for `total` segments produced by `request`
    fn initialize(&mut self, request: &GenerationRequest, total: usize) -> Result<(), Self::Error>;

    /// Handle an export event
    fn handle_event(&mut self, event: &ExportEvent) -> Result<(), Self::Error> {
        let _ = event;
        Ok(())
    }

    /// Write one segment; `index` follows generation order
    fn write_segment(&mut self, index: usize, segment: &Segment) -> Result<(), Self::Error>;

    /// Flush anything buffered and close the output
    fn finalize(&mut self) -> Result<(), Self::Error>;
}

/// Segments written between two `ExportEvent::Progress` events.
pub const PROGRESS_INTERVAL: usize = 4096;

/// Drives `exporter` over every segment in order.
pub fn export_all<E>(
    exporter: &mut E,
    request: &GenerationRequest,
    segments: &[Segment],
) -> Result<(), E::Error>
where
    E: Exporter + ?Sized,
{
    export_with_progress(exporter, request, segments, PROGRESS_INTERVAL, |_| {})
}

/// Like [`export_all`], emitting `ExportEvent::Progress` and calling
/// `on_progress` every `interval` segments and once more at the end.
pub fn export_with_progress<E, F>(
    exporter: &mut E,
    request: &GenerationRequest,
    segments: &[Segment],
    interval: usize,
    mut on_progress: F,
) -> Result<(), E::Error>
where
    E: Exporter + ?Sized,
    F: FnMut(usize),
{
    let interval = interval.max(1);

    exporter.initialize(request, segments.len())?;
    exporter.handle_event(&ExportEvent::Started)?;

    for (index, segment) in segments.iter().enumerate() {
        exporter.write_segment(index, segment)?;

        let written = index + 1;
        if written % interval == 0 {
            exporter.handle_event(&ExportEvent::Progress { written })?;
            on_progress(written);
        }
    }

    on_progress(segments.len());

    exporter.handle_event(&ExportEvent::Completed)?;
    exporter.finalize()
}
