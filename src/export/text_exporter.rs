use super::{ExportError, ExportEvent, Exporter};
use crate::curve::GenerationRequest;
use crate::geometry::Segment;

use std::io::Write;

/// Plain text output, one `x1 y1 x2 y2` line per segment
pub struct TextExporter<W: Write> {
    writer: W,
}

impl<W: Write> TextExporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Exporter for TextExporter<W> {
    type Error = ExportError;

    fn initialize(&mut self, request: &GenerationRequest, total: usize) -> Result<(), Self::Error> {
        writeln!(
            self.writer,
            "# depth {} segments {} baseline {} {} {} {}",
            request.depth, total, request.start.x, request.start.y, request.end.x, request.end.y
        )?;
        Ok(())
    }

    fn handle_event(&mut self, event: &ExportEvent) -> Result<(), Self::Error> {
        if let ExportEvent::Progress { .. } = event {
            self.writer.flush()?;
        }
        Ok(())
    }

    fn write_segment(&mut self, _index: usize, segment: &Segment) -> Result<(), Self::Error> {
        writeln!(
            self.writer,
            "{} {} {} {}",
            segment.start.x, segment.start.y, segment.end.x, segment.end.y
        )?;
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), Self::Error> {
        self.writer.flush()?;
        Ok(())
    }
}
