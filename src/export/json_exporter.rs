use super::{ExportError, ExportEvent, Exporter};
use crate::curve::GenerationRequest;
use crate::geometry::Segment;

use std::io::Write;

/// Streams segments as a JSON array of `{"start": {..}, "end": {..}}` objects
pub struct JsonExporter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonExporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Exporter for JsonExporter<W> {
    type Error = ExportError;

    fn initialize(&mut self, _request: &GenerationRequest, _total: usize) -> Result<(), Self::Error> {
        self.writer.write_all(b"[")?;
        Ok(())
    }

    fn handle_event(&mut self, event: &ExportEvent) -> Result<(), Self::Error> {
        if let ExportEvent::Progress { .. } = event {
            self.writer.flush()?;
        }
        Ok(())
    }

    fn write_segment(&mut self, index: usize, segment: &Segment) -> Result<(), Self::Error> {
        // serde_json writes NaN and infinities as null, which would not read back
        let coordinates = [segment.start.x, segment.start.y, segment.end.x, segment.end.y];
        if coordinates.iter().any(|c| !c.is_finite()) {
            return Err(ExportError::NonFinite { index });
        }

        if index > 0 {
            self.writer.write_all(b",")?;
        }

        if self.pretty {
            self.writer.write_all(b"\n  ")?;
        }

        serde_json::to_writer(&mut self.writer, segment)?;
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), Self::Error> {
        if self.pretty {
            self.writer.write_all(b"\n")?;
        }

        self.writer.write_all(b"]\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
