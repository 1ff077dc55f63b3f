#![cfg(feature = "export")]

use dragon_curve::{
    export::{
        export_all, export_with_progress, ExportError, ExportEvent, Exporter, Format, JsonExporter,
        TextExporter,
    },
    geometry::{Point, Segment},
    GenerationRequest,
};

fn request(depth: u32) -> GenerationRequest {
    GenerationRequest::new(depth, Point::new(400.0, 400.0), Point::new(600.0, 400.0))
}

#[test]
fn test_json_export_round_trips_order() {
    let request = request(5);
    let segments = request.generate();
    let mut exporter = JsonExporter::new(Vec::new());

    export_all(&mut exporter, &request, &segments).unwrap();

    let decoded: Vec<Segment> = serde_json::from_slice(&exporter.into_inner()).unwrap();
    assert_eq!(decoded, segments);
}

#[test]
fn test_json_export_shape() {
    let request = request(0);
    let segments = request.generate();
    let mut exporter = JsonExporter::new(Vec::new());

    export_all(&mut exporter, &request, &segments).unwrap();

    let output = String::from_utf8(exporter.into_inner()).unwrap();
    assert_eq!(
        output,
        "[{\"start\":{\"x\":400.0,\"y\":400.0},\"end\":{\"x\":600.0,\"y\":400.0}}]\n"
    );
}

#[test]
fn test_pretty_json_is_valid() {
    let request = request(3);
    let segments = request.generate();
    let mut exporter = JsonExporter::new(Vec::new()).pretty(true);

    export_all(&mut exporter, &request, &segments).unwrap();

    let output = String::from_utf8(exporter.into_inner()).unwrap();
    assert_eq!(output.lines().count(), segments.len() + 2);

    let decoded: Vec<Segment> = serde_json::from_str(&output).unwrap();
    assert_eq!(decoded, segments);
}

#[test]
fn test_text_export() {
    let request = request(1);
    let segments = request.generate();
    let mut exporter = TextExporter::new(Vec::new());

    export_all(&mut exporter, &request, &segments).unwrap();

    let output = String::from_utf8(exporter.into_inner()).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("# depth 1 segments 2"));
    assert_eq!(lines[1], "400 400 500 500");
    assert_eq!(lines[2], "500 500 600 400");
}

#[derive(Default)]
struct Recorder {
    events: Vec<ExportEvent>,
    indices: Vec<usize>,
    total: usize,
    finalized: bool,
}

impl Exporter for Recorder {
    type Error = String;

    fn initialize(&mut self, _request: &GenerationRequest, total: usize) -> Result<(), Self::Error> {
        self.total = total;
        Ok(())
    }

    fn handle_event(&mut self, event: &ExportEvent) -> Result<(), Self::Error> {
        self.events.push(event.clone());
        Ok(())
    }

    fn write_segment(&mut self, index: usize, _segment: &Segment) -> Result<(), Self::Error> {
        self.indices.push(index);
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), Self::Error> {
        self.finalized = true;
        Ok(())
    }
}

#[test]
fn test_export_all_drives_exporter_in_order() {
    let request = request(4);
    let segments = request.generate();
    let mut recorder = Recorder::default();

    export_all(&mut recorder, &request, &segments).unwrap();

    assert_eq!(recorder.total, 16);
    assert_eq!(recorder.indices, (0..16).collect::<Vec<_>>());
    assert_eq!(recorder.events, vec![ExportEvent::Started, ExportEvent::Completed]);
    assert!(recorder.finalized);
}

#[test]
fn test_export_with_progress_reports_batches() {
    let request = request(4);
    let segments = request.generate();
    let mut recorder = Recorder::default();
    let mut reported = Vec::new();

    export_with_progress(&mut recorder, &request, &segments, 5, |written| reported.push(written)).unwrap();

    assert_eq!(reported, vec![5, 10, 15, 16]);
    assert_eq!(
        recorder.events,
        vec![
            ExportEvent::Started,
            ExportEvent::Progress { written: 5 },
            ExportEvent::Progress { written: 10 },
            ExportEvent::Progress { written: 15 },
            ExportEvent::Completed,
        ]
    );
    assert_eq!(recorder.indices.len(), 16);
}

#[test]
fn test_json_export_rejects_overflowed_coordinates() {
    // The baseline delta overflows to infinity, so the apex is not finite
    let request = GenerationRequest::new(1, Point::new(-1e308, 0.0), Point::new(1e308, 0.0));
    let segments = request.generate();
    assert!(!segments[0].end.y.is_finite());

    let mut exporter = JsonExporter::new(Vec::new());
    let result = export_all(&mut exporter, &request, &segments);

    assert!(matches!(result, Err(ExportError::NonFinite { index: 0 })));
}

#[test]
fn test_json_export_rejects_nan() {
    let request = request(0);
    let segments = vec![Segment::new(Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0))];
    let mut exporter = JsonExporter::new(Vec::new());

    let error = export_all(&mut exporter, &request, &segments).unwrap_err();
    assert!(matches!(error, ExportError::NonFinite { index: 0 }));
    assert_eq!(error.to_string(), "segment 0 has a non-finite coordinate");
}

#[test]
fn test_format_from_str() {
    assert_eq!("json".parse::<Format>(), Ok(Format::Json));
    assert_eq!("TEXT".parse::<Format>(), Ok(Format::Text));
    assert_eq!("txt".parse::<Format>(), Ok(Format::Text));
    assert!("svg".parse::<Format>().is_err());
}
