use crate::cli::AppConfig;

use dragon_curve::curve::{generate, PRACTICAL_DEPTH_LIMIT};
use dragon_curve::export::{
    export_with_progress, ExportError, Exporter, Format, JsonExporter, TextExporter,
    PROGRESS_INTERVAL,
};
use dragon_curve::geometry::Bounds;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::{Duration, Instant};

type BoxedExporter = Box<dyn Exporter<Error = ExportError>>;

pub struct DragonApp {
    config: AppConfig,
}

impl DragonApp {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let request = &self.config.request;

        if request.is_expensive() {
            warn!(
                "Depth {} is above {} and will produce {} segments",
                request.depth,
                PRACTICAL_DEPTH_LIMIT,
                request
                    .segment_count()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "too many".to_string())
            );
        }

        let started = Instant::now();
        let segments = generate(request.depth, request.start, request.end);

        info!(
            "Generated {} segments at depth {} in {:?}",
            segments.len(),
            request.depth,
            started.elapsed()
        );

        if let Some(bounds) = Bounds::of(&segments) {
            debug!(
                "Curve spans ({}, {}) to ({}, {}), {}x{}",
                bounds.min.x,
                bounds.min.y,
                bounds.max.x,
                bounds.max.y,
                bounds.width(),
                bounds.height()
            );
        }

        let mut exporter = self.create_exporter()?;

        // Progress bar
        let progress = ProgressBar::with_draw_target(
            Some(segments.len() as u64),
            ProgressDrawTarget::stderr(),
        );
        progress.enable_steady_tick(Duration::from_millis(200));
        progress.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len} {per_sec:>12}",
                )?
                .progress_chars("#>-"),
        );

        export_with_progress(
            exporter.as_mut(),
            request,
            &segments,
            PROGRESS_INTERVAL,
            |written| progress.set_position(written as u64),
        )?;

        progress.finish_and_clear();

        info!("Export completed");
        Ok(())
    }

    fn create_exporter(&self) -> Result<BoxedExporter, Box<dyn std::error::Error>> {
        let export = &self.config.export;

        let writer: Box<dyn Write> = match &export.output_path {
            Some(path) => {
                info!("Writing {:?} to {}", export.format, path.display());
                Box::new(BufWriter::new(File::create(path)?))
            }
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };

        let exporter: BoxedExporter = match export.format {
            Format::Json => Box::new(JsonExporter::new(writer).pretty(export.pretty)),
            Format::Text => Box::new(TextExporter::new(writer)),
        };

        Ok(exporter)
    }
}
