use dragon_curve::curve::{validate_depth, GenerationRequest};
use dragon_curve::export::Format;
use dragon_curve::geometry::Point;
use std::path::PathBuf;
use structopt::clap::Shell;
use structopt::StructOpt;
use structopt_flags::QuietVerbose;

#[derive(Debug)]
pub struct ExportConfig {
    pub format: Format,
    pub output_path: Option<PathBuf>,
    pub pretty: bool,
}

#[derive(Debug)]
pub struct AppConfig {
    pub request: GenerationRequest,
    pub export: ExportConfig,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Dragon Curve",
    about = "Generate the segments of a dragon curve fractal"
)]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        default_value = "10",
        allow_hyphen_values = true,
        help = "Number of folds"
    )]
    depth: i64,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        default_value = "400,400",
        allow_hyphen_values = true,
        help = "Baseline start point"
    )]
    start: Point,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        default_value = "600,400",
        allow_hyphen_values = true,
        help = "Baseline end point"
    )]
    end: Point,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        default_value = "json",
        help = "Output format (json, text)"
    )]
    format: Format,

    #[structopt(long, help = "Put every JSON segment on its own line")]
    pretty: bool,

    #[structopt(parse(from_os_str), help = "Output file, stdout if omitted")]
    output: Option<PathBuf>,

    #[structopt(long, possible_values= &Shell::variants(), case_insensitive = true, help = "Generate shell completions and exit")]
    pub completions: Option<Shell>,
}

impl Opt {
    pub fn to_app_config(self) -> Result<AppConfig, String> {
        let depth = validate_depth(self.depth).map_err(|e| e.to_string())?;

        Ok(AppConfig {
            request: GenerationRequest::new(depth, self.start, self.end),
            export: ExportConfig {
                format: self.format,
                output_path: self.output,
                pretty: self.pretty,
            },
        })
    }
}
