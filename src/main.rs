mod app;
mod cli;

use log::error;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io;
use std::process;
use structopt::StructOpt;
use structopt_flags::LogLevel;

use app::DragonApp;
use cli::Opt;

fn main() {
    let opt: Opt = Opt::from_args();

    if let Some(shell) = opt.completions {
        Opt::clap().gen_completions_to("dragon-curve", shell, &mut io::stdout());
        return;
    }

    // Logs go to stderr so exported segments on stdout stay clean
    TermLogger::init(
        opt.verbose.get_level_filter(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|e| eprintln!("Failed to initialise logger: {}", e));

    let config = match opt.to_app_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(2);
        }
    };

    if let Err(e) = DragonApp::new(config).run() {
        error!("{}", e);
        process::exit(1);
    }
}
