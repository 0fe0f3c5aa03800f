//! Main application entry point.

use clap::Parser;
use layerink_app::{App, AppConfig, AppError, Output};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "layerink")]
#[command(version, about, long_about = None)]
struct Args {
    /// Session script to replay
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Application configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// Print the export scene instead of the document
    #[arg(long)]
    export: bool,
}

fn run(args: &Args) -> Result<String, AppError> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if args.compact {
        config.pretty = false;
    }

    let app = App::new(config);
    let report = app.run_script_file(&args.script)?;
    for notice in &report.notices {
        eprintln!("{notice}");
    }
    let output = if args.export { Output::Export } else { Output::Report };
    app.render(&report, output)
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting LayerInk");

    let args = Args::parse();
    match run(&args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
