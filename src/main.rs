// ABOUTME: Main entry point for the reveal-deck program.
// ABOUTME: Provides the CLI interface and drives the compiler from the library.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use reveal_deck::{Config, InputSource, Mode, WatchConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Slide document, or a directory of slide documents
    input: PathBuf,

    /// Keep running and regenerate decks whose source changed
    #[arg(long)]
    watch: bool,

    /// Directory for generated HTML (defaults to the current directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn execute(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::from_env().with_output_dir(cli.output_dir.clone());
    config.validate()?;

    let source = InputSource::resolve(&cli.input)?;
    let mode = if cli.watch { Mode::Watch } else { Mode::SinglePass };
    let watch_config = WatchConfig::new(&source, mode, &config)
        .with_context(|| format!("Failed to collect inputs from {:?}", cli.input))?;

    let report = reveal_deck::run(&watch_config);
    for output in &report.generated {
        println!("HTML generated successfully: {:?}", output);
    }
    for input in &report.failed {
        eprintln!("Failed to compile {:?}", input);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match execute(&cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
