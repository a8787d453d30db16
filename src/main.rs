use clap::Parser;
use mandel_explorer::input::cli_args::ExplorerArgs;
use mandel_explorer::{CliExploreController, ExplorerCommand, PpmFilePresenter, parse_script};
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Replays an exploration headlessly and writes the final frame as a PPM image.
///
/// Example:
///   mandel_explorer --commands "zoom-in@500,300; continuous-start; tick; tick"
#[derive(Parser, Debug)]
#[command(name = "mandel_explorer", version, about)]
struct Cli {
    #[command(flatten)]
    explorer: ExplorerArgs,

    /// Command script, e.g. "pan-left; zoom-in@500,300; reset"
    #[arg(long, conflicts_with = "script")]
    commands: Option<String>,

    /// File containing a command script
    #[arg(long)]
    script: Option<PathBuf>,

    /// Where to write the final frame
    #[arg(long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,
}

impl Cli {
    fn commands(&self) -> Result<Vec<ExplorerCommand>, Box<dyn Error>> {
        let script = match (&self.commands, &self.script) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)?,
            (None, None) => String::new(),
        };

        Ok(parse_script(&script)?)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mandel_explorer=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.explorer.to_config()?;
    let commands = cli.commands()?;

    let mut controller = CliExploreController::new(PpmFilePresenter::new());
    controller.explore(config, commands)?;
    controller.write(&cli.output)?;

    Ok(())
}
