use clap::Parser;
use mandel_explorer::input::cli_args::ExplorerArgs;
use mandel_explorer::{PixelsPresenterFactory, RunGuiCommand};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Opens an interactive Mandelbrot explorer window.
#[derive(Parser, Debug)]
#[command(name = "gui", version, about)]
struct Cli {
    #[command(flatten)]
    explorer: ExplorerArgs,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mandel_explorer=info,wgpu=warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = match cli.explorer.to_config() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid arguments");
            return ExitCode::FAILURE;
        }
    };

    let command = RunGuiCommand::new(PixelsPresenterFactory::new());

    match command.execute(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "explorer window failed");
            ExitCode::FAILURE
        }
    }
}
