use clap::Parser;
use std::{path::PathBuf, process::ExitCode};
use vaultkit::{IconProbe, Rgb, load_settings, telemetry};

#[derive(Parser, Debug)]
#[command(
    name = "icon_color",
    version,
    about = "Print the background color of a launcher icon as a hex code"
)]
struct Cli {
    #[arg(long, help = "TOML file providing [icon] defaults")]
    config: Option<PathBuf>,
    #[arg(long, help = "Column of the sampled pixel (default 0)")]
    x: Option<u32>,
    #[arg(long, help = "Row of the sampled pixel (default 0)")]
    y: Option<u32>,
    #[arg(help = "Image to sample")]
    path: Option<PathBuf>,
}

fn main() -> ExitCode {
    telemetry::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(rgb) => {
            println!("Background Hex: {}", rgb.to_hex());
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<Rgb> {
    let settings = load_settings(cli.config.as_deref())?.icon;

    let rgb = IconProbe::builder(cli.path.unwrap_or(settings.path))
        .set_point(cli.x.unwrap_or(settings.x), cli.y.unwrap_or(settings.y))
        .sample()?;

    Ok(rgb)
}
