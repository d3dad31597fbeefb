use clap::Parser;
use std::{path::PathBuf, process::ExitCode};
use vaultkit::{OutputFormat, PinProbe, load_settings, render_report, telemetry};

#[derive(Parser, Debug)]
#[command(
    name = "ssl_pins",
    version,
    about = "Print SHA-256 SPKI pins for every certificate a host serves"
)]
struct Cli {
    #[arg(long, help = "TOML file providing [pins] defaults")]
    config: Option<PathBuf>,
    #[arg(long, help = "TLS port (default 443)")]
    port: Option<u16>,
    #[arg(long, help = "openssl program to run (default: openssl from PATH)")]
    openssl: Option<PathBuf>,
    #[arg(long, value_enum, help = "Output format (default xml)")]
    format: Option<OutputFormat>,
    #[arg(long, help = "Expiration date written on a rendered <pin-set>")]
    expiration: Option<String>,
    #[arg(help = "Host to fetch the certificate chain from")]
    host: Option<String>,
}

fn main() -> ExitCode {
    telemetry::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("Error: {err}");
            println!("Ensure 'openssl' is installed and available in PATH.");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let settings = load_settings(cli.config.as_deref())?.pins;
    let host = cli.host.unwrap_or(settings.host);
    let format = cli.format.unwrap_or(settings.format);
    let expiration = cli.expiration.or(settings.expiration);

    if format == OutputFormat::Xml {
        println!("Generating SSL Pins for {host} using OpenSSL...");
    }

    let report = PinProbe::builder(host)
        .set_port(cli.port.unwrap_or(settings.port))
        .set_openssl(cli.openssl.unwrap_or(settings.openssl))
        .run()?;

    Ok(render_report(&report, format, expiration.as_deref())?)
}
