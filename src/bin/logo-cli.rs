use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use custom_logos::logos::{LogoTheme, LogoType, ParseError};

#[derive(Parser)]
#[command(name = "logo-cli")]
#[command(about = "Fetch custom logos from a running custom-logos server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:9000")]
    url: String,

    /// Path the logo handler is mounted at.
    #[arg(long, default_value = "/custom-logo")]
    path: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download one logo
    Fetch {
        /// masthead or favicon; empty keeps masthead
        #[arg(long = "type", default_value = "")]
        logo_type: String,

        #[arg(long, value_parser = parse_theme)]
        theme: LogoTheme,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Request every type and theme combination and report what is served
    Check,
}

fn parse_theme(raw: &str) -> Result<LogoTheme, ParseError> {
    raw.parse()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let endpoint = format!("{}{}", cli.url.trim_end_matches('/'), cli.path);

    match cli.command {
        Commands::Fetch {
            logo_type: raw_type,
            theme,
            output,
        } => {
            let mut logo_type = LogoType::default();
            logo_type.set(&raw_type)?;

            let res = fetch(&client, &endpoint, logo_type, theme).await?;
            let status = res.status();
            if !status.is_success() {
                report_error(res).await;
                std::process::exit(1);
            }

            let bytes = res.bytes().await?;
            if bytes.is_empty() {
                eprintln!("No {} logo configured for {}", logo_type, theme);
                std::process::exit(1);
            }
            match output {
                Some(path) => {
                    std::fs::write(&path, &bytes)?;
                    println!("Wrote {} bytes to {}", bytes.len(), path.display());
                }
                None => std::io::stdout().write_all(&bytes)?,
            }
        }
        Commands::Check => {
            for logo_type in LogoType::ALL {
                for theme in LogoTheme::ALL {
                    let res = fetch(&client, &endpoint, logo_type, theme).await?;
                    let status = res.status();
                    let content_type = res
                        .headers()
                        .get(reqwest::header::CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("-")
                        .to_string();
                    let size = res.bytes().await?.len();
                    println!(
                        "{:<10} {:<12} {:<5} {:>8} bytes  {}",
                        logo_type,
                        theme,
                        status.as_u16(),
                        size,
                        content_type
                    );
                }
            }
        }
    }

    Ok(())
}

async fn fetch(
    client: &reqwest::Client,
    endpoint: &str,
    logo_type: LogoType,
    theme: LogoTheme,
) -> Result<reqwest::Response, reqwest::Error> {
    client
        .get(endpoint)
        .query(&[("type", logo_type.as_str()), ("theme", theme.as_str())])
        .send()
        .await
}

async fn report_error(res: reqwest::Response) {
    eprintln!("Error: server returned status {}", res.status());
    match res.json::<Value>().await {
        Ok(body) => {
            if let Some(err) = body.get("err").and_then(Value::as_str) {
                eprintln!("{}", err);
            }
        }
        Err(e) => eprintln!("(no JSON error body: {})", e),
    }
}
