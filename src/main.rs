//! `api-call`: send one HTTP request and print the response envelope.
//!
//! Exits with an error when the envelope's verdict is not ok.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use reqwest::header::{HeaderName, HeaderValue};

use api_call::config::{load_config, ClientConfig};
use api_call::observability::logging::init_logging;
use api_call::ApiCall;

#[derive(Parser)]
#[command(name = "api-call")]
#[command(about = "Send an HTTP request and print the response envelope", long_about = None)]
struct Cli {
    /// TOML file with client settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base url prepended to --url
    #[arg(short, long)]
    base_url: Option<String>,

    /// Url where to make the request
    #[arg(short, long, default_value = "")]
    url: String,

    /// HTTP method
    #[arg(short, long, default_value = "GET")]
    method: String,

    /// Deadline in milliseconds, 0 disables it
    #[arg(short, long)]
    timeout_ms: Option<u64>,

    /// Extra header as `name:value`, repeatable
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    headers: Vec<(HeaderName, HeaderValue)>,

    /// Basic authentication username
    #[arg(long, requires = "password")]
    user: Option<String>,

    /// Basic authentication password
    #[arg(long)]
    password: Option<String>,

    /// Request body sent as-is
    #[arg(short, long)]
    data: Option<String>,
}

fn parse_header(raw: &str) -> Result<(HeaderName, HeaderValue), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected name:value, got {raw:?}"))?;
    let name = HeaderName::from_bytes(name.trim().as_bytes()).map_err(|e| e.to_string())?;
    let value = HeaderValue::from_str(value.trim()).map_err(|e| e.to_string())?;
    Ok((name, value))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };
    init_logging(&config.logging)?;

    let mut call = ApiCall::from_config(&config)?;
    if let Some(base_url) = cli.base_url {
        call = call.with_base_url(base_url);
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        call = call.with_timeout(Duration::from_millis(timeout_ms));
    }
    for (name, value) in cli.headers {
        call = call.with_header(name, value);
    }
    if let (Some(user), Some(password)) = (cli.user, cli.password) {
        call = call.with_basic_auth(user, password);
    }

    tracing::debug!(?call, "Client configured");

    let envelope = call
        .send(&cli.method, &cli.url, cli.data.map(String::into_bytes))
        .await?;
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    if !envelope.is_ok() {
        return Err(format!("Got errors {}", envelope.errors_string()).into());
    }
    Ok(())
}
