use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use next_launch::{
    config::Args,
    format::countdown,
    LaunchFetcher, SpaceXApi,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match args.get_config() {
        Ok(config) => config,
        Err(err) => {
            error!("config: {}", err);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "using {} with {} attempts",
        config.api.base_url, config.retry.attempts
    );

    let api = match SpaceXApi::new(&config.api.base_url) {
        Ok(api) => api,
        Err(err) => {
            error!("http client: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let next = match LaunchFetcher::new(api, config.retry)
        .fetch_next_launch()
        .await
    {
        Ok(next) => next,
        Err(err) => {
            error!("no launch data: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let record = next.format();
    if args.json {
        match serde_json::to_string_pretty(&record) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                error!("json: {}", err);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", record);
        if let Some(date) = next.launch.date_utc {
            println!("T-minus:  {}", countdown(date, Utc::now()));
        }
    }

    ExitCode::SUCCESS
}
