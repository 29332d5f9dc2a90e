use anyhow::{Result, bail};
use docqa_client::{
    api::HttpDocumentApi,
    config,
    handlers::{self, UploadOutcome},
    page::TerminalPage,
};
use tracing::info;

const USAGE: &str = "Usage:\n  docqa upload <path>\n  docqa ask <question...>";

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

enum Command {
    Upload(String),
    Ask(String),
}

fn parse_args(args: &[String]) -> Result<Command> {
    match args {
        [cmd, path] if cmd == "upload" => Ok(Command::Upload(path.clone())),
        [cmd, words @ ..] if cmd == "ask" => Ok(Command::Ask(words.join(" "))),
        _ => bail!("{}", USAGE),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))?,
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    info!("Using document service at {}", config.server.base_url);

    let api = HttpDocumentApi::new(config.server)?;

    match command {
        Command::Upload(path) => {
            let page = TerminalPage::new().with_file(path);
            if let UploadOutcome::Displayed(message) = handlers::upload_pdf(&page, &api).await {
                info!("Upload finished: {}", message);
            }
        }
        Command::Ask(question) => {
            let page = TerminalPage::new().with_question(question);
            let state = handlers::ask_question(&page, &api).await;
            info!("Ask finished in state {:?}", state);
        }
    }

    Ok(())
}
