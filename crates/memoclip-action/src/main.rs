//! memoclip: save selected text as a memo, tagged from your existing vocabulary.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use memoclip_action::{failure_message, run_action, ConsoleHost, MemoPipeline};
use memoclip_core::{SubmissionConfig, SubmitAction};

/// Content submitted by `memoclip test`.
const SAMPLE_CONTENT: &str = "学习 TypeScript 的高级特性，包括泛型、装饰器和模块系统";

#[derive(Parser)]
#[command(name = "memoclip")]
#[command(author, version, about = "Save text to Memos with generated tags")]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (default: ~/.config/memoclip/config.toml, else MEMOCLIP_* env vars)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Skip tag generation for this invocation
    #[arg(long, global = true)]
    no_tags: bool,

    /// Maximum number of tags (1-5)
    #[arg(long, global = true)]
    max_tags: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save text as a memo
    Submit {
        /// Text to save (read from stdin when omitted)
        text: Option<String>,
    },

    /// Save a sample memo and show the tags it received
    Test,

    /// Print the resolved configuration with secrets redacted
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install the log subscriber on stderr.
///
/// `LOG_FORMAT` selects "json" or "text" (default); `RUST_LOG` overrides the
/// default filter.
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "memoclip=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);

    if log_format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::Submit { text } => {
            let input = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            if input.trim().is_empty() {
                bail!("nothing to save: input is empty");
            }

            let outcome = run_action(&ConsoleHost, &MemoPipeline::new(), &input, &config).await;
            Ok(if outcome.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Test => cmd_test(&config).await,
        Commands::Config => {
            print_config(&config);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load configuration and apply command-line overrides.
fn resolve_config(cli: &Cli) -> anyhow::Result<SubmissionConfig> {
    let mut config = match &cli.config {
        Some(path) => SubmissionConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SubmissionConfig::load().context("loading config")?,
    };

    if cli.no_tags {
        config.enable_tags = false;
    }
    if let Some(max_tags) = &cli.max_tags {
        config.max_tags = max_tags.clone();
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn read_stdin() -> anyhow::Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading text from stdin")?;
    Ok(input)
}

async fn cmd_test(config: &SubmissionConfig) -> anyhow::Result<ExitCode> {
    println!("Submitting sample memo: {}", SAMPLE_CONTENT);

    match MemoPipeline::new().submit(SAMPLE_CONTENT, config).await {
        Ok(outcome) => {
            println!(
                "✅ Test memo created with {} tags: {}",
                outcome.tag_count(),
                outcome.tags.join(", ")
            );
            if let Some(name) = &outcome.memo.name {
                println!("Memo: {}", name);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{}", failure_message(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_config(config: &SubmissionConfig) {
    let openai_key = config
        .openai_api_key
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "(not set)".to_string());

    println!("api_url:         {}", config.api_base_url());
    println!("api_token:       {}", config.api_token);
    println!("enable_tags:     {}", config.enable_tags);
    println!("tagging active:  {}", config.tagging_enabled());
    println!("openai_base_url: {}", config.completion_base_url());
    println!("openai_api_key:  {}", openai_key);
    println!("openai_model:    {}", config.openai_model);
    println!("max_tags:        {}", config.max_tags());
    match config.timeout_secs {
        Some(secs) => println!("timeout_secs:    {}", secs),
        None => println!("timeout_secs:    (transport default)"),
    }
}
