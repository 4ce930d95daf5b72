use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use paper_workflow::prelude::*;
use tracing_subscriber::EnvFilter;

const ENV_API_KEY: &str = "PAPER_WORKFLOW_API_KEY";

#[derive(Parser)]
#[command(name = "paper-cli")]
#[command(about = "Draft paper outlines and full text with a generative workflow", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a YAML client configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the workflow service base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// API key sent as a bearer token (defaults to PAPER_WORKFLOW_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Language of user-facing messages (zh-cn, en)
    #[arg(long, global = true, default_value = "zh-cn")]
    locale: Locale,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a paper outline
    Outline {
        /// Paper title or topic
        #[arg(short, long)]
        title: String,

        /// Major or discipline
        #[arg(long)]
        major: Option<String>,

        /// Research direction
        #[arg(long)]
        direction: Option<String>,

        /// Target length of the paper
        #[arg(long, default_value = "3000", value_parser = word_count_parser())]
        word_count: u32,

        /// Extra requirements for the paper
        #[arg(long)]
        description: Option<String>,
    },

    /// Suggest alternative titles
    Titles {
        /// Title or topic to start from
        #[arg(short, long)]
        seed: String,

        #[arg(short, long)]
        json: bool,
    },

    /// Generate the full text from an outline
    Content {
        /// Read the outline from a file
        #[arg(long, value_name = "FILE", conflicts_with = "outline", required_unless_present = "outline")]
        outline_file: Option<PathBuf>,

        /// Outline text
        #[arg(long)]
        outline: Option<String>,

        /// Target length of the paper
        #[arg(long, value_parser = word_count_parser())]
        word_count: Option<u32>,
    },

    /// Check that an API key is accepted
    ValidateKey,
}

fn word_count_parser() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(i64::from(MIN_WORD_COUNT)..=i64::from(MAX_WORD_COUNT))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "paper_workflow=debug"
    } else {
        "paper_workflow=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

fn localized(locale: Locale, zh_cn: &'static str, en: &'static str) -> &'static str {
    match locale {
        Locale::ZhCn => zh_cn,
        Locale::En => en,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let locale = cli.locale;
    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            let err: &(dyn std::error::Error + 'static) = e.as_ref();
            eprintln!("Error: {}", format_error_with(err, locale));
            ExitCode::from(2)
        }
    }
}

fn load_config(path: Option<&PathBuf>, base_url: Option<String>) -> anyhow::Result<ClientConfig> {
    let config = match path {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };
    let config = config.with_env_overrides()?;
    Ok(match base_url {
        Some(url) => config.with_base_url(url),
        None => config,
    })
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = load_config(cli.config.as_ref(), cli.base_url)?;
    let client = WorkflowClient::new(config)?;
    let api_key = cli.api_key.or_else(|| std::env::var(ENV_API_KEY).ok());
    let credential = api_key.as_deref();
    let locale = cli.locale;

    match cli.command {
        Commands::Outline {
            title,
            major,
            direction,
            word_count,
            description,
        } => {
            let params = OutlineParams {
                title,
                major,
                direction,
                word_count: Some(word_count),
                description,
            };
            let outline = generate_outline(&client, &params, credential).await?;
            println!("{}", outline);
            Ok(true)
        }
        Commands::Titles { seed, json } => {
            let suggestions = fetch_title_suggestions(&client, &seed, credential).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else if suggestions.is_empty() {
                eprintln!(
                    "{}",
                    localized(
                        locale,
                        "未获取到更多标题建议，可尝试修改输入",
                        "No title suggestions returned; try a different input"
                    )
                );
            } else {
                for (i, title) in suggestions.iter().enumerate() {
                    println!("{}. {}", i + 1, title);
                }
            }
            Ok(true)
        }
        Commands::Content {
            outline_file,
            outline,
            word_count,
        } => {
            let outline = match (outline_file, outline) {
                (Some(path), _) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read outline file {}", path.display()))?,
                (None, Some(text)) => text,
                (None, None) => String::new(),
            };
            let params = ContentParams {
                outline,
                word_count,
            };
            let content = generate_content(&client, &params, credential).await?;
            println!("{}", content);
            Ok(true)
        }
        Commands::ValidateKey => {
            let Some(key) = credential.filter(|key| !key.is_empty()) else {
                eprintln!(
                    "{}",
                    localized(locale, "请输入要校验的 API Key", "Enter an API key to validate")
                );
                return Ok(false);
            };

            if validate_key(&client, key).await? {
                println!("{}", localized(locale, "API Key 校验通过", "API key is valid"));
                Ok(true)
            } else {
                eprintln!(
                    "{}",
                    localized(locale, "API Key 无效，请检查后重试", "API key is invalid")
                );
                Ok(false)
            }
        }
    }
}
