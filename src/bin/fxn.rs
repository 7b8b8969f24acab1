//! fxn: Function Network CLI client
//!
//! Command-line access to the inference gateway.

use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use functionsdk::config::Config;
use functionsdk::{ChatCompleteMessage, Client, ImageQuality};
use futures_util::StreamExt;

/// Function Network CLI client
#[derive(Parser)]
#[command(name = "fxn")]
#[command(version = functionsdk::PKG_VERSION)]
#[command(about = "Function Network inference gateway client")]
struct Args {
    /// API key (overrides the config file)
    #[arg(long, env = "FXN_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Gateway base URL (overrides the config file)
    #[arg(long, env = "FXN_BASE_URL")]
    base_url: Option<String>,

    /// Config file (default: ~/.function-network/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Chat with a model
    Chat {
        /// User message (or omit to read from stdin)
        message: Option<String>,
        /// Model to use
        #[arg(short, long)]
        model: String,
        /// System prompt sent before the user message
        #[arg(long)]
        system: Option<String>,
        /// Print tokens as they are generated
        #[arg(long)]
        stream: bool,
    },

    /// Generate embeddings for text
    Embed {
        /// Text to embed (or omit to read from stdin)
        text: Option<String>,
        /// Model to use
        #[arg(short, long)]
        model: String,
    },

    /// Generate images from a prompt
    Image {
        /// Prompt (or omit to read from stdin)
        prompt: Option<String>,
        /// Model to use
        #[arg(short, long)]
        model: String,
        /// Number of images
        #[arg(short, long, default_value_t = 1)]
        count: u32,
        /// Image quality
        #[arg(short, long, value_enum, default_value_t = Quality::Standard)]
        quality: Quality,
        /// Image size, e.g. 1024x1024
        #[arg(short, long, default_value = "1024x1024")]
        size: String,
    },

    /// Transcribe audio from a URL
    Transcribe {
        /// URL of the audio file
        url: String,
        /// Model to use
        #[arg(short, long)]
        model: String,
    },

    /// Show build information
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum Quality {
    Standard,
    Hd,
}

impl From<Quality> for ImageQuality {
    fn from(quality: Quality) -> Self {
        match quality {
            Quality::Standard => ImageQuality::Standard,
            Quality::Hd => ImageQuality::Hd,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    // Commands that don't require a client
    if let Command::Version = args.command {
        println!("fxn {}", functionsdk::version::version_string());
        println!("user-agent: {}", functionsdk::version::user_agent());
        return Ok(());
    }

    let options =
        Config::load(args.config.as_deref())?.client_options(args.api_key, args.base_url);
    let client = Client::new(options)?;

    match args.command {
        Command::Chat {
            message,
            model,
            system,
            stream,
        } => {
            let message = resolve_text(message, "chat")?;
            let mut messages = Vec::with_capacity(2);
            if let Some(system) = system {
                messages.push(ChatCompleteMessage::system(system));
            }
            messages.push(ChatCompleteMessage::user(message));

            if stream {
                let response = client.chat_complete_stream(&model, &messages).await?;
                let mut tokens = response.token_stream;
                let mut stdout = io::stdout().lock();
                while let Some(token) = tokens.next().await {
                    write!(stdout, "{}", token?)?;
                    stdout.flush()?;
                }
                writeln!(stdout)?;
            } else {
                let response = client.chat_complete(&model, &messages).await?;
                if let Some(reply) = response.response {
                    println!("{}", reply.content);
                }
                if let Some(usage) = response.usage {
                    eprintln!(
                        "tokens: {} prompt, {} completion, {} total",
                        usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
                    );
                }
            }
        }

        Command::Embed { text, model } => {
            let text = resolve_text(text, "embed")?;
            let response = client.embed(&model, &text).await?;
            println!("model: {}", response.model);
            println!("dimensions: {}", response.embedding.len());
            println!(
                "values: [{:.4}, {:.4}, ... ({} total)]",
                response.embedding.first().unwrap_or(&0.0),
                response.embedding.get(1).unwrap_or(&0.0),
                response.embedding.len()
            );
        }

        Command::Image {
            prompt,
            model,
            count,
            quality,
            size,
        } => {
            let prompt = resolve_text(prompt, "image")?;
            let images = client
                .text_to_image(&model, &prompt, count, quality.into(), &size)
                .await?;
            for image in images {
                println!("{}", image.url);
            }
        }

        Command::Transcribe { url, model } => {
            let response = client.transcribe(&model, &url).await?;
            println!("{}", response.text);
        }

        Command::Version => unreachable!("handled above"),
    }

    Ok(())
}

/// Input text for `command`: the argument, piped stdin, or both joined by a
/// blank line (argument first).
fn resolve_text(arg: Option<String>, command: &str) -> Result<String, Box<dyn std::error::Error>> {
    let parts: Vec<String> = arg.into_iter().chain(read_piped_stdin()?).collect();
    if parts.is_empty() {
        let message = format!("fxn {command}: nothing to send; pass text or pipe it in");
        return Err(message.into());
    }
    Ok(parts.join("\n\n"))
}

/// Trimmed stdin when it is piped and not blank.
fn read_piped_stdin() -> io::Result<Option<String>> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buf = String::new();
    stdin.read_to_string(&mut buf)?;
    let text = buf.trim();
    Ok((!text.is_empty()).then(|| text.to_string()))
}
