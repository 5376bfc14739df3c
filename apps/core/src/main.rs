// Navigator terminal shell
// Thin presentation layer: reads a turn, calls the engine, renders the reply.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

use navigator_core::brain::{ReplyEngine, StructuredReply, SAFE_FAILURE_DEMO_PROMPT, TOPIC_CARDS};
use navigator_core::config::{AppConfig, OutputMode};

#[derive(Parser, Debug)]
#[command(
    name = "navigator",
    version,
    about = "Evidence-bound guidance for parents after an autism diagnosis"
)]
struct Cli {
    #[arg(long, global = true, help = "Print each reply as one JSON line")]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a single question
    Ask {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Answer one question per stdin line until EOF
    Chat,
    /// List the guided topic cards
    Cards,
    /// Send the prompt of topic card N (1-based)
    Card { number: usize },
    /// Show the welcome message
    Welcome,
    /// Run the safe-failure demo prompt
    Demo,
}

fn render(out: &mut impl Write, reply: &StructuredReply, mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Json => {
            writeln!(out, "{}", serde_json::to_string(reply)?)?;
        }
        OutputMode::Text => {
            let scope = if reply.scope_limited { " (scope-limited)" } else { "" };
            writeln!(out, "Navigator [{}]{}", reply.badge, scope)?;
            writeln!(out, "{}", reply.text)?;
            writeln!(out, "Sources used:")?;
            for source in &reply.sources {
                writeln!(out, "  - {}", source)?;
            }
            writeln!(out, "Recommended next topics: {}", reply.suggestions.join(" | "))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn send(engine: &ReplyEngine, out: &mut impl Write, input: &str, mode: OutputMode) -> Result<()> {
    // Blank turns never reach the engine
    if input.trim().is_empty() {
        debug!("Skipping blank input");
        return Ok(());
    }
    let reply = engine.respond(input)?;
    render(out, &reply, mode)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("failed to load configuration")?;
    if cli.json {
        config.output = OutputMode::Json;
    }
    if let Err(e) = config.init_tracing() {
        eprintln!("warning: {}", e);
    }

    let engine = ReplyEngine::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Ask { text } => send(&engine, &mut out, &text.join(" "), config.output)?,
        Commands::Chat => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.context("failed to read stdin")?;
                send(&engine, &mut out, &line, config.output)?;
                out.flush()?;
            }
        }
        Commands::Cards => {
            for (i, card) in TOPIC_CARDS.iter().enumerate() {
                match config.output {
                    OutputMode::Json => writeln!(
                        out,
                        "{}",
                        serde_json::json!({
                            "number": i + 1,
                            "label": card.label,
                            "prompt": card.prompt,
                        })
                    )?,
                    OutputMode::Text => {
                        writeln!(out, "{}. {}", i + 1, card.label)?;
                        writeln!(out, "   {}", card.prompt)?;
                    }
                }
            }
        }
        Commands::Card { number } => {
            let Some(card) = number.checked_sub(1).and_then(|i| TOPIC_CARDS.get(i)) else {
                warn!(number, "Topic card out of range");
                bail!("no topic card {} (choose 1-{})", number, TOPIC_CARDS.len());
            };
            send(&engine, &mut out, card.prompt, config.output)?;
        }
        Commands::Welcome => render(&mut out, &StructuredReply::welcome(), config.output)?,
        Commands::Demo => send(&engine, &mut out, SAFE_FAILURE_DEMO_PROMPT, config.output)?,
    }

    Ok(())
}
