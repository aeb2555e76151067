mod anki;
mod config;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use cardsmith_core::{build_payloads, detect_format, parse, Card};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::anki::{AddNotesRequest, AddNotesResponse};
use crate::config::{split_fields, Config};

#[derive(Parser)]
#[command(name = "cardsmith")]
#[command(about = "Turn model replies into importable flashcards", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a saved model reply and print the cards as JSON
    Parse {
        /// Reply file, or `-` for stdin
        input: PathBuf,
    },
    /// Build a note-creation request for every card that maps cleanly
    Notes {
        /// Reply file, or `-` for stdin
        input: PathBuf,

        /// Comma-separated field names of the note type
        #[arg(short, long)]
        fields: Option<String>,

        /// Target deck
        #[arg(short, long)]
        deck: Option<String>,

        /// Note type name
        #[arg(short, long)]
        model: Option<String>,

        /// Allow notes that duplicate existing ones
        #[arg(long)]
        allow_duplicates: bool,
    },
    /// Count successes in a note-creation response
    Tally {
        /// Response file, or `-` for stdin
        input: PathBuf,
    },
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        return Ok(buffer);
    }

    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn parse_cards(path: &Path) -> anyhow::Result<Vec<Card>> {
    let text = read_input(path)?;
    tracing::debug!(format = detect_format(&text).as_str(), "detected reply format");

    let cards = parse(&text);
    if cards.is_empty() {
        tracing::info!("no cards found in {}", path.display());
    } else {
        tracing::info!("parsed {} card(s)", cards.len());
    }
    Ok(cards)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Parse { input } => {
            let cards = parse_cards(&input)?;
            println!("{}", serde_json::to_string_pretty(&cards)?);
        }
        Commands::Notes {
            input,
            fields,
            deck,
            model,
            allow_duplicates,
        } => {
            let cards = parse_cards(&input)?;
            let fields = fields.as_deref().map(split_fields).unwrap_or(config.fields);
            let deck = deck.unwrap_or(config.deck);
            let model = model.unwrap_or(config.model);

            let mut payloads = Vec::with_capacity(cards.len());
            for result in build_payloads(&cards, &fields) {
                match result.payload {
                    Ok(payload) => payloads.push(payload),
                    Err(e) => tracing::warn!("skipping card {}: {}", result.index + 1, e),
                }
            }

            let request = AddNotesRequest::new(
                &deck,
                &model,
                allow_duplicates || config.allow_duplicates,
                payloads,
            );
            tracing::info!(
                "built {} of {} note(s) for deck '{}'",
                request.note_count(),
                cards.len(),
                deck
            );
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Commands::Tally { input } => {
            let text = read_input(&input)?;
            let response: AddNotesResponse =
                serde_json::from_str(&text).context("response is not valid JSON")?;
            let outcome = response
                .outcome()
                .map_err(|e| anyhow::anyhow!("note creation failed: {e}"))?;
            if !outcome.all_succeeded() {
                tracing::warn!("{} note(s) were rejected", outcome.failed());
            }
            println!("{outcome}");
        }
    }

    Ok(())
}
