use anyhow::Result;
use clap::{
    Parser,
    Subcommand,
};

use crate::{
    anki::{
        self,
        AnkiClient,
    },
    config::{
        Config,
        CONFIG_FILE,
    },
    core::SearchFields,
    fetch::{
        self,
        FetchRequest,
    },
    persistence,
    providers::Provider,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "ankipix")]
#[command(about = "Fill empty Anki picture fields from Pexels, Unsplash, or SerpAPI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch one image per note with an empty picture field.
    Fetch {
        /// Deck to scan.
        #[arg(long)]
        deck: String,

        /// Comma-separated note fields tried as search queries, in order (max 3).
        #[arg(long)]
        fields: String,

        /// Image search provider.
        #[arg(long, value_enum, default_value = "pexels")]
        source: Provider,
    },

    /// List deck names known to Anki.
    Decks,

    /// List image providers and whether an API key is configured for each.
    Sources,

    /// List the note fields of a deck, sampled from one of its notes.
    Fields {
        /// Deck to sample.
        #[arg(long)]
        deck: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let config = Config::load_or_init()?;

        match cli.command {
            CliCommand::Fetch { deck, fields, source } => {
                let fields = SearchFields::parse(&fields)?;
                let request = FetchRequest { deck, fields, provider: source };
                let summary = fetch::run(&config, &request).await?;
                println!(
                    "{} candidate notes, {} updated, {} skipped",
                    summary.candidates, summary.updated, summary.skipped
                );
            }
            CliCommand::Decks => run_decks(&config).await?,
            CliCommand::Sources => run_sources(&config),
            CliCommand::Fields { deck } => run_fields(&config, &deck).await?,
        }

        Ok(())
    }
}

async fn run_decks(config: &Config) -> Result<()> {
    let client = AnkiClient::new(&config.anki_connect_url);
    for deck in client.deck_names_and_ids().await? {
        println!("{}", deck.name);
    }
    Ok(())
}

fn run_sources(config: &Config) {
    let available = Provider::available(config);
    for provider in Provider::ALL {
        let state = if available.contains(&provider) { "configured" } else { "missing key" };
        println!("{:<10} {} ({})", provider.name(), state, provider.key_name());
    }
    println!("config: {}", persistence::config_file_path(CONFIG_FILE).display());
}

async fn run_fields(config: &Config, deck: &str) -> Result<()> {
    let client = AnkiClient::new(&config.anki_connect_url);

    let note_ids = client.find_notes(&anki::deck_query(deck)).await?;
    let Some(&sample) = note_ids.first() else {
        println!("no notes found in deck '{}'", deck);
        return Ok(());
    };

    let notes = client.notes_info(&[sample]).await?;
    if let Some(note) = notes.first() {
        let mut fields: Vec<_> = note.fields.iter().collect();
        fields.sort_by_key(|(_, field)| field.order);
        for (name, _) in fields {
            println!("{}", name);
        }
        println!("(model: {})", note.model_name);
    }

    Ok(())
}
