use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use goar_config::Config;
use goar_core::language::LanguageResolver;
use goar_corpus::{FirestoreClient, load_records, upload_corpus};
use goar_lang_banjara::BanjaraResolver;
use tracing_subscriber::EnvFilter;

mod clipboard;

#[derive(Parser)]
#[command(name = "goar", version, about = "English to Banjara phrase translator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate text given as arguments
    Translate {
        text: Vec<String>,
        /// Copy the result to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Interactive prompt, one translation per line
    Repl,
    /// One-shot upload of the sentence corpus to the document store
    Upload {
        /// JSON file with sentence records
        #[arg(long)]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::new();
    let cli = Cli::parse();

    match cli.command {
        Command::Translate { text, copy } => translate(&config, &text.join(" "), copy).await,
        Command::Repl => repl(&config).await,
        Command::Upload { input } => upload(&config, &input).await,
    }
}

async fn translate(config: &Config, text: &str, copy: bool) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("Nothing to translate");
    }

    let resolver = BanjaraResolver::with_additional_dicts(&config.dictionary.additional_paths);

    // UX pacing only; the resolver itself is synchronous
    tokio::time::sleep(Duration::from_millis(config.pacing_ms)).await;

    let output = resolver.resolve(text).render();
    println!("{}", output);

    if copy {
        clipboard::copy(&output)?;
        eprintln!("Copied!");
    }

    Ok(())
}

async fn repl(config: &Config) -> Result<()> {
    let resolver = BanjaraResolver::with_additional_dicts(&config.dictionary.additional_paths);
    let pacing = Duration::from_millis(config.pacing_ms);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "en> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        tokio::time::sleep(pacing).await;
        println!("{}\n", resolver.translate(line));
    }

    Ok(())
}

async fn upload(config: &Config, input: &PathBuf) -> Result<()> {
    let records = load_records(input)
        .with_context(|| format!("Failed to load sentences from {}", input.display()))?;

    let client = FirestoreClient::new(&config.corpus.project_id);
    let summary = upload_corpus(&client, &config.corpus, &records)
        .await
        .context("Corpus upload failed")?;

    tracing::info!(
        "Upload complete: {} sentences in {} batches",
        summary.sentences,
        summary.batches
    );

    Ok(())
}
