use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payphone::application::payphone::PayphoneService;
use payphone::domain::machine::Machine;
use payphone::domain::ports::SessionJournalBox;
use payphone::domain::tariff::Tariff;
use payphone::infrastructure::in_memory::InMemoryJournal;
use payphone::interfaces::console::reader::CommandReader;
use payphone::interfaces::console::session::{SessionEnd, run_session};
use payphone::interfaces::console::writer::ReplyWriter;
use payphone::interfaces::csv::tariff_reader::TariffReader;
use payphone::interfaces::json::journal_writer::JournalWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tariff CSV file (`kind,pattern,cost`). Defaults to the built-in table.
    #[arg(long)]
    tariffs: Option<PathBuf>,

    /// Read commands from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Print a `user> ` prompt before reading each line.
    #[arg(long)]
    prompt: bool,

    /// Write the session journal as JSON to this file when the session ends.
    #[arg(long)]
    journal: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the protocol
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("payphone=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let tariff = match &cli.tariffs {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            let tariff = TariffReader::new(file).into_tariff().into_diagnostic()?;
            tracing::info!(path = %path.display(), rules = tariff.rules().len(), "loaded tariff table");
            for rule in tariff.rules() {
                tracing::debug!(prefix = rule.prefix(), cost = %rule.cost(), "tariff rule");
            }
            tariff
        }
        None => Tariff::default(),
    };

    let journal: SessionJournalBox = Box::new(InMemoryJournal::new());
    let mut service = PayphoneService::new(Machine::new(tariff), journal);

    let source: Box<dyn AsyncBufRead + Unpin> = match &cli.script {
        Some(path) => {
            let file = tokio::fs::File::open(path).await.into_diagnostic()?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };
    let mut reader = CommandReader::new(source);

    let stdout = io::stdout();
    let mut writer = ReplyWriter::new(stdout.lock(), cli.prompt);

    let end = run_session(&mut service, &mut reader, &mut writer)
        .await
        .into_diagnostic()?;
    if end == SessionEnd::EndOfInput {
        tracing::info!("input closed without ABORTAR");
    }

    if let Some(path) = cli.journal {
        let entries = service.entries().await.into_diagnostic()?;
        let file = File::create(&path).into_diagnostic()?;
        JournalWriter::new(file)
            .write_journal(&entries)
            .into_diagnostic()?;
    }

    Ok(())
}
