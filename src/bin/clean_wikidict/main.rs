
use std::{fs, io::{self, BufWriter, Write}, path::PathBuf};

use clap::Parser;
use wikidict_ipa::{ingest, wordlist, PhonemeInventory};

/// Reads extractor JSON lines on stdin and prints the allow-listed words
/// with their etymology and part of speech as one JSON object.
#[derive(Parser, Debug)]
#[command()]
struct Args {
  /// One allowed word per line
  #[arg()]
  wordlist: PathBuf,

  /// JSON phoneme inventory to use instead of the built-in one
  #[arg(long)]
  inventory: Option<PathBuf>,

  /// Also write every cleaned entry here, one JSON object per line
  #[arg(long)]
  entries: Option<PathBuf>,

  /// Add the accepted transcriptions to every summary
  #[arg(long)]
  with_ipa: bool,
}

fn main() -> wikidict_ipa::Result<()> {
  wikidict_ipa::init_logging();
  let args = Args::parse();

  let inventory = match &args.inventory {
    Some(path) => PhonemeInventory::load(path)?,
    None => PhonemeInventory::british_english()
  };

  let report = ingest::read_and_clean(&inventory, io::stdin().lock())?;

  if let Some(path) = &args.entries {
    let mut writer = BufWriter::new(fs::File::create(path)?);
    ingest::write_entries(&mut writer, &report.entries)?;
  }

  let allowed = wordlist::read_wordlist(&args.wordlist)?;
  let aggregate = wordlist::aggregate(&report.entries, &allowed, args.with_ipa);
  tracing::info!(allowed = allowed.len(), words = aggregate.len(), "aggregated entries");

  let mut out = BufWriter::new(io::stdout().lock());
  wordlist::write_aggregate(&mut out, &aggregate)?;
  writeln!(out)?;
  out.flush()?;

  Ok(())
}
