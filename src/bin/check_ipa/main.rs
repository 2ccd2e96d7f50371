
use std::path::PathBuf;

use clap::Parser;
use console::style;
use itertools::Itertools;
use wikidict_ipa::{segment_and_validate, tokenizer, engine, validator, PhonemeInventory};

/// Shows what the engine makes of each transcription.
#[derive(Parser, Debug)]
#[command()]
struct Args {
  #[arg(required = true)]
  transcriptions: Vec<String>,

  #[arg(long)]
  inventory: Option<PathBuf>,
}

fn main() -> wikidict_ipa::Result<()> {
  wikidict_ipa::init_logging();
  let args = Args::parse();

  let inventory = match &args.inventory {
    Some(path) => PhonemeInventory::load(path)?,
    None => PhonemeInventory::british_english()
  };

  for raw in &args.transcriptions {
    let tokens = tokenizer::tokenize(&inventory, &engine::clean_transcription(raw));
    let s = segment_and_validate(&inventory, raw);

    let rendered = s.units().map(|u| {
      if s.unknown.iter().any(|x| *x == inventory.strip_markers(u)) {
        style(u).red().bold().to_string()
      }
      else {
        u.to_string()
      }
    }).join(" ");

    let verdict = if s.is_error() { style("rejected").red() } else { style("ok").green() };
    println!("{} {}", style(raw).bold(), verdict);
    println!("  tokens:     {}", tokens.joined());
    println!("  normalized: {}", rendered);
    let members = if validator::is_valid(&inventory, &s.normalized) {
      style("all phonemes").green()
    }
    else {
      style("unknown units").red()
    };
    println!("  inventory:  {}", members);
    for f in &s.faults {
      println!("  {} at {}: {:?} + {:?}", style("fault").yellow(), f.position, f.pending, f.current);
    }
  }

  Ok(())
}
