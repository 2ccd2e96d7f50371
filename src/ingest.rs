
use std::io::{self, BufRead, Write};

use rayon::prelude::*;

use crate::entry::{self, DictionaryEntry};
use crate::error::Result;
use crate::inventory::PhonemeInventory;

/// Parses one JSON line. Lines that are not JSON, or that lack `word`,
/// `sounds` or `senses`, are dropped whole.
pub fn parse_entry(line: &str) -> Option<DictionaryEntry> {
  match serde_json::from_str(line) {
    Ok(entry) => Some(entry),
    Err(e) => {
      tracing::debug!(error = %e, "discarding malformed entry");
      None
    }
  }
}

#[derive(Debug, Default)]
pub struct IngestReport {
  pub entries: Vec<DictionaryEntry>,
  pub malformed: usize,
  pub misshapen: usize,
}

enum Outcome {
  Kept(DictionaryEntry),
  Malformed,
  Misshapen,
}

/// Parses and cleans every line. Lines are independent, so they are
/// processed in parallel; the surviving entries keep input order.
pub fn clean_entries<S: AsRef<str> + Sync>(inventory: &PhonemeInventory, lines: &[S]) -> IngestReport {
  let outcomes: Vec<Outcome> = lines.par_iter()
    .map(|line| AsRef::<str>::as_ref(line))
    .filter(|line| !line.trim().is_empty())
    .map(|line| {
      match parse_entry(line) {
        None => Outcome::Malformed,
        Some(e) => match entry::process_entry(inventory, e) {
          Some(e) => Outcome::Kept(e),
          None => Outcome::Misshapen,
        }
      }
    })
    .collect();

  let mut report = IngestReport::default();
  for outcome in outcomes {
    match outcome {
      Outcome::Kept(e) => report.entries.push(e),
      Outcome::Malformed => report.malformed += 1,
      Outcome::Misshapen => report.misshapen += 1,
    }
  }

  tracing::info!(
    kept = report.entries.len(),
    malformed = report.malformed,
    misshapen = report.misshapen,
    "cleaned dictionary entries"
  );

  report
}

pub fn read_and_clean<R: BufRead>(inventory: &PhonemeInventory, reader: R) -> Result<IngestReport> {
  let lines: Vec<String> = reader.lines().collect::<io::Result<_>>()?;
  Ok(clean_entries(inventory, &lines))
}

pub fn write_entries<W: Write>(writer: &mut W, entries: &[DictionaryEntry]) -> Result<()> {
  for e in entries {
    serde_json::to_writer(&mut *writer, e)?;
    writer.write_all(b"\n")?;
  }
  writer.flush()?;
  Ok(())
}
