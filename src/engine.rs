
use serde::Serialize;

use crate::inventory::PhonemeInventory;
use crate::stress;
use crate::tokenizer::{self, Fault};
use crate::validator;

/// Result of running one transcription through the engine.
///
/// `normalized` is filled in even when the transcription is rejected, so
/// callers can log what the engine made of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segmentation {
  pub normalized: String,
  pub faults: Vec<Fault>,
  pub unknown: Vec<String>,
}

impl Segmentation {
  pub fn is_error(&self) -> bool {
    !self.faults.is_empty() || !self.unknown.is_empty()
  }

  pub fn units(&self) -> impl Iterator<Item = &str> {
    self.normalized.split(' ').filter(|u| !u.is_empty())
  }
}

/// Undoes the transcription conventions the engine does not model:
/// enclosing slashes, the optional `(ɹ)` and `(ə)`, syllable dots and
/// blanks.
pub fn clean_transcription(raw: &str) -> String {
  raw.trim_matches('/')
    .replace("(ɹ)", "")
    .replace("(ə)", "")
    .chars()
    .filter(|c| *c != '.' && !c.is_whitespace())
    .collect()
}

pub fn segment_and_validate(inventory: &PhonemeInventory, raw: &str) -> Segmentation {
  let cleaned = clean_transcription(raw);
  let tokenization = tokenizer::tokenize(inventory, &cleaned);
  let normalized = stress::reposition(inventory, &tokenization.tokens).join(" ");
  let unknown = validator::unknown_units(inventory, &normalized);

  Segmentation {
    normalized,
    faults: tokenization.faults,
    unknown,
  }
}
