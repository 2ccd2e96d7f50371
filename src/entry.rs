
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Deserialize};
use serde_json::{Map, Value};

use crate::engine::segment_and_validate;
use crate::inventory::PhonemeInventory;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sound {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ipa: Option<String>,
  #[serde(default)]
  pub tags: Option<Value>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sense {
  #[serde(flatten)]
  pub fields: Map<String, Value>,
}

/// One line of extractor output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
  pub word: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pos: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub etymology_text: Option<String>,
  pub sounds: Vec<Sound>,
  pub senses: Vec<Sense>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

lazy_static! {
  static ref WORD_SHAPE_RE: Regex = Regex::new(r"^[a-zA-Z]*[-.']*[a-zA-Z]+$").unwrap();
}

/// A single word made of ASCII letters, with at most one run of `-`, `.`
/// or `'` somewhere before its final letter.
pub fn is_well_formed_word(word: &str) -> bool {
  WORD_SHAPE_RE.is_match(word)
}

fn transcription(sound: &Sound) -> Option<&str> {
  sound.ipa.as_deref().filter(|s| !s.is_empty())
}

const DROPPED_SENSE_KEYS: [&str; 2] = ["raw_glosses", "categories"];

/// Normalizes the entry's pronunciations in place.
///
/// Variants are checked in order. The first rejected variant ends the scan:
/// variants accepted before it are kept, it and everything after it are
/// dropped. Variants with a missing or empty transcription are skipped.
pub fn clean_sounds(inventory: &PhonemeInventory, entry: &mut DictionaryEntry) -> usize {
  let mut kept: Vec<Sound> = vec![];

  for sound in &entry.sounds {
    let Some(ipa) = transcription(sound) else { continue; };

    let segmentation = segment_and_validate(inventory, ipa);
    if segmentation.is_error() {
      tracing::debug!(
        word = %entry.word,
        ipa = %ipa,
        normalized = %segmentation.normalized,
        unknown = ?segmentation.unknown,
        faults = segmentation.faults.len(),
        "rejected pronunciation"
      );
      break;
    }

    kept.push(Sound {
      ipa: Some(segmentation.normalized),
      tags: sound.tags.clone(),
      extra: Map::new(),
    });
  }

  let rejected = entry.sounds.iter().filter(|s| transcription(s).is_some()).count() - kept.len();
  entry.sounds = kept;
  rejected
}

pub fn clean_senses(entry: &mut DictionaryEntry) {
  for sense in &mut entry.senses {
    for key in DROPPED_SENSE_KEYS {
      sense.fields.remove(key);
    }
  }
}

/// Runs the whole per-entry policy. `None` when the headword is not a
/// plain word; no phonetic work is done for those.
pub fn process_entry(inventory: &PhonemeInventory, mut entry: DictionaryEntry) -> Option<DictionaryEntry> {
  if !is_well_formed_word(&entry.word) {
    return None;
  }
  clean_sounds(inventory, &mut entry);
  clean_senses(&mut entry);
  Some(entry)
}
