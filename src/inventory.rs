
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::ipa::{Category, Stress};

/// On-disk shape of a phoneme inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
  pub consonants: Vec<String>,
  pub affricates: Vec<String>,
  pub short_vowels: Vec<String>,
  pub long_vowels: Vec<String>,
  pub diphthongs: Vec<String>,
  #[serde(default)]
  pub removable: Vec<char>,
  #[serde(default = "default_primary")]
  pub primary_stress: char,
  #[serde(default = "default_secondary")]
  pub secondary_stress: char,
}

fn default_primary() -> char { Stress::PRIMARY_MARKER }
fn default_secondary() -> char { Stress::SECONDARY_MARKER }

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

impl InventoryConfig {
  pub fn british_english() -> InventoryConfig {
    InventoryConfig {
      consonants: strings(&[
        "p", "b", "t", "d", "k", "g", "ɡ", "f", "v", "s", "z", "ð",
        "θ", "ʃ", "ʒ", "m", "n", "ŋ", "j", "l", "w", "ɹ", "h",
      ]),
      affricates: strings(&["dʒ", "tʃ"]),
      short_vowels: strings(&["i", "ʊ", "æ", "ɐ", "ɒ", "ə", "ɛ", "ɪ", "ʌ"]),
      long_vowels: strings(&["iː", "uː", "ɑː", "ɔː", "ɜː"]),
      diphthongs: strings(&["aɪ", "aʊ", "eɪ", "ɔɪ", "əʊ", "ɛə", "ɪə", "ʊə"]),
      removable: vec!['\u{361}', '.'],
      primary_stress: Stress::PRIMARY_MARKER,
      secondary_stress: Stress::SECONDARY_MARKER,
    }
  }

  pub fn symbols(&self, category: Category) -> &[String] {
    use Category::*;
    match category {
      Consonant => &self.consonants,
      Affricate => &self.affricates,
      ShortVowel => &self.short_vowels,
      LongVowel => &self.long_vowels,
      Diphthong => &self.diphthongs,
    }
  }
}

/// The closed set of phonemes a transcription must decompose into.
///
/// Built once and passed by reference to every engine call; nothing in the
/// engine mutates it, so one inventory can be shared across rayon workers.
#[derive(Debug, Clone)]
pub struct PhonemeInventory {
  categories: HashMap<String, Category>,
  biphone_openers: HashSet<char>,
  removable: HashSet<char>,
  primary: char,
  secondary: char,
}

impl PhonemeInventory {
  pub fn new(config: &InventoryConfig) -> Result<PhonemeInventory> {
    let mut categories: HashMap<String, Category> = HashMap::new();

    for category in Category::ALL {
      for symbol in config.symbols(category) {
        if symbol.chars().count() != category.symbol_len() {
          return Err(Error::MalformedSymbol {
            symbol: symbol.clone(),
            category,
            expected: category.symbol_len(),
          });
        }
        if let Some(first) = categories.get(symbol) {
          if *first != category {
            return Err(Error::OverlappingSymbol { symbol: symbol.clone(), first: *first, second: category });
          }
        }
        categories.insert(symbol.clone(), category);
      }
    }

    let mut markers: HashSet<char> = HashSet::new();
    for m in [config.primary_stress, config.secondary_stress].into_iter().chain(config.removable.iter().copied()) {
      if categories.contains_key(&m.to_string()) || !markers.insert(m) {
        return Err(Error::MarkerCollision(m));
      }
    }

    let biphone_openers = categories.iter()
      .filter(|(_, c)| c.is_biphone())
      .filter_map(|(s, _)| s.chars().next())
      .collect();

    Ok(PhonemeInventory {
      categories,
      biphone_openers,
      removable: config.removable.iter().copied().collect(),
      primary: config.primary_stress,
      secondary: config.secondary_stress,
    })
  }

  pub fn british_english() -> PhonemeInventory {
    lazy_static::lazy_static! {
      static ref BRITISH_ENGLISH: PhonemeInventory =
        PhonemeInventory::new(&InventoryConfig::british_english())
          .expect("built-in inventory is well formed");
    }
    BRITISH_ENGLISH.clone()
  }

  pub fn load(path: &Path) -> Result<PhonemeInventory> {
    let config: InventoryConfig = serde_json::from_reader(io::BufReader::new(File::open(path)?))?;
    PhonemeInventory::new(&config)
  }

  pub fn category(&self, symbol: &str) -> Option<Category> {
    self.categories.get(symbol).copied()
  }

  pub fn is_phoneme(&self, symbol: &str) -> bool {
    self.categories.contains_key(symbol)
  }

  pub fn is_biphone(&self, symbol: &str) -> bool {
    self.category(symbol).map_or(false, |c| c.is_biphone())
  }

  pub fn is_vowel(&self, symbol: &str) -> bool {
    self.category(symbol).map_or(false, |c| c.is_vowel())
  }

  pub fn is_onset(&self, symbol: &str) -> bool {
    self.category(symbol).map_or(false, |c| c.is_onset())
  }

  pub fn is_affricate(&self, symbol: &str) -> bool {
    self.category(symbol) == Some(Category::Affricate)
  }

  /// A single character that stands on its own: a one-char phoneme or a
  /// stress marker.
  pub fn is_symbol_char(&self, c: char) -> bool {
    self.is_stress_marker(c) || {
      let mut buf = [0u8; 4];
      self.categories.get(&*c.encode_utf8(&mut buf)).map_or(false, |cat| !cat.is_biphone())
    }
  }

  pub fn opens_biphone(&self, c: char) -> bool {
    self.biphone_openers.contains(&c)
  }

  pub fn stress_of(&self, c: char) -> Option<Stress> {
    if c == self.primary { Some(Stress::Primary) }
    else if c == self.secondary { Some(Stress::Secondary) }
    else { None }
  }

  pub fn is_stress_marker(&self, c: char) -> bool {
    self.stress_of(c).is_some()
  }

  /// True when `token` is exactly one stress marker.
  pub fn is_marker_token(&self, token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if self.is_stress_marker(c))
  }

  pub fn is_removable(&self, c: char) -> bool {
    self.removable.contains(&c)
  }

  pub fn strip_markers(&self, s: &str) -> String {
    s.chars().filter(|c| !self.is_stress_marker(*c)).collect()
  }
}
