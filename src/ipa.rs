
use serde::{Serialize, Deserialize};

// ˈstɹʌkʃən
// ˌɛkspləˈneɪʃən
#[derive(Debug, PartialEq, PartialOrd, Ord, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum Category {
  Consonant,
  Affricate,
  ShortVowel,
  LongVowel,
  Diphthong,
}

impl Category {
  pub const ALL: [Category; 5] = [
    Category::Consonant,
    Category::Affricate,
    Category::ShortVowel,
    Category::LongVowel,
    Category::Diphthong,
  ];

  /// Number of characters every symbol of this category is written with.
  pub fn symbol_len(&self) -> usize {
    use Category::*;
    match self {
      Consonant | ShortVowel => 1,
      Affricate | LongVowel | Diphthong => 2,
    }
  }

  pub fn is_biphone(&self) -> bool {
    self.symbol_len() == 2
  }

  pub fn is_vowel(&self) -> bool {
    use Category::*;
    matches!(self, ShortVowel | LongVowel | Diphthong)
  }

  pub fn is_onset(&self) -> bool {
    use Category::*;
    matches!(self, Consonant | Affricate)
  }
}

#[derive(Debug, PartialEq, PartialOrd, Ord, Eq, Copy, Clone, Hash)]
pub enum Stress {
  Primary,
  Secondary,
}

impl Stress {
  pub const PRIMARY_MARKER: char = 'ˈ';
  pub const SECONDARY_MARKER: char = 'ˌ';
}
