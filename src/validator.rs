
use crate::inventory::PhonemeInventory;

/// Units of a normalized transcription that are not phonemes, in order of
/// appearance. Empty when the transcription is fully decomposed.
pub fn unknown_units(inventory: &PhonemeInventory, normalized: &str) -> Vec<String> {
  inventory.strip_markers(normalized)
    .split_whitespace()
    .filter(|unit| !inventory.is_phoneme(unit))
    .map(|unit| unit.to_owned())
    .collect()
}

pub fn is_valid(inventory: &PhonemeInventory, normalized: &str) -> bool {
  unknown_units(inventory, normalized).is_empty()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_valid() {
    let inv = PhonemeInventory::british_english();
    assert!(is_valid(&inv, "s t ɹ ˈʌ k ʃ ə n"));
    assert!(is_valid(&inv, "ˌɛ k s p l ə n ˈeɪ ʃ ə n"));
    assert!(is_valid(&inv, ""));
  }

  #[test]
  fn test_unknown_units_reported() {
    let inv = PhonemeInventory::british_english();
    assert_eq!(unknown_units(&inv, "k ˈæ 5 t"), vec!["5"]);
    assert_eq!(unknown_units(&inv, "ˈi ː z i"), vec!["ː"]);
    assert_eq!(unknown_units(&inv, "t  a"), vec!["a"]);
  }
}
