
use serde::Serialize;

use crate::inventory::PhonemeInventory;

/// A character pair the scanner could not decompose. Both characters are
/// dropped from the token stream.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Fault {
  pub position: usize,
  pub pending: char,
  pub current: char,
}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Tokenization {
  pub tokens: Vec<String>,
  pub faults: Vec<Fault>,
}

impl Tokenization {
  pub fn joined(&self) -> String {
    self.tokens.join(" ")
  }
}

fn fold_retroflex(c: char) -> char {
  if c == 'ɚ' { 'ə' } else { c }
}

/// Splits a cleaned transcription into phone tokens.
///
/// Left to right with one character of lookahead: a character that can
/// begin a biphone is held back and combined with the next one when the
/// pair is registered. A character whose value equals the transcription's
/// last character never opens a biphone, wherever it occurs.
pub fn tokenize(inventory: &PhonemeInventory, transcription: &str) -> Tokenization {
  let chars: Vec<char> = transcription.chars().collect();
  let final_char = chars.last().copied();

  let mut res = Tokenization::default();
  let mut pending: Option<char> = None;

  for (position, raw) in chars.iter().enumerate() {
    let c = fold_retroflex(*raw);
    let is_last = position + 1 == chars.len();

    if let Some(prev) = pending.take() {
      let pair: String = [prev, c].iter().collect();
      if inventory.is_biphone(&pair) {
        res.tokens.push(pair);
      }
      else if inventory.is_symbol_char(c) {
        res.tokens.push(prev.to_string());
        res.tokens.push(c.to_string());
      }
      else {
        res.faults.push(Fault { position, pending: prev, current: c });
      }
    }
    else if inventory.opens_biphone(c) && !is_last && Some(c) != final_char {
      pending = Some(c);
    }
    else {
      res.tokens.push(c.to_string());
    }
  }

  res
}

#[cfg(test)]
mod tests {
  use super::*;

  fn toks(s: &str) -> Tokenization {
    tokenize(&PhonemeInventory::british_english(), s)
  }

  #[test]
  fn test_chain() {
    let t = toks("tʃeɪn");
    assert_eq!(t.tokens, vec!["tʃ", "eɪ", "n"]);
    assert!(t.faults.is_empty());
  }

  #[test]
  fn test_biphones_stay_whole() {
    assert_eq!(toks("dʒɔɪ").joined(), "dʒ ɔɪ");
    assert_eq!(toks("bɜːd").joined(), "b ɜː d");
    assert_eq!(toks("haʊs").joined(), "h aʊ s");
    assert_eq!(toks("ˈtʃɜːtʃɪz").joined(), "ˈ tʃ ɜː tʃ ɪ z");
  }

  #[test]
  fn test_opener_followed_by_plain_symbol() {
    let t = toks("ˈstɹʌkʃən");
    assert_eq!(t.tokens, vec!["ˈ", "s", "t", "ɹ", "ʌ", "k", "ʃ", "ə", "n"]);
    assert!(t.faults.is_empty());
  }

  #[test]
  fn test_opener_followed_by_stress_marker() {
    assert_eq!(toks("əˈbaʊt").joined(), "ə ˈ b aʊ t");
  }

  #[test]
  fn test_retroflex_folded_during_scan() {
    assert_eq!(toks("ˈbʌtɚ").joined(), "ˈ b ʌ t ə");
    assert_eq!(toks("ɚʊ").joined(), "əʊ");
  }

  #[test]
  fn test_unresolvable_pair_is_dropped_and_scan_continues() {
    let t = toks("t5æn");
    assert_eq!(t.tokens, vec!["æ", "n"]);
    assert_eq!(t.faults, vec![Fault { position: 1, pending: 't', current: '5' }]);
  }

  #[test]
  fn test_unknown_char_outside_pair_passes_through() {
    let t = toks("kæ5t");
    assert_eq!(t.tokens, vec!["k", "æ", "5", "t"]);
    assert!(t.faults.is_empty());
  }

  #[test]
  fn test_final_character_guard_is_by_value() {
    // 'i' is also the last character, so the first 'i' cannot open "iː"
    let t = toks("ˈiːzi");
    assert_eq!(t.tokens, vec!["ˈ", "i", "ː", "z", "i"]);
    assert!(t.faults.is_empty());
  }

  #[test]
  fn test_last_character_never_pending() {
    assert_eq!(toks("sɪt").joined(), "s ɪ t");
    assert_eq!(toks("stɚ").joined(), "s t ə");
    assert_eq!(toks("").tokens, Vec::<String>::new());
  }
}
