
use crate::inventory::PhonemeInventory;

/// Longest onset a stress marker is moved across.
pub const MAX_ONSET: usize = 4;

/// Moves every stress marker from in front of its syllable's onset to in
/// front of the syllable's nucleus, fusing it onto the vowel.
///
/// `ˈ s t ɹ ʌ` becomes `s t ɹ ˈʌ`. A marker whose onset is empty, longer
/// than [`MAX_ONSET`], or not closed by a vowel is left where it is.
pub fn move_markers(inventory: &PhonemeInventory, tokens: &[String]) -> Vec<String> {
  let mut res: Vec<String> = Vec::with_capacity(tokens.len());
  let mut i = 0;

  while i < tokens.len() {
    let token = &tokens[i];

    if inventory.is_marker_token(token) {
      let onset = tokens[i + 1 ..].iter().take_while(|t| inventory.is_onset(t)).count();
      let nucleus = tokens.get(i + 1 + onset);

      if let (1 ..= MAX_ONSET, Some(vowel)) = (onset, nucleus) {
        if inventory.is_vowel(vowel) {
          res.extend(tokens[i + 1 .. i + 1 + onset].iter().cloned());
          res.push(format!("{}{}", token, vowel));
          i += onset + 2;
          continue;
        }
      }
    }

    res.push(token.clone());
    i += 1;
  }

  res
}

fn strip_removable(inventory: &PhonemeInventory, units: Vec<String>) -> Vec<String> {
  units.into_iter()
    .map(|u| u.chars().filter(|c| !inventory.is_removable(*c)).collect::<String>())
    .filter(|u| !u.trim().is_empty())
    .collect()
}

fn fuse_bare_markers(inventory: &PhonemeInventory, units: Vec<String>) -> Vec<String> {
  let mut res: Vec<String> = Vec::with_capacity(units.len());
  let mut prefix = String::new();

  for unit in units {
    if unit.chars().all(|c| inventory.is_stress_marker(c)) {
      prefix.push_str(&unit);
      continue;
    }
    prefix.push_str(&unit);
    res.push(std::mem::take(&mut prefix));
  }

  if !prefix.is_empty() {
    res.push(prefix);
  }

  res
}

fn single_char(s: &str) -> Option<char> {
  let mut chars = s.chars();
  match (chars.next(), chars.next()) {
    (Some(c), None) => Some(c),
    _ => None
  }
}

/// `t ʃ` -> `tʃ`, also when the first half carries a marker (`ˈt ʃ`).
fn merge_split_affricates(inventory: &PhonemeInventory, units: Vec<String>) -> Vec<String> {
  let mut res: Vec<String> = Vec::with_capacity(units.len());

  for unit in units {
    let merged = match (res.last(), single_char(&unit)) {
      (Some(last), Some(second)) => {
        match single_char(&inventory.strip_markers(last)) {
          Some(first) => inventory.is_affricate(&format!("{}{}", first, second)),
          None => false
        }
      },
      _ => false
    };

    match res.last_mut() {
      Some(last) if merged => last.push_str(&unit),
      _ => res.push(unit),
    }
  }

  res
}

/// Marker relocation followed by the cleanup passes, in order: removable
/// marks, bare marker fusion, split affricates.
pub fn reposition(inventory: &PhonemeInventory, tokens: &[String]) -> Vec<String> {
  let units = move_markers(inventory, tokens);
  let units = strip_removable(inventory, units);
  let units = fuse_bare_markers(inventory, units);
  merge_split_affricates(inventory, units)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn run(stream: &str) -> String {
    let inv = PhonemeInventory::british_english();
    let tokens: Vec<String> = stream.split(' ').map(|s| s.to_owned()).collect();
    reposition(&inv, &tokens).join(" ")
  }

  #[test]
  fn test_three_consonant_onset() {
    assert_eq!(run("ˈ s t ɹ ʌ k ʃ ə n"), "s t ɹ ˈʌ k ʃ ə n");
  }

  #[test]
  fn test_every_onset_length() {
    assert_eq!(run("ˈ æ p"), "ˈæ p");
    assert_eq!(run("ˈ b ɒ"), "b ˈɒ");
    assert_eq!(run("ˈ p l æ n"), "p l ˈæ n");
    assert_eq!(run("ə ˈ s t ɹ iː t"), "ə s t ɹ ˈiː t");
    assert_eq!(run("ˈ k s p ɹ æ m"), "k s p ɹ ˈæ m");
  }

  #[test]
  fn test_five_consonant_onset_is_left_alone() {
    assert_eq!(run("ˈ k s p ɹ l æ m"), "ˈk s p ɹ l æ m");
  }

  #[test]
  fn test_affricate_counts_as_onset() {
    assert_eq!(run("ˈ dʒ æ m"), "dʒ ˈæ m");
    assert_eq!(run("ˌ s tʃ eɪ"), "s tʃ ˌeɪ");
  }

  #[test]
  fn test_multiple_markers() {
    assert_eq!(run("ˌ ɛ k s p l ə ˈ n eɪ ʃ ə n"), "ˌɛ k s p l ə n ˈeɪ ʃ ə n");
  }

  #[test]
  fn test_marker_without_nucleus() {
    assert_eq!(run("k æ t ˈ s"), "k æ t ˈs");
    assert_eq!(run("k æ ˈ"), "k æ ˈ");
  }

  #[test]
  fn test_removable_marks_and_blanks() {
    assert_eq!(run("ˈ k æ t \u{361} ʃ"), "k ˈæ tʃ");
    assert_eq!(run("b æ ."), "b æ");
  }

  #[test]
  fn test_split_affricate_next_to_marker() {
    assert_eq!(run("ˈ t ʃ iː t"), "tʃ ˈiː t");
    assert_eq!(run("k ˈ t ʃ"), "k ˈtʃ");
  }
}
