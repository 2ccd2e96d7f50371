
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::entry::DictionaryEntry;
use crate::error::Result;

/// `{ety, pos}` per entry. The accepted transcriptions are only carried
/// when asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
  pub ety: Option<String>,
  pub pos: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ipa: Option<Vec<String>>,
}

impl Summary {
  pub fn of(entry: &DictionaryEntry, with_ipa: bool) -> Summary {
    Summary {
      ety: entry.etymology_text.clone(),
      pos: entry.pos.clone(),
      ipa: with_ipa.then(|| entry.sounds.iter().filter_map(|s| s.ipa.clone()).collect()),
    }
  }
}

pub type Aggregate = BTreeMap<String, Vec<Summary>>;

pub fn read_wordlist(path: &Path) -> Result<HashSet<String>> {
  let words = BufReader::new(File::open(path)?).lines()
    .map(|line| line.map(|l| l.trim().to_owned()))
    .collect::<io::Result<HashSet<String>>>()?;
  Ok(words.into_iter().filter(|w| !w.is_empty()).collect())
}

/// Groups allow-listed entries by headword. Entries sharing a word (one per
/// part of speech, usually) contribute one summary each, in input order.
pub fn aggregate(entries: &[DictionaryEntry], wordlist: &HashSet<String>, with_ipa: bool) -> Aggregate {
  let mut res: Aggregate = BTreeMap::new();
  for e in entries.iter().filter(|e| wordlist.contains(&e.word)) {
    res.entry(e.word.clone()).or_default().push(Summary::of(e, with_ipa));
  }
  res
}

pub fn write_aggregate<W: Write>(writer: W, aggregate: &Aggregate) -> Result<()> {
  serde_json::to_writer_pretty(writer, aggregate)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn entry(word: &str, pos: &str, ipa: &[&str]) -> DictionaryEntry {
    serde_json::from_value(json!({
      "word": word,
      "pos": pos,
      "etymology_text": format!("From {}.", word),
      "sounds": ipa.iter().map(|i| json!({"ipa": i})).collect::<Vec<_>>(),
      "senses": []
    })).unwrap()
  }

  #[test]
  fn test_aggregate_filters_and_groups() {
    let entries = vec![
      entry("chain", "noun", &["tʃ eɪ n"]),
      entry("zebra", "noun", &[]),
      entry("chain", "verb", &["tʃ eɪ n"]),
    ];
    let wordlist: HashSet<String> = ["chain".to_owned(), "cat".to_owned()].into_iter().collect();

    let agg = aggregate(&entries, &wordlist, true);
    assert_eq!(agg.len(), 1);
    let chain = &agg["chain"];
    assert_eq!(chain.len(), 2);
    assert_eq!(chain[0].pos.as_deref(), Some("noun"));
    assert_eq!(chain[1].pos.as_deref(), Some("verb"));
    assert_eq!(chain[1].ety.as_deref(), Some("From chain."));
    assert_eq!(chain[0].ipa, Some(vec!["tʃ eɪ n".to_owned()]));
  }

  #[test]
  fn test_read_wordlist() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "chain\n  struck  \n\ncat").unwrap();
    let words = read_wordlist(file.path()).unwrap();
    assert_eq!(words.len(), 3);
    assert!(words.contains("struck"));
  }

  fn written(agg: &Aggregate) -> serde_json::Value {
    let mut out: Vec<u8> = vec![];
    write_aggregate(&mut out, agg).unwrap();
    serde_json::from_slice(&out).unwrap()
  }

  #[test]
  fn test_write_aggregate_shape() {
    let wordlist: HashSet<String> = ["cat".to_owned()].into_iter().collect();
    let agg = aggregate(&[entry("cat", "noun", &["k ˈæ t"])], &wordlist, false);
    assert_eq!(written(&agg), json!({"cat": [{"ety": "From cat.", "pos": "noun"}]}));
  }

  #[test]
  fn test_write_aggregate_with_ipa() {
    let wordlist: HashSet<String> = ["cat".to_owned()].into_iter().collect();
    let agg = aggregate(&[entry("cat", "noun", &["k ˈæ t"])], &wordlist, true);
    assert_eq!(written(&agg), json!({"cat": [{"ety": "From cat.", "pos": "noun", "ipa": ["k ˈæ t"]}]}));
  }
}
