
use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use nom::IResult;
use nom::Parser;
use nom::bytes::complete::is_not;
use nom::character::complete::{digit1, space1};
use nom::combinator::{all_consuming, map_res};
use nom::sequence::separated_pair;
use rayon::prelude::*;
use regex::Regex;

use crate::error::{Error, Result};
use crate::wikitext;

pub type WordCounts = HashMap<String, u64>;

/// Lines this short are headings, captions or list debris, not prose.
pub const MIN_LINE_CHARS: usize = 60;

lazy_static! {
  static ref LIST_OR_HEADING_RE: Regex = Regex::new(r"^(\*|=+)").unwrap();
  static ref EMPHASIS_RE: Regex = Regex::new(r"'+([A-Za-z]+)'+").unwrap();
  static ref PARENS_RE: Regex = Regex::new(r"[()]").unwrap();
  static ref PUNCTUATION_RE: Regex = Regex::new(r"[,.:;?!]").unwrap();
  static ref QUOTES_RE: Regex = Regex::new(r#"["']"#).unwrap();
}

fn counted_line(line: &str) -> Option<String> {
  if line.chars().count() <= MIN_LINE_CHARS || LIST_OR_HEADING_RE.is_match(line) {
    return None;
  }
  let line = EMPHASIS_RE.replace_all(line, "$1");
  let line = PARENS_RE.replace_all(&line, "");
  let line = PUNCTUATION_RE.replace_all(&line, "").to_lowercase();
  Some(QUOTES_RE.replace_all(&line, "").into_owned())
}

/// Word frequencies of article wikitext. Markup is stripped first, then
/// only long prose lines are counted.
pub fn count_words(text: &str) -> WordCounts {
  let mut counts = WordCounts::new();
  for line in wikitext::strip_markup(text).split('\n').filter_map(counted_line) {
    for word in line.split_whitespace() {
      *counts.entry(word.to_owned()).or_insert(0) += 1;
    }
  }
  counts
}

pub fn add_counts(into: &mut WordCounts, other: WordCounts) {
  for (word, n) in other {
    *into.entry(word).or_insert(0) += n;
  }
}

pub fn count_files(paths: &[PathBuf]) -> Result<WordCounts> {
  let per_file: Vec<WordCounts> = paths.par_iter()
    .map(|p| -> Result<WordCounts> { Ok(count_words(&fs::read_to_string(p)?)) })
    .collect::<Result<_>>()?;
  Ok(merge_all(per_file))
}

fn merge_all(parts: Vec<WordCounts>) -> WordCounts {
  let mut res = WordCounts::new();
  for part in parts {
    add_counts(&mut res, part);
  }
  res
}

// "colour 1234"
pub fn parse_count_line(i: &str) -> IResult<&str, (&str, u64)> {
  all_consuming(separated_pair(
    is_not(" \t"),
    space1,
    map_res(digit1, |d: &str| d.parse::<u64>())
  )).parse(i)
}

pub fn read_counts(path: &Path) -> Result<WordCounts> {
  let mut counts = WordCounts::new();
  for (i, line) in BufReader::new(fs::File::open(path)?).lines().enumerate() {
    let line = line?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }
    let (_, (word, n)) = parse_count_line(trimmed)
      .map_err(|_| Error::MalformedCountLine { line_number: i + 1, line: line.clone() })?;
    *counts.entry(word.to_owned()).or_insert(0) += n;
  }
  Ok(counts)
}

/// Fan-in of per-shard count files.
pub fn merge_counts(paths: &[PathBuf]) -> Result<WordCounts> {
  let parts: Vec<WordCounts> = paths.par_iter()
    .map(|p| read_counts(p))
    .collect::<Result<_>>()?;
  tracing::info!(files = parts.len(), "merged word count files");
  Ok(merge_all(parts))
}

/// Drops words seen only once.
pub fn prune_hapax(counts: WordCounts) -> WordCounts {
  counts.into_iter().filter(|(_, n)| *n > 1).collect()
}

/// Highest count first; ties in word order.
pub fn most_common(counts: &WordCounts) -> Vec<(&str, u64)> {
  let mut items: Vec<(&str, u64)> = counts.iter().map(|(w, n)| (w.as_str(), *n)).collect();
  items.sort_by(|(w1, n1), (w2, n2)| n2.cmp(n1).then_with(|| w1.cmp(w2)));
  items
}

pub fn write_counts<W: Write>(writer: &mut W, counts: &WordCounts) -> Result<()> {
  for (word, n) in most_common(counts) {
    writeln!(writer, "{} {}", word, n)?;
  }
  writer.flush()?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use more_asserts::assert_gt;

  const PROSE: &str = "The ''cat'' sat on the (old) mat, and the cat was happy: very happy indeed!";

  #[test]
  fn test_count_words_cleans_lines() {
    let counts = count_words(PROSE);
    assert_eq!(counts["the"], 3);
    assert_eq!(counts["cat"], 2);
    assert_eq!(counts["old"], 1);
    assert_eq!(counts["mat"], 1);
    assert_eq!(counts["indeed"], 1);
    assert!(!counts.contains_key("''cat''"));
  }

  #[test]
  fn test_short_list_and_heading_lines_skipped() {
    let text = format!("short line here\n* {}\n== {}\n{}", PROSE, PROSE, PROSE);
    let counts = count_words(&text);
    assert_eq!(counts["the"], 3);
    assert!(!counts.contains_key("short"));
  }

  #[test]
  fn test_markup_not_counted() {
    let text = "Domestic [[cat|cats]] are small carnivorous [[mammal]]s {{cite web|title=Cats}} \
      kept as pets in many households<ref>Smith</ref>.";
    let counts = count_words(text);
    assert_eq!(counts["cats"], 1);
    assert_eq!(counts["mammals"], 1);
    assert_eq!(counts["households"], 1);
    for debris in ["cat|cats", "[[mammal]]s", "cite", "web|title=cats", "smith", "<ref>smith</ref>"] {
      assert!(!counts.contains_key(debris), "{}", debris);
    }
  }

  #[test]
  fn test_parse_count_line() {
    assert_eq!(parse_count_line("colour 1234"), Ok(("", ("colour", 1234))));
    assert!(parse_count_line("colour").is_err());
    assert!(parse_count_line("colour 12x").is_err());
  }

  #[test]
  fn test_merge_counts() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    fs::write(&a, "the 10\ncat 2\nzebra 1\n").unwrap();
    fs::write(&b, "the 5\ndog 2\n\n").unwrap();

    let merged = merge_counts(&[a, b]).unwrap();
    assert_eq!(merged["the"], 15);
    assert_eq!(merged["zebra"], 1);

    let pruned = prune_hapax(merged);
    assert!(!pruned.contains_key("zebra"));

    let ranked = most_common(&pruned);
    assert_eq!(ranked, vec![("the", 15), ("cat", 2), ("dog", 2)]);
    assert_gt!(ranked[0].1, ranked[1].1);

    let mut out: Vec<u8> = vec![];
    write_counts(&mut out, &pruned).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "the 15\ncat 2\ndog 2\n");
  }

  #[test]
  fn test_malformed_count_file() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a");
    fs::write(&a, "the 10\nbroken\n").unwrap();
    match read_counts(&a) {
      Err(Error::MalformedCountLine { line_number, .. }) => assert_eq!(line_number, 2),
      other => panic!("expected malformed line, got {:?}", other.map(|c| c.len())),
    }
  }
}
