
use std::io;

use crate::ipa::Category;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("i/o error: {0}")]
  Io(#[from] io::Error),
  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
  #[error("symbol {symbol:?} is listed as both {first:?} and {second:?}")]
  OverlappingSymbol { symbol: String, first: Category, second: Category },
  #[error("symbol {symbol:?} should be {expected} character(s) long to be a {category:?}")]
  MalformedSymbol { symbol: String, category: Category, expected: usize },
  #[error("marker {0:?} collides with a phoneme or another marker")]
  MarkerCollision(char),
  #[error("malformed count line {line_number}: {line:?}")]
  MalformedCountLine { line_number: usize, line: String },
}

pub type Result<T> = std::result::Result<T, Error>;
