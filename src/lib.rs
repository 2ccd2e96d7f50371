
pub mod error;
pub mod ipa;
pub mod inventory;
pub mod tokenizer;
pub mod stress;
pub mod validator;
pub mod engine;
pub mod entry;
pub mod ingest;
pub mod wordlist;
pub mod wikitext;
pub mod wordcounts;

pub use engine::{segment_and_validate, Segmentation};
pub use error::{Error, Result};
pub use inventory::PhonemeInventory;

/// stderr logging for the binaries; stdout carries their output. Filter
/// with `RUST_LOG`, e.g. `RUST_LOG=wikidict_ipa=debug`.
pub fn init_logging() {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    )
    .with_writer(std::io::stderr)
    .init();
}
