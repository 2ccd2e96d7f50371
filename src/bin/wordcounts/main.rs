
use std::{io::{self, BufWriter}, path::PathBuf};

use clap::{Parser, Subcommand};
use wikidict_ipa::wordcounts::{self, WordCounts};

#[derive(Parser, Debug)]
#[command()]
struct Args {
  #[command(subcommand)]
  command: Command,

  /// Drop words seen only once before writing
  #[arg(long, global = true)]
  prune_hapax: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Count words in plain-text article dumps
  Count {
    #[arg(required = true)]
    files: Vec<PathBuf>,
  },
  /// Combine "word count" files into one list, most common first
  Merge {
    #[arg(required = true)]
    files: Vec<PathBuf>,
  },
}

fn main() -> wikidict_ipa::Result<()> {
  wikidict_ipa::init_logging();
  let args = Args::parse();

  let counts: WordCounts = match &args.command {
    Command::Count { files } => wordcounts::count_files(files)?,
    Command::Merge { files } => wordcounts::merge_counts(files)?,
  };
  let counts = if args.prune_hapax { wordcounts::prune_hapax(counts) } else { counts };

  tracing::info!(words = counts.len(), "writing counts");
  wordcounts::write_counts(&mut BufWriter::new(io::stdout().lock()), &counts)
}
