//! Reads a corpus from a file and prints one generated sentence.
//!
//! Usage: `wordwalk --corpus-file books.txt --prompt "The A Once"`

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::filter::LevelFilter;

use wordwalk::io::read_corpus;
use wordwalk::{generate_reply, KeySource, ReplyOptions};

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "wordwalk", about = "Generate a sentence from a text with a Markov chain")]
struct Cli {
    /// Text file the chain is built from
    #[arg(long, env = "WORDWALK_CORPUS", default_value = "books.txt")]
    corpus_file: PathBuf,

    /// Words to pick the first word from
    #[arg(long, env = "WORDWALK_PROMPT")]
    prompt: Option<String>,

    /// Pick the first word from the whole corpus instead
    #[arg(long, conflicts_with = "prompt")]
    seed_from_corpus: bool,

    /// Seed for reproducible output
    #[arg(long, env = "WORDWALK_SEED")]
    seed: Option<u64>,

    /// Give up if the sentence gets longer than this many words (0 for no limit)
    #[arg(long, default_value_t = 10_000)]
    max_words: usize,

    /// Logging verbosity level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

impl Cli {
    fn reply_options(&self) -> ReplyOptions<'_> {
        let keys = match (&self.prompt, self.seed_from_corpus) {
            (_, true) => KeySource::Corpus,
            (Some(prompt), false) => KeySource::Prompt(prompt),
            (None, false) => KeySource::Defaults,
        };
        ReplyOptions {
            keys,
            max_words: (self.max_words > 0).then_some(self.max_words),
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::from(cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    let corpus = read_corpus(&cli.corpus_file)?;
    let reply = generate_reply(&mut cli.rng(), Some(&corpus), &cli.reply_options())?;
    println!("{reply}");

    Ok(())
}
