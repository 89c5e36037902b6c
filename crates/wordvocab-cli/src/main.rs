use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use env_logger::Env;
use std::path::{Path, PathBuf};
use wordvocab::store::JsonFileStore;
use wordvocab::tokenizer::WordTokenizer;
use wordvocab::{DEFAULT_CORPUS_FILE, DEFAULT_VOCAB_FILE};

mod ids;

type T = u32;

/// Word-level tokenizer with a persistent vocabulary.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the vocabulary file.
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_VOCAB_FILE)]
    pub vocab: PathBuf,

    /// Increase verbosity (-v, -vv).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease verbosity (-q, -qq).
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Tokenizer operations.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Learn every word in a text file.
    Train(TrainArgs),
    /// Encode text into token ids, learning unknown words.
    Encode(EncodeArgs),
    /// Decode token ids back into text.
    Decode(DecodeArgs),
    /// Print the vocabulary.
    Vocab,
}

/// Arguments for `train`.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Text file to train on.
    #[arg(value_name = "FILE", default_value = DEFAULT_CORPUS_FILE)]
    pub file: PathBuf,
}

/// Arguments for `encode`.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Text to encode; multiple arguments are joined by spaces.
    #[arg(required = true, value_name = "TEXT")]
    pub text: Vec<String>,

    /// Encode unknown words as <UNK> instead of learning them.
    #[arg(long)]
    pub no_learn: bool,
}

/// Arguments for `decode`.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Token ids: `2 4 5 3`, `2,4,5,3`, or `[2, 4, 5, 3]`.
    #[arg(required = true, value_name = "IDS", allow_negative_numbers = true)]
    pub ids: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    log::debug!("{:#?}", cli);

    let vocab_path = resolve(&cli.vocab)?;
    let tokenizer = WordTokenizer::<T, _>::new(JsonFileStore::new(vocab_path));

    match cli.command {
        Commands::Train(args) => {
            if let Err(err) = run_train(&tokenizer, args) {
                eprintln!("Train failed: {err:#}");
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Encode(args) => run_encode(&tokenizer, args),
        Commands::Decode(args) => run_decode(&tokenizer, args),
        Commands::Vocab => run_vocab(&tokenizer),
    }
}

fn init_logging(
    verbose: u8,
    quiet: u8,
) {
    use log::LevelFilter;

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if quiet > 0 {
        builder.filter_level(LevelFilter::Error);
    } else if verbose > 0 {
        builder.filter_level(match verbose {
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        });
    }
    let _ = builder.try_init();
}

/// Resolve `path` against the current working directory.
fn resolve(path: &Path) -> anyhow::Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("failed to resolve path: {}", path.display()))
}

fn run_train(
    tokenizer: &WordTokenizer<T, JsonFileStore>,
    args: TrainArgs,
) -> anyhow::Result<()> {
    let file = resolve(&args.file)?;
    let added = tokenizer.train_from_path(&file)?;

    println!(
        "Trained from {}. Added {added} new tokens. Vocab saved to {}",
        file.display(),
        tokenizer.store().path().display()
    );
    Ok(())
}

fn run_encode(
    tokenizer: &WordTokenizer<T, JsonFileStore>,
    args: EncodeArgs,
) -> anyhow::Result<()> {
    let text = args.text.join(" ");
    let tokens = tokenizer.encode(&text, !args.no_learn)?;

    println!("# Encoded IDs: {}", serde_json::to_string(&tokens)?);
    Ok(())
}

fn run_decode(
    tokenizer: &WordTokenizer<T, JsonFileStore>,
    args: DecodeArgs,
) -> anyhow::Result<()> {
    let ids = ids::parse_ids(&args.ids);
    if ids.is_empty() {
        anyhow::bail!("Could not parse IDs. Use e.g. `2 4 5 3` or `2,4,5,3`");
    }
    let text = tokenizer.decode_raw(&ids);

    println!("# Decoded Text: {text}");
    Ok(())
}

fn run_vocab(tokenizer: &WordTokenizer<T, JsonFileStore>) -> anyhow::Result<()> {
    let mut map = serde_json::Map::new();
    for (word, token) in tokenizer.inspect() {
        map.insert(word, token.into());
    }

    println!("{}", serde_json::to_string_pretty(&map)?);
    Ok(())
}
