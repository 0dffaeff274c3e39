use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use randtext_core::model::generator::Generator;
use randtext_core::model::suffix_model::{DEFAULT_PREFIX_LEN, SuffixModel};

/// Generates random text that reads well.
///
/// Feeds the suffix model from stdin or from a list of named files, then
/// prints a freshly generated word sequence to stdout.
#[derive(Parser)]
#[command(name = "randtext", version, about)]
struct Args {
    /// Number of words to generate
    #[arg(short = 'n', long = "words", default_value_t = 100)]
    words: usize,

    /// Prefix window length used by the model
    #[arg(short = 'p', long = "prefix-len", default_value_t = DEFAULT_PREFIX_LEN)]
    prefix_len: usize,

    /// Dump the prefix/successor table to stderr after feeding
    #[arg(long)]
    dump: bool,

    /// Input files; stdin is read when none are given
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut model = match SuffixModel::new(args.prefix_len) {
        Ok(model) => model,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::from(2);
        }
    };

    if args.files.is_empty() {
        if let Err(e) = model.feed(io::stdin().lock()) {
            log::error!("stdin: {e}");
            return ExitCode::FAILURE;
        }
    } else {
        // A source that cannot be opened or read is skipped; the run
        // continues with the remaining files.
        for path in &args.files {
            let file = match File::open(path) {
                Ok(file) => file,
                Err(e) => {
                    log::error!("{}: {e}", path.display());
                    continue;
                }
            };
            if let Err(e) = model.feed(file) {
                log::error!("{}: {e}", path.display());
            }
        }
    }

    if args.dump {
        dump_table(&model);
    }

    match Generator::new(&model).generate(args.words) {
        Ok(words) => {
            println!("{}", format_sentence(&words));
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Joins generated words with single spaces and capitalizes the first one.
fn format_sentence(words: &[String]) -> String {
    let mut sentence = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            sentence.push(' ');
        }
        if i == 0 {
            sentence.push_str(&capitalize(word));
        } else {
            sentence.push_str(word);
        }
    }
    sentence
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Prints the learned table to stderr, one prefix per line.
///
/// Keys are sorted and quoted so that empty slots in starting prefixes
/// stay visible.
fn dump_table(model: &SuffixModel) {
    let mut entries: Vec<_> = model.entries().collect();
    entries.sort_by_key(|(key, _)| *key);

    eprintln!("{:<30}\tSUFFIX", "PREFIX");
    eprintln!("{:<30}\t------", "------");
    for (key, successors) in entries {
        eprintln!("{:<30}\t{successors:?}", format!("{key:?}"));
    }
}
