use anyhow::{bail, ensure, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::{env, fs, path::PathBuf};
use tracing_subscriber::EnvFilter;

use dictionary_json::{
    dictionary_txt::{
        abbreviation::AbbreviationTable,
        entry::DictionaryEntry,
        parser::{dictionary_lines, parse_dictionary_entry, Lexicon, ParseOptions},
    },
    utility::encoding::decode_text,
};

struct Args {
    dictionary_path: String,
    abbreviations_path: String,
    output_path: Option<String>,
    encoding: Option<String>,
    raw_flags: bool,
    compact: bool,
}

fn usage(opts: &getopts::Options) -> String {
    let brief = "Usage: dictionary-json [options] <dictionary.txt> <abbreviations.(json|csv)> [output.json]";
    opts.usage(brief)
}

// None なら --help
fn get_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt(
        "e",
        "encoding",
        "encoding of the dictionary file (default: utf-8)",
        "LABEL",
    );
    opts.optflag("", "raw-flags", "keep the flags unparsed");
    opts.optflag("", "compact", "write JSON without indentation");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        println!("{}", usage(&opts));
        return Ok(None);
    }

    let dictionary_path = matches
        .free
        .first()
        .with_context(|| format!("path to dictionary is required\n\n{}", usage(&opts)))?
        .clone();
    let abbreviations_path = matches
        .free
        .get(1)
        .with_context(|| format!("path to abbreviations is required\n\n{}", usage(&opts)))?
        .clone();
    let output_path = matches.free.get(2).cloned();

    Ok(Some(Args {
        dictionary_path,
        abbreviations_path,
        output_path,
        encoding: matches.opt_str("e"),
        raw_flags: matches.opt_present("raw-flags"),
        compact: matches.opt_present("compact"),
    }))
}

// 出力先がなければ解析と警告だけ行う
enum BuildOut {
    Null,
    File { path: PathBuf, compact: bool },
}

impl BuildOut {
    fn init_file(path: &str, compact: bool) -> Result<Self> {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure!(
                parent.is_dir(),
                "Output directory not found: {}",
                parent.display()
            );
        }

        Ok(Self::File { path, compact })
    }

    fn save_entries(&self, entries: &[DictionaryEntry]) -> Result<()> {
        if let BuildOut::File { path, compact } = &self {
            let json = if *compact {
                serde_json::to_string(entries)?
            } else {
                serde_json::to_string_pretty(entries)?
            };

            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(args) = get_args()? else {
        return Ok(());
    };

    let dictionary_path = PathBuf::from(&args.dictionary_path);
    ensure!(
        dictionary_path.exists(),
        "File not found: {}",
        dictionary_path.display()
    );

    let abbreviations_path = PathBuf::from(&args.abbreviations_path);
    ensure!(
        abbreviations_path.exists(),
        "File not found: {}",
        abbreviations_path.display()
    );

    let out = if let Some(output_path) = &args.output_path {
        BuildOut::init_file(output_path, args.compact)
            .with_context(|| format!("Failed to output file: {}", output_path))?
    } else {
        BuildOut::Null
    };

    let abbreviations = AbbreviationTable::load(&abbreviations_path)?;
    if abbreviations.is_empty() {
        tracing::warn!(
            path = %abbreviations_path.display(),
            "Abbreviation table is empty; abbreviated tags will not resolve"
        );
    }
    let lexicon = Lexicon::new(abbreviations);
    let options = ParseOptions {
        raw_flags: args.raw_flags,
    };

    println!("Loading dictionary...");

    let txt = {
        let bytes = fs::read(&dictionary_path)
            .with_context(|| format!("Failed to read {}", dictionary_path.display()))?;
        decode_text(&bytes, args.encoding.as_deref())?
    };
    let lines: Vec<&str> = dictionary_lines(&txt).collect();

    println!("Finished.");

    println!("Parsing {} entries...", lines.len());

    let pb = create_progress_bar(lines.len() as u64);
    let entries: Vec<DictionaryEntry> = lines
        .iter()
        .progress_with(pb)
        .map(|line| parse_dictionary_entry(line, &lexicon, &options))
        .collect();

    out.save_entries(&entries)?;

    println!("Finished.");

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
