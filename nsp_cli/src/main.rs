use std::{
    error::Error,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use log::info;
use nsp_core::Segmenter;
use nsp_core::segmenter::{DEFAULT_DELIMITER, DEFAULT_MAX_WORD_LEN, DEFAULT_N_PATH};
use nsp_dict::WordList;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "nsp_cli", about = "N-shortest-path word segmentation")]
struct Args {
    /// Word list, one word per line (defaults to the bundled asset/dict.txt).
    #[arg(long)]
    dict: Option<PathBuf>,

    /// Number of distinct weight classes (word counts) to keep.
    #[arg(short = 'n', long, default_value_t = DEFAULT_N_PATH)]
    n_path: usize,

    /// Maximum length of a dictionary word, in characters.
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_WORD_LEN)]
    max_word_len: usize,

    /// Delimiter placed between words.
    #[arg(short = 'd', long, default_value = DEFAULT_DELIMITER)]
    delimiter: String,

    /// Fails once more than this many paths have been materialized.
    #[arg(long)]
    path_limit: Option<usize>,

    /// Prints only the number of paths.
    #[arg(long)]
    count_only: bool,

    /// Sentences to segment; reads lines from stdin when omitted.
    sentences: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let dict_path = args.dict.clone().unwrap_or_else(default_dict_path);
    let dict = WordList::from_path(&dict_path)?;
    info!("dictionary {} ({} words)", dict_path.display(), dict.len());

    let mut segmenter = Segmenter::new(dict)
        .n_path(args.n_path)
        .max_word_len(args.max_word_len)
        .delimiter(args.delimiter.as_str());
    if let Some(limit) = args.path_limit {
        segmenter = segmenter.path_limit(limit);
    }

    if args.sentences.is_empty() {
        return repl(&segmenter, &dict_path, args.count_only);
    }

    let mut out = BufWriter::new(io::stdout().lock());
    for sentence in &args.sentences {
        let paths = segmenter.segment(sentence)?;
        report(&mut out, &paths, args.count_only)?;
    }
    out.flush()?;
    Ok(())
}

fn default_dict_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("asset").join("dict.txt")
}

fn repl(segmenter: &Segmenter<WordList>, dict_path: &Path, count_only: bool) -> Result<(), Box<dyn Error>> {
    let mut out = io::stdout();
    let mut line = String::new();
    writeln!(out, "nsp demo | dict: {}", dict_path.display())?;
    writeln!(out, "输入句子后回车。输入 :q 退出。")?;
    out.flush()?;

    loop {
        line.clear();
        print!("sentence> ");
        out.flush()?;
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == ":q" || input == ":quit" || input == ":exit" {
            break;
        }

        // 单句失败（参数或路径上限）只提示，不退出
        match segmenter.segment(input) {
            Ok(paths) => report(&mut out, &paths, count_only)?,
            Err(e) => writeln!(out, "error: {e}")?,
        }
    }

    Ok(())
}

fn report(out: &mut impl Write, paths: &[String], count_only: bool) -> io::Result<()> {
    if !count_only {
        for path in paths {
            writeln!(out, "{path}")?;
        }
    }
    writeln!(out, "len(paths): {}", paths.len())
}
