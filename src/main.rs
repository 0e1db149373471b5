use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use textmetrics_bleu::{compute_bleu, BleuConfig, Corpora, Corpus};

/// Score candidate translations against references with multi-bleu.
#[derive(Parser, Debug)]
#[command(name = "textmetrics-bleu", version)]
struct Args {
    /// Reference file (repeat for multiple references)
    #[arg(short, long = "reference", required = true)]
    references: Vec<PathBuf>,

    /// Candidate file to score (repeat to score several separately)
    #[arg(short, long = "candidate", required = true)]
    candidates: Vec<PathBuf>,

    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Interpreter used to run the scorer script
    #[arg(long, env = "BLEU_INTERPRETER")]
    interpreter: Option<String>,

    /// Path to multi-bleu
    #[arg(long, env = "BLEU_SCRIPT")]
    script: Option<PathBuf>,

    /// Directory for temporary corpus files
    #[arg(long, env = "BLEU_TEMP_DIR")]
    temp_dir: Option<PathBuf>,

    /// Lowercase before scoring (multi-bleu -lc)
    #[arg(short, long)]
    lowercase: bool,

    /// Parse scorer output even when it exits non-zero
    #[arg(long)]
    ignore_exit_status: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn bleu_config(&self) -> Result<BleuConfig> {
        let mut config = match &self.config {
            Some(path) => BleuConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => BleuConfig::default(),
        };
        if let Some(interpreter) = &self.interpreter {
            config.interpreter = interpreter.clone();
        }
        if let Some(script) = &self.script {
            config.script = script.clone();
        }
        if let Some(dir) = &self.temp_dir {
            config.temp_dir = Some(dir.clone());
        }
        if self.lowercase {
            config.lowercase = true;
        }
        if self.ignore_exit_status {
            config.check_exit_status = false;
        }
        Ok(config)
    }
}

fn read_corpora(paths: &[PathBuf]) -> Result<Corpora> {
    let mut corpora = Corpora::new();
    for path in paths {
        let contents =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let name = path.display().to_string();
        if corpora.insert(name.clone(), Corpus::new(contents)).is_some() {
            bail!("{} given more than once", name);
        }
    }
    Ok(corpora)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.bleu_config()?;

    let references = read_corpora(&args.references)?;
    let candidates = read_corpora(&args.candidates)?;
    info!(
        "scoring {} candidate(s) against {} reference(s)",
        candidates.len(),
        references.len()
    );

    let results = compute_bleu(&config, &references, &candidates).context("computing BLEU")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for (name, res) in &results {
            println!("{}\t{}", name, res);
        }
    }

    Ok(())
}
