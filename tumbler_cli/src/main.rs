use tumbler_core::config::{CorpusConfig, FuzzerSettings, TumblerConfig};
use tumbler_core::corpus::{Corpus, CorpusEntryMetadata, CorpusError, InMemoryCorpus};
use tumbler_core::input::{DynInput, Input};
use tumbler_core::mutator::{MangleEnv, Mangler, Mutator};
use tumbler_core::timing::{CovTimestamp, CoverageClock};

use clap::Parser;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

const DEFAULT_CONFIG_FILE: &str = "tumbler.toml";
const OUTPUT_EXTENSION: &str = "tumbler";

#[derive(Parser, Debug)]
#[clap(author, version, about = "Generate mutated test cases from a seed corpus", long_about = None)]
struct Cli {
    #[clap(short, long, value_parser)]
    config_file: Option<PathBuf>,
    /// Seed file or directory; may be repeated.
    #[clap(short, long = "seeds")]
    seeds: Vec<PathBuf>,
    #[clap(short, long)]
    dict: Option<PathBuf>,
    #[clap(short, long)]
    output_dir: Option<PathBuf>,
    #[clap(short, long)]
    iterations: Option<u64>,
    #[clap(short, long)]
    mutations_per_run: Option<u64>,
    #[clap(long)]
    max_input_size: Option<usize>,
    #[clap(short, long)]
    printable: bool,
    #[clap(long)]
    seed: Option<u64>,
    #[clap(long)]
    speed_factor: Option<i64>,
    /// Write a JSON summary of the run to this path.
    #[clap(long)]
    report: Option<PathBuf>,
}

#[derive(Serialize, Debug, Default)]
struct RunReport {
    iterations: u64,
    rng_seed: u64,
    speed_factor: i64,
    corpus_size: usize,
    dictionary_size: usize,
    distinct_outputs: usize,
    written_outputs: usize,
    min_output_len: usize,
    max_output_len: usize,
    total_output_bytes: u64,
    elapsed_ms: u128,
}

fn load_config(cli: &Cli) -> Result<TumblerConfig, anyhow::Error> {
    let mut config = match &cli.config_file {
        Some(config_path) => {
            log::info!("Loading configuration from {config_path:?}");
            TumblerConfig::load_from_file(config_path)?
        }
        None => {
            let default_config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_config_path.exists() {
                log::info!("Loading default configuration {default_config_path:?}");
                TumblerConfig::load_from_file(&default_config_path)?
            } else {
                log::info!("No '{DEFAULT_CONFIG_FILE}' found, using built-in defaults");
                TumblerConfig::default()
            }
        }
    };

    if let Some(dict) = &cli.dict {
        config.mutate.dictionary_file = Some(dict.clone());
    }
    if let Some(mutations_per_run) = cli.mutations_per_run {
        config.mutate.mutations_per_run = mutations_per_run;
    }
    if let Some(max_input_size) = cli.max_input_size {
        config.mutate.max_input_size = max_input_size;
    }
    if cli.printable {
        config.mutate.printable_only = true;
    }

    let fuzzer = config.fuzzer.get_or_insert_with(FuzzerSettings::default);
    if let Some(iterations) = cli.iterations {
        fuzzer.iterations = iterations;
    }
    if let Some(seed) = cli.seed {
        fuzzer.seed = seed;
    }
    if let Some(speed_factor) = cli.speed_factor {
        fuzzer.speed_factor = speed_factor;
    }

    let corpus = config.corpus.get_or_insert_with(CorpusConfig::default);
    if !cli.seeds.is_empty() {
        corpus
            .initial_seed_paths
            .get_or_insert_with(Vec::new)
            .extend(cli.seeds.iter().cloned());
    }
    if let Some(output_dir) = &cli.output_dir {
        corpus.output_dir = Some(output_dir.clone());
    }

    config.mutate.validate()?;
    Ok(config)
}

fn output_file_name(data: &[u8]) -> String {
    format!("{:x}.{:08x}.{}", md5::compute(data), data.len(), OUTPUT_EXTENSION)
}

fn write_output(dir: &Path, data: &[u8]) -> Result<bool, anyhow::Error> {
    let path = dir.join(output_file_name(data));
    if path.exists() {
        return Ok(false);
    }
    fs::write(&path, data)
        .map_err(|e| anyhow::anyhow!("Failed to write output {:?}: {}", path, e))?;
    log::trace!("Wrote {:?}", path);
    Ok(true)
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    log::debug!("Effective configuration: {config:#?}");

    let settings = config.fuzzer.clone().unwrap_or_default();
    let corpus_config = config.corpus.clone().unwrap_or_default();
    let max_input_size = config.mutate.max_input_size;

    let dictionary = config.mutate.load_dictionary()?;
    log::info!("Static dictionary holds {} entries", dictionary.len());

    let mut corpus: InMemoryCorpus<Vec<u8>> = InMemoryCorpus::new();
    if let Some(seed_paths) = &corpus_config.initial_seed_paths {
        let loaded = corpus.load_initial_seeds(seed_paths)?;
        log::info!("Loaded {loaded} seed inputs");
    }
    if corpus.is_empty() {
        corpus.add(b"INIT".to_vec(), CorpusEntryMetadata::new("Default Initial Seed"))?;
    }

    if let Some(dir) = &corpus_config.output_dir {
        fs::create_dir_all(dir)
            .map_err(|e| anyhow::anyhow!("Failed to create output dir {:?}: {}", dir, e))?;
    }

    // Nothing here reports coverage, so the clock goes stale and splices kick in.
    let clock = CovTimestamp::new();
    let env = MangleEnv::new(&config.mutate, &dictionary)
        .with_corpus(&corpus)
        .with_clock(&clock);
    let mut mutator: Box<dyn Mutator<DynInput, ChaCha8Rng> + '_> = Box::new(Mangler::new(env));
    let mut rng = ChaCha8Rng::seed_from_u64(settings.seed);

    println!(
        "Mutating {} corpus items for {} iterations (seed {}, speed factor {})...",
        corpus.len(),
        settings.iterations,
        settings.seed,
        settings.speed_factor
    );
    let start_time = Instant::now();
    let mut report = RunReport {
        iterations: settings.iterations,
        rng_seed: settings.seed,
        speed_factor: settings.speed_factor,
        corpus_size: corpus.len(),
        dictionary_size: dictionary.len(),
        min_output_len: usize::MAX,
        ..RunReport::default()
    };
    let mut seen: HashSet<[u8; 16]> = HashSet::new();
    let progress_every = (settings.iterations / 10).max(1);

    for i in 0..settings.iterations {
        let base_id = match corpus.random_select(&mut rng) {
            Some((id, _)) => id,
            None => break,
        };
        let (base, _meta) = corpus.get(base_id).ok_or(CorpusError::InputNotFound(base_id))?;

        let mut input = DynInput::from_bytes(base.as_bytes(), max_input_size);
        mutator.mutate(&mut input, &mut rng, settings.speed_factor);
        let output = input.as_bytes();

        report.min_output_len = report.min_output_len.min(output.len());
        report.max_output_len = report.max_output_len.max(output.len());
        report.total_output_bytes += output.len() as u64;

        if seen.insert(md5::compute(output).0) {
            report.distinct_outputs += 1;
            if let Some(dir) = &corpus_config.output_dir {
                if write_output(dir, output)? {
                    report.written_outputs += 1;
                }
            }
        }

        if i > 0 && i % progress_every == 0 {
            log::info!(
                "Iter: {}/{}, distinct: {}, secs since coverage: {}",
                i,
                settings.iterations,
                report.distinct_outputs,
                clock.secs_since_last_cov()
            );
        }
    }
    if report.min_output_len == usize::MAX {
        report.min_output_len = 0;
    }
    report.elapsed_ms = start_time.elapsed().as_millis();

    println!("Mutation run finished in {} ms.", report.elapsed_ms);
    println!(
        "Distinct outputs: {}, written: {}, sizes: {}..={} bytes",
        report.distinct_outputs, report.written_outputs, report.min_output_len, report.max_output_len
    );

    if let Some(report_path) = &cli.report {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(report_path, json)
            .map_err(|e| anyhow::anyhow!("Failed to write report {:?}: {}", report_path, e))?;
        log::info!("Report written to {report_path:?}");
    }

    Ok(())
}
