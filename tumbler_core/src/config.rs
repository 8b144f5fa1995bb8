use crate::dictionary::Dictionary;
use crate::random::INPUT_MAX_SIZE_CEILING;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct MutateConfig {
    /// Coerce every written byte into printable ASCII (32..=126).
    #[serde(default)]
    pub printable_only: bool,
    /// Upper bound on operators applied per pass; 0 disables mutation.
    #[serde(default = "default_mutations_per_run")]
    pub mutations_per_run: u64,
    #[serde(default = "default_max_input_size")]
    pub max_input_size: usize,
    #[serde(default)]
    pub dictionary_file: Option<PathBuf>,
    #[serde(default)]
    pub dictionary_entries: Vec<String>,
}

pub fn default_mutations_per_run() -> u64 {
    5
}

pub fn default_max_input_size() -> usize {
    8 * 1024
}

impl Default for MutateConfig {
    fn default() -> Self {
        Self {
            printable_only: false,
            mutations_per_run: default_mutations_per_run(),
            max_input_size: default_max_input_size(),
            dictionary_file: None,
            dictionary_entries: Vec::new(),
        }
    }
}

impl MutateConfig {
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_input_size == 0 {
            anyhow::bail!("max-input-size must be at least 1");
        }
        if self.max_input_size > INPUT_MAX_SIZE_CEILING {
            anyhow::bail!(
                "max-input-size {} exceeds the hard limit of {} bytes",
                self.max_input_size,
                INPUT_MAX_SIZE_CEILING
            );
        }
        Ok(())
    }

    /// Builds the static dictionary from the dictionary file and inline entries.
    pub fn load_dictionary(&self) -> Result<Dictionary, anyhow::Error> {
        let mut dictionary = match &self.dictionary_file {
            Some(path) => Dictionary::load_from_file(path)?,
            None => Dictionary::new(),
        };
        dictionary.extend_from_config(&self.dictionary_entries)?;
        Ok(dictionary)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct FuzzerSettings {
    #[serde(default = "default_iterations")]
    pub iterations: u64,
    #[serde(default)]
    pub seed: u64,
    /// Executions per second scaled by the driver; picks the mutation-count band.
    #[serde(default)]
    pub speed_factor: i64,
}

pub fn default_iterations() -> u64 {
    1_000
}

impl Default for FuzzerSettings {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            seed: 0,
            speed_factor: 0,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct CorpusConfig {
    #[serde(default)]
    pub initial_seed_paths: Option<Vec<PathBuf>>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct TumblerConfig {
    #[serde(default)]
    pub mutate: MutateConfig,
    #[serde(default)]
    pub fuzzer: Option<FuzzerSettings>,
    #[serde(default)]
    pub corpus: Option<CorpusConfig>,
}

impl TumblerConfig {
    pub fn load_from_file(path: &PathBuf) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file at {:?}: {}", path, e))?;

        let config: TumblerConfig = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse TOML from config file {:?}: {}", path, e)
        })?;

        config.mutate.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        let config: TumblerConfig = toml::from_str("").unwrap();
        assert_eq!(config, TumblerConfig::default());
        assert_eq!(config.mutate.mutations_per_run, 5);
        assert_eq!(config.mutate.max_input_size, 8192);
        assert!(!config.mutate.printable_only);
    }

    #[test]
    fn load_from_file_reads_all_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[mutate]
printable-only = true
mutations-per-run = 0
max-input-size = 64
dictionary-entries = ["GET ", "\\x00\\x01"]

[fuzzer]
iterations = 10
seed = 7
speed-factor = 12

[corpus]
initial-seed-paths = ["seeds"]
output-dir = "out"
"#
        )
        .unwrap();

        let config = TumblerConfig::load_from_file(&file.path().to_path_buf()).unwrap();
        assert!(config.mutate.printable_only);
        assert_eq!(config.mutate.mutations_per_run, 0);
        assert_eq!(config.mutate.max_input_size, 64);
        let fuzzer = config.fuzzer.unwrap();
        assert_eq!((fuzzer.iterations, fuzzer.seed, fuzzer.speed_factor), (10, 7, 12));
        let corpus = config.corpus.unwrap();
        assert_eq!(corpus.output_dir, Some(PathBuf::from("out")));

        let dictionary = config.mutate.load_dictionary().unwrap();
        assert_eq!(dictionary.entries(), &[b"GET ".to_vec(), vec![0x00, 0x01]]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let parsed: Result<TumblerConfig, _> = toml::from_str("[mutate]\nmax-size = 3\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn validate_rejects_bad_sizes() {
        let zero = MutateConfig {
            max_input_size: 0,
            ..MutateConfig::default()
        };
        assert!(zero.validate().is_err());
        let huge = MutateConfig {
            max_input_size: INPUT_MAX_SIZE_CEILING + 1,
            ..MutateConfig::default()
        };
        assert!(huge.validate().is_err());
        assert!(MutateConfig::default().validate().is_ok());
    }
}
