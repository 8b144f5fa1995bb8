use crate::input::Input;
use rand_core::RngCore;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Defines errors that can arise during corpus operations.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The requested input ID was not found within the corpus.
    #[error("Input ID {0} not found in corpus")]
    InputNotFound(usize),

    /// An I/O error occurred while reading seed inputs.
    /// Contains a string describing the underlying I/O error.
    #[error("Corpus I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CorpusError {
    fn from(err: std::io::Error) -> Self {
        CorpusError::Io(err.to_string())
    }
}

/// Metadata kept alongside every corpus entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntryMetadata {
    /// A human-readable string describing the origin of the entry,
    /// e.g. the seed file it was read from.
    pub source_description: String,
}

impl CorpusEntryMetadata {
    pub fn new(source_description: impl Into<String>) -> Self {
        Self {
            source_description: source_description.into(),
        }
    }
}

/// Defines the common interface for a collection of fuzzing inputs.
///
/// Besides serving base inputs to the driver, a `Corpus` is the source of "some
/// other input" for the splice operator. Selection only needs shared access, so
/// a corpus can be handed to many mutation passes at once.
///
/// # Type Parameters
/// * `I`: The type of input stored in the corpus, which must implement the [`Input`] trait.
pub trait Corpus<I: Input>: Send + Sync {
    /// Adds a new input to the corpus along with its metadata.
    ///
    /// # Returns
    /// The ID (index) assigned to the newly added input, or a `CorpusError`.
    fn add(&mut self, input: I, metadata: CorpusEntryMetadata) -> Result<usize, CorpusError>;

    /// Retrieves an input and its metadata by ID, or `None` if the ID is unknown.
    fn get(&self, id: usize) -> Option<(&I, &CorpusEntryMetadata)>;

    /// Selects an input uniformly at random.
    ///
    /// # Arguments
    /// * `rng`: A mutable reference to a random number generator implementing `RngCore`.
    ///
    /// # Returns
    /// The ID and a reference to the selected input, or `None` if the corpus is empty.
    fn random_select(&self, rng: &mut dyn RngCore) -> Option<(usize, &I)>;

    /// Returns the total number of inputs currently stored in the corpus.
    fn len(&self) -> usize;

    /// Returns `true` if the corpus contains no inputs.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Loads seed inputs from files or directories.
    ///
    /// A directory contributes the regular files directly inside it; subdirectories
    /// and dotfiles are skipped.
    ///
    /// # Returns
    /// The number of seeds loaded, or a `CorpusError` if a path cannot be read.
    fn load_initial_seeds(&mut self, seed_paths: &[PathBuf]) -> Result<usize, CorpusError>;
}

/// An in-memory implementation of the `Corpus` trait.
///
/// Inputs are kept in a `Vec` for the lifetime of the process. For
/// `load_initial_seeds` to function, `I` must implement `From<Vec<u8>>`.
#[derive(Debug)]
pub struct InMemoryCorpus<I: Input> {
    entries: Vec<(I, CorpusEntryMetadata)>,
    _marker: PhantomData<I>,
}

impl<I: Input> InMemoryCorpus<I> {
    /// Creates a new, empty `InMemoryCorpus`.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            _marker: PhantomData,
        }
    }
}

impl<I: Input> Default for InMemoryCorpus<I> {
    fn default() -> Self {
        Self::new()
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

impl<I: Input + From<Vec<u8>>> InMemoryCorpus<I> {
    fn add_seed_file(&mut self, path: &Path) -> Result<(), CorpusError> {
        let data_bytes = fs::read(path)
            .map_err(|e| CorpusError::Io(format!("Failed to read seed file {:?}: {}", path, e)))?;
        self.add(
            I::from(data_bytes),
            CorpusEntryMetadata::new(format!("Initial seed file: {:?}", path)),
        )?;
        Ok(())
    }
}

impl<I: Input + From<Vec<u8>>> Corpus<I> for InMemoryCorpus<I> {
    fn add(&mut self, input: I, metadata: CorpusEntryMetadata) -> Result<usize, CorpusError> {
        let id = self.entries.len();
        self.entries.push((input, metadata));
        Ok(id)
    }

    fn get(&self, id: usize) -> Option<(&I, &CorpusEntryMetadata)> {
        self.entries.get(id).map(|(input, meta)| (input, meta))
    }

    fn random_select(&self, rng: &mut dyn RngCore) -> Option<(usize, &I)> {
        if self.entries.is_empty() {
            return None;
        }
        let index = rng.next_u64() as usize % self.entries.len();
        self.entries.get(index).map(|(input, _)| (index, input))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn load_initial_seeds(&mut self, seed_paths: &[PathBuf]) -> Result<usize, CorpusError> {
        let mut loaded_count = 0;
        for path_buf in seed_paths {
            let path_ref = path_buf.as_path();
            if path_ref.is_file() {
                self.add_seed_file(path_ref)?;
                loaded_count += 1;
            } else if path_ref.is_dir() {
                let mut files = Vec::new();
                for entry_result in fs::read_dir(path_ref).map_err(|e| {
                    CorpusError::Io(format!(
                        "Failed to read seed directory {:?}: {}",
                        path_ref, e
                    ))
                })? {
                    let entry = entry_result.map_err(|e| {
                        CorpusError::Io(format!("Error reading entry in {:?}: {}", path_ref, e))
                    })?;
                    let file_path = entry.path();
                    if file_path.is_file() && !is_hidden(&file_path) {
                        files.push(file_path);
                    }
                }
                // Directory iteration order is platform dependent.
                files.sort();
                for file_path in files {
                    self.add_seed_file(&file_path)?;
                    loaded_count += 1;
                }
            } else {
                return Err(CorpusError::Io(format!(
                    "Seed path {:?} is neither a file nor a directory",
                    path_ref
                )));
            }
        }
        log::debug!("Loaded {} seed inputs", loaded_count);
        Ok(loaded_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn in_memory_corpus_add_get_len_is_empty() {
        let mut corpus: InMemoryCorpus<Vec<u8>> = InMemoryCorpus::new();
        assert!(corpus.is_empty());
        assert_eq!(corpus.len(), 0);
        let id1 = corpus
            .add(vec![1, 2, 3], CorpusEntryMetadata::new("first"))
            .unwrap();
        assert_eq!(id1, 0);
        let id2 = corpus
            .add(vec![4, 5], CorpusEntryMetadata::new("second"))
            .unwrap();
        assert_eq!(id2, 1);
        assert_eq!(corpus.len(), 2);

        match corpus.get(id1) {
            Some((input, meta)) => {
                assert_eq!(*input, vec![1, 2, 3]);
                assert_eq!(meta.source_description, "first");
            }
            None => panic!("Failed to get input1"),
        }
        assert!(corpus.get(99).is_none());
    }

    #[test]
    fn in_memory_corpus_random_select_behavior() {
        let mut corpus: InMemoryCorpus<Vec<u8>> = InMemoryCorpus::new();
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        assert!(corpus.random_select(&mut rng).is_none());

        for byte in [b'A', b'B', b'C'] {
            corpus
                .add(vec![byte], CorpusEntryMetadata::new("meta"))
                .unwrap();
        }

        let mut selected_ids_counts = HashMap::new();
        for _ in 0..100 {
            match corpus.random_select(&mut rng) {
                Some((id, input)) => {
                    assert!(id < corpus.len());
                    assert_eq!(input, &vec![b'A' + id as u8]);
                    *selected_ids_counts.entry(id).or_insert(0) += 1;
                }
                None => panic!("random_select failed on non-empty corpus"),
            }
        }
        assert_eq!(selected_ids_counts.len(), 3, "All items should be selected");
    }

    #[test]
    fn in_memory_corpus_load_initial_seeds_vec_u8() -> Result<(), CorpusError> {
        let mut corpus: InMemoryCorpus<Vec<u8>> = InMemoryCorpus::new();
        let temp_dir = tempdir().unwrap();
        let seed1_p = temp_dir.path().join("s1.bin");
        let seed2_p = temp_dir.path().join("s2.txt");
        fs::write(&seed1_p, [1, 2]).unwrap();
        fs::write(&seed2_p, [3, 4, 5]).unwrap();
        let seed_d = temp_dir.path().join("s_dir");
        fs::create_dir(&seed_d).unwrap();
        fs::write(seed_d.join("s3.dat"), [6]).unwrap();
        fs::write(seed_d.join(".hidden"), [7]).unwrap();
        fs::create_dir(seed_d.join("nested")).unwrap();

        let paths = vec![seed1_p.clone(), seed_d.clone(), seed2_p.clone()];
        let count = corpus.load_initial_seeds(&paths)?;
        assert_eq!(count, 3);
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.get(1).map(|(input, _)| input.clone()), Some(vec![6]));
        temp_dir.close().unwrap();
        Ok(())
    }

    #[test]
    fn in_memory_corpus_rejects_missing_seed_path() {
        let mut corpus: InMemoryCorpus<Vec<u8>> = InMemoryCorpus::new();
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("absent");
        assert!(matches!(
            corpus.load_initial_seeds(&[missing]),
            Err(CorpusError::Io(_))
        ));
    }
}
