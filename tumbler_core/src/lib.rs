pub mod config;
pub mod corpus;
pub mod dictionary;
pub mod feedback;
pub mod geometry;
pub mod input;
pub mod mutator;
pub mod ops;
pub mod random;
pub mod tables;
pub mod timing;

pub use config::{MutateConfig, TumblerConfig};
pub use corpus::{Corpus, CorpusEntryMetadata, CorpusError, InMemoryCorpus};
pub use dictionary::{Dictionary, DictionaryError};
pub use feedback::{CmpFeedbackMap, FeedbackDictionary};
pub use geometry::MangleRun;
pub use input::{DynInput, Input, MutableInput};
pub use mutator::{MangleEnv, Mangler, Mutator};
pub use ops::MangleOp;
pub use timing::{CovTimestamp, CoverageClock};
