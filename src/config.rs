use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Source dataset, relative to the working directory.
pub const INPUT_PATH: &str = "abalone_dataset1_train.csv";

/// Destination for the amplified dataset, relative to the working directory.
pub const OUTPUT_PATH: &str = "abalone-100mb.csv";

/// How many sequential copies of the input rows end up in the output.
pub const REPLICATION_FACTOR: NonZeroUsize = match NonZeroUsize::new(700) {
    Some(n) => n,
    None => panic!("replication factor must be positive"),
};

/// Paths and factor for one run. The binary always runs with `Default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmplifyConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub factor: NonZeroUsize,
}

impl Default for AmplifyConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(INPUT_PATH),
            output: PathBuf::from(OUTPUT_PATH),
            factor: REPLICATION_FACTOR,
        }
    }
}
