use std::iter;
use std::num::NonZeroUsize;

use arrow::compute::concat_batches;
use log::info;

use super::model::Dataset;
use crate::error::{DatasetError, Result};

/// Repeat every row of `dataset` `factor` times, in order.
///
/// Row `c * len + i` of the result equals row `i` of the input. Schema and
/// values are untouched; the result carries a fresh `0..len * factor` index.
pub fn amplify(dataset: &Dataset, factor: NonZeroUsize) -> Result<Dataset> {
    let schema = dataset.schema();
    let copies = iter::repeat(dataset.batch()).take(factor.get());
    let batch = concat_batches(&schema, copies).map_err(DatasetError::Amplify)?;

    let amplified = Dataset::new(batch);
    info!(
        "amplified {} rows x{factor} -> {} rows",
        dataset.len(),
        amplified.len()
    );
    Ok(amplified)
}
