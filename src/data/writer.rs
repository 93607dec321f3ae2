use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array};
use arrow::csv::WriterBuilder;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use log::info;

use super::model::Dataset;
use crate::error::{DatasetError, Result};

/// Write `dataset` as CSV, overwriting `path`.
///
/// The first column is the unnamed row index (`0..len`), followed by the
/// dataset's own columns. Nulls are written as empty fields.
pub fn save_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let indexed = with_index_column(dataset).map_err(|e| DatasetError::output(path, e))?;

    let file = File::create(path).map_err(|e| DatasetError::output(path, e))?;
    let mut writer = WriterBuilder::new()
        .with_header(true)
        .build(BufWriter::new(file));
    writer
        .write(&indexed)
        .map_err(|e| DatasetError::output(path, e))?;

    // Flush explicitly: a BufWriter swallows errors on drop.
    writer
        .into_inner()
        .flush()
        .map_err(|e| DatasetError::output(path, e))?;

    info!("wrote {} rows to {}", dataset.len(), path.display());
    Ok(())
}

/// Prepend the index as an `Int64` column with an empty name.
fn with_index_column(dataset: &Dataset) -> std::result::Result<RecordBatch, ArrowError> {
    let source = dataset.schema();

    let mut fields = Vec::with_capacity(source.fields().len() + 1);
    fields.push(Arc::new(Field::new("", DataType::Int64, false)));
    fields.extend(source.fields().iter().cloned());
    let schema = Arc::new(Schema::new(fields));

    let index = Int64Array::from_iter_values(dataset.index().map(|i| i as i64));
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(schema.fields().len());
    columns.push(Arc::new(index));
    columns.extend(dataset.batch().columns().iter().cloned());

    RecordBatch::try_new(schema, columns)
}
