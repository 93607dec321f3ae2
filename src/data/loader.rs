use std::fs::File;
use std::io::Seek;
use std::path::Path;
use std::sync::Arc;

use arrow::compute::concat_batches;
use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use log::{debug, info};

use super::model::Dataset;
use crate::error::{DatasetError, Result};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a comma-separated file with a header row.
///
/// Column types are inferred from every record: integer columns become
/// `Int64`, numeric ones `Float64`, everything else `Utf8`. Dates,
/// timestamps and booleans stay text so they are written back verbatim.
/// Empty cells are nulls.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let mut file = File::open(path).map_err(|e| DatasetError::input(path, e))?;

    let format = Format::default().with_header(true);
    let schema = infer_schema(&format, &mut file).map_err(|e| DatasetError::input(path, e))?;
    debug!("inferred schema for {}: {schema:?}", path.display());

    file.rewind().map_err(|e| DatasetError::input(path, e))?;

    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .build(file)
        .map_err(|e| DatasetError::input(path, e))?;

    let batches = reader
        .collect::<std::result::Result<Vec<_>, ArrowError>>()
        .map_err(|e| DatasetError::input(path, e))?;

    let dataset = if batches.is_empty() {
        Dataset::empty(schema)
    } else {
        let batch =
            concat_batches(&schema, &batches).map_err(|e| DatasetError::input(path, e))?;
        Dataset::new(batch)
    };
    debug!("columns: {:?}", dataset.column_names());

    info!(
        "loaded {} rows x {} columns from {}",
        dataset.len(),
        dataset.num_columns(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Schema inference
// ---------------------------------------------------------------------------

/// Infer the schema from the whole file.
///
/// Only `Int64` and `Float64` survive. Every other inferred type is widened
/// to `Utf8`: `Null` (columns that never hold a value, e.g. a header-only
/// file), `Boolean`, and the date, time and timestamp types, whose Arrow
/// formatting would not match the source text.
fn infer_schema(format: &Format, file: &mut File) -> std::result::Result<Arc<Schema>, ArrowError> {
    let (schema, _records) = format.infer_schema(file, None)?;

    if schema.fields().is_empty() {
        return Err(ArrowError::CsvError("missing header row".to_string()));
    }

    let fields: Vec<Field> = schema
        .fields()
        .iter()
        .map(|f| match f.data_type() {
            DataType::Int64 | DataType::Float64 => f.as_ref().clone(),
            _ => Field::new(f.name(), DataType::Utf8, true),
        })
        .collect();

    Ok(Arc::new(Schema::new(fields)))
}
