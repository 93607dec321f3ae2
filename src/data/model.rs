use std::ops::Range;

use arrow::datatypes::SchemaRef;
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// An in-memory table: named, typed columns and ordered rows.
///
/// Rows are held in a single contiguous Arrow batch. The row index is
/// implicit: row `i` has index `i`, so every `Dataset` carries a fresh
/// 0-based contiguous index no matter how it was built.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    batch: RecordBatch,
}

impl Dataset {
    pub fn new(batch: RecordBatch) -> Self {
        Dataset { batch }
    }

    /// An empty table with the given columns.
    pub fn empty(schema: SchemaRef) -> Self {
        Dataset {
            batch: RecordBatch::new_empty(schema),
        }
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    pub fn schema(&self) -> SchemaRef {
        self.batch.schema()
    }

    /// Column names in file order.
    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.batch.num_rows()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.batch.num_rows() == 0
    }

    pub fn num_columns(&self) -> usize {
        self.batch.num_columns()
    }

    /// Row labels, always `0..len`.
    pub fn index(&self) -> Range<usize> {
        0..self.len()
    }

    /// Approximate in-memory footprint in bytes: Arrow buffers plus the
    /// owning struct itself.
    pub fn memory_size(&self) -> usize {
        self.batch.get_array_memory_size() + std::mem::size_of::<Self>()
    }

    /// Rows `offset..offset + len` as their own dataset.
    pub fn slice(&self, offset: usize, len: usize) -> Dataset {
        Dataset::new(self.batch.slice(offset, len))
    }

    /// Render the first `rows` rows as an ASCII table for debug logging.
    pub fn preview(&self, rows: usize) -> Result<String, ArrowError> {
        let head = self.slice(0, rows.min(self.len()));
        Ok(pretty_format_batches(&[head.batch])?.to_string())
    }
}
