/// Data layer: the in-memory table, loading, replication and saving.
///
/// Architecture:
/// ```text
///       .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  infer types, parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  one RecordBatch, implicit 0..n index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ amplify  │  repeat rows × factor → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer  │  index column + header → .csv
///   └──────────┘
/// ```

pub mod amplify;
pub mod loader;
pub mod model;
pub mod writer;
