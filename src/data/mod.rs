/// Data layer: core types, loading, aggregation and label placement.
///
/// Architecture:
/// ```text
///  student CSV (latin-1, ';', decimal ',')
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<RawRecord>
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  cap semesters, group by (semester, program) → Vec<AggregateRow>
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ annotate  │  rightmost labels for one semester, ordered by value
///   └──────────┘
/// ```

pub mod aggregate;
pub mod annotate;
pub mod error;
pub mod loader;
pub mod model;
