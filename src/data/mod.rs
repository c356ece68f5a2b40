/// Data layer: core types, loading, and queries.
///
/// Architecture:
/// ```text
///  cohort_data.txt  (First|Last|House|Advisor|Cohort)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Roster
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Roster   │  Vec<Record> in file order
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  houses, cohorts, buckets, lookups
///   └──────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod query;
