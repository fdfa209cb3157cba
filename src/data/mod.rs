/// Data layer: row types, CSV loading, and grouping.
///
/// Architecture:
/// ```text
///  results/*.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → Vec<Record>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model   │  AccuracyRecord, ScalingRecord, ValidationRecord, ...
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  group   │  split by schedule kind / group by p
///   └──────────┘
/// ```

pub mod group;
pub mod loader;
pub mod model;
