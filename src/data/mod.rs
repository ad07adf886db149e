/// Data layer: loading, normalization, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<RawRow>
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  prices, statuses, team sentinel → AuctionTable
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterSelection → visible indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  counts, sums, rankings, retention accounting
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   view    │  render(table, selection) → DashboardView
///   └──────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod roster;
pub mod view;
