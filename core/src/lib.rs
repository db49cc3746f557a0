//! subdash-core: the data layer of a subscription analytics dashboard.
//!
//! Two halves make up the crate:
//!   - **Generation** (`dataset`, `customer`, `subscription`, `series`):
//!     a seeded, deterministic builder for the full in-memory dataset —
//!     customer population, derived subscriptions, and aggregate
//!     series. Built once per process start, read-only afterwards.
//!   - **Query** (`query`): pure filter/paginate/aggregate functions
//!     the presentation layer invokes on every filter-state change.
//!
//! Determinism is load-bearing: all randomness flows through the
//! seeded stream bank in `rng`, and all dates hang off an injected
//! anchor instant. Same seed + same anchor = byte-identical dataset.

pub mod config;
pub mod customer;
pub mod dataset;
pub mod error;
pub mod names;
pub mod query;
pub mod rng;
pub mod series;
pub mod subscription;
pub mod types;
