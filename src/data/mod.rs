//! Data layer: row loading, record model, and matching.
//!
//! Architecture:
//! ```text
//!   flightData.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  strip + split lines → RawRow
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  airport / weekday predicate
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ FlightRecord  │  typed, immutable
//!   └──────────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
