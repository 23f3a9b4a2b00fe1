//! Look up scheduled flights in a flat CSV file by airport and date.
//!
//! Each line of the data file holds nine comma-separated fields:
//!
//! ```text
//! flightCode,originAirport,destinationAirport,weekdays,departureTime,arrivalTime,airline,price,flightClass
//! ```
//!
//! The `weekdays` field lists operating days as digits, `1` = Sunday through
//! `7` = Saturday. A flight matches a query when the airport is its origin or
//! destination and its weekdays contain the digit of the requested date.
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use flight_search::{FlightLog, FlightSearch, SearchConfig};
//!
//! let log = FlightLog::new();
//! let search = FlightSearch::new(SearchConfig::default()).with_log(log.clone());
//! let date = NaiveDate::from_ymd_opt(2018, 3, 14).unwrap();
//! for flight in search.search_flights("LGW", date)?.iter() {
//!     println!("{flight}");
//! }
//! assert_eq!(log.len(), search.accumulated_flights().len());
//! # Ok::<(), flight_search::SearchError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod search;
pub mod state;

pub use config::{MalformedPolicy, SearchConfig, DEFAULT_FLIGHT_DATA_FILE};
pub use data::filter::{day_of_week, day_of_week_at};
pub use data::loader::LineFormat;
pub use data::model::FlightRecord;
pub use error::{RecordError, Result, SearchError};
pub use search::{FlightSearch, SearchOutcome, SkippedLine};
pub use state::FlightLog;
