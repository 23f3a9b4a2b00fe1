//! Airport + weekday search over a flight data file.

use std::ops::Deref;

use chrono::NaiveDate;

use crate::config::{MalformedPolicy, SearchConfig};
use crate::data::filter::Query;
use crate::data::loader::open_rows;
use crate::data::model::FlightRecord;
use crate::error::{RecordError, Result, SearchError};
use crate::state::FlightLog;

/// A row left out of a search under [`MalformedPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub reason: RecordError,
}

/// Result of one search, owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    flights: Vec<FlightRecord>,
    skipped: Vec<SkippedLine>,
}

impl SearchOutcome {
    /// Matching flights in file order.
    pub fn flights(&self) -> &[FlightRecord] {
        &self.flights
    }

    /// Rows dropped under the skip policy. Always empty when aborting.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    pub fn into_flights(self) -> Vec<FlightRecord> {
        self.flights
    }
}

impl Deref for SearchOutcome {
    type Target = [FlightRecord];

    fn deref(&self) -> &Self::Target {
        &self.flights
    }
}

/// Searches one flight data file by airport and date.
#[derive(Debug, Clone, Default)]
pub struct FlightSearch {
    config: SearchConfig,
    log: Option<FlightLog>,
}

impl FlightSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config, log: None }
    }

    /// Attach a log that every successful search appends its matches to.
    pub fn with_log(mut self, log: FlightLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Build a search attached to `log` and immediately run it once for
    /// `airport` on `date`, so the matches are in the log on return.
    pub fn with_query(
        config: SearchConfig,
        log: FlightLog,
        airport: &str,
        date: NaiveDate,
    ) -> Result<Self> {
        let search = Self::new(config).with_log(log);
        search.search_flights(airport, date)?;
        Ok(search)
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Return every flight that departs from or arrives at `airport` and
    /// operates on the weekday of `date`, in file order.
    ///
    /// The whole file is scanned. I/O failures always end the search; bad
    /// rows follow the configured [`MalformedPolicy`]. The attached log, if
    /// any, is only written once the scan has completed.
    pub fn search_flights(&self, airport: &str, date: NaiveDate) -> Result<SearchOutcome> {
        let query = Query::new(airport, date);
        let mut outcome = SearchOutcome::default();

        for row in open_rows(&self.config.data_path, self.config.format)? {
            let row = row?;

            if let Err(reason) = row.check_width() {
                self.reject(&mut outcome, row.line, reason)?;
                continue;
            }
            if !query.matches(&row) {
                continue;
            }
            match FlightRecord::from_fields(&row.fields) {
                Ok(flight) => outcome.flights.push(flight),
                Err(reason) => self.reject(&mut outcome, row.line, reason)?,
            }
        }

        log::info!(
            "Found {} flight(s) for {} on day {} in {}",
            outcome.flights.len(),
            airport,
            query.day,
            self.config.data_path.display()
        );
        if let Some(log) = &self.log {
            log.append(&outcome.flights);
        }
        Ok(outcome)
    }

    /// Every flight logged so far by searches sharing this search's log.
    /// Empty when no log is attached.
    pub fn accumulated_flights(&self) -> Vec<FlightRecord> {
        self.log.as_ref().map(FlightLog::snapshot).unwrap_or_default()
    }

    fn reject(&self, outcome: &mut SearchOutcome, line: usize, reason: RecordError) -> Result<()> {
        match self.config.on_malformed {
            MalformedPolicy::Abort => Err(SearchError::MalformedRecord { line, reason }),
            MalformedPolicy::Skip => {
                log::warn!("Skipping malformed line {line}: {reason}");
                outcome.skipped.push(SkippedLine { line, reason });
                Ok(())
            }
        }
    }
}
