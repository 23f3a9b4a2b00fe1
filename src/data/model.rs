use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Number of positional fields in one row of flight data.
pub const FIELD_COUNT: usize = 9;

// ---------------------------------------------------------------------------
// RawRow – one line of the data file, split but not yet typed
// ---------------------------------------------------------------------------

/// A data line after whitespace removal and comma splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number in the source file.
    pub line: usize,
    pub fields: Vec<String>,
}

impl RawRow {
    /// Check the row has exactly [`FIELD_COUNT`] fields.
    pub fn check_width(&self) -> Result<(), RecordError> {
        if self.fields.len() == FIELD_COUNT {
            Ok(())
        } else {
            Err(RecordError::FieldCount {
                found: self.fields.len(),
            })
        }
    }

    /// Empty when the row is too short to have an origin.
    pub fn origin(&self) -> &str {
        self.field(1)
    }

    pub fn destination(&self) -> &str {
        self.field(2)
    }

    pub fn weekdays(&self) -> &str {
        self.field(3)
    }

    fn field(&self, i: usize) -> &str {
        self.fields.get(i).map_or("", String::as_str)
    }
}

// ---------------------------------------------------------------------------
// FlightRecord – one scheduled flight
// ---------------------------------------------------------------------------

/// A single scheduled flight (one row of the data file).
///
/// Fields are private; a record never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlightRecord {
    flight_code: String,
    origin_airport: String,
    destination_airport: String,
    /// Operating days as digits, `1` = Sunday … `7` = Saturday.
    weekdays: String,
    departure_time: i32,
    arrival_time: i32,
    airline: String,
    price: i32,
    flight_class: String,
}

impl FlightRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        flight_code: impl Into<String>,
        origin_airport: impl Into<String>,
        destination_airport: impl Into<String>,
        weekdays: impl Into<String>,
        departure_time: i32,
        arrival_time: i32,
        airline: impl Into<String>,
        price: i32,
        flight_class: impl Into<String>,
    ) -> Self {
        Self {
            flight_code: flight_code.into(),
            origin_airport: origin_airport.into(),
            destination_airport: destination_airport.into(),
            weekdays: weekdays.into(),
            departure_time,
            arrival_time,
            airline: airline.into(),
            price,
            flight_class: flight_class.into(),
        }
    }

    /// Build a record from the nine positional fields of a row.
    ///
    /// Fields 4, 5 and 7 must parse as `i32`.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, RecordError> {
        if fields.len() != FIELD_COUNT {
            return Err(RecordError::FieldCount {
                found: fields.len(),
            });
        }
        let text = |i: usize| fields[i].as_ref();

        Ok(Self::new(
            text(0),
            text(1),
            text(2),
            text(3),
            parse_int("departureTime", text(4))?,
            parse_int("arrivalTime", text(5))?,
            text(6),
            parse_int("price", text(7))?,
            text(8),
        ))
    }

    pub fn flight_code(&self) -> &str {
        &self.flight_code
    }

    pub fn origin_airport(&self) -> &str {
        &self.origin_airport
    }

    pub fn destination_airport(&self) -> &str {
        &self.destination_airport
    }

    pub fn weekdays(&self) -> &str {
        &self.weekdays
    }

    pub fn departure_time(&self) -> i32 {
        self.departure_time
    }

    pub fn arrival_time(&self) -> i32 {
        self.arrival_time
    }

    pub fn airline(&self) -> &str {
        &self.airline
    }

    pub fn price(&self) -> i32 {
        self.price
    }

    pub fn flight_class(&self) -> &str {
        &self.flight_class
    }

    /// Whether the flight operates on the given day digit.
    pub fn operates_on(&self, day: char) -> bool {
        self.weekdays.contains(day)
    }

    /// Whether `airport` is either end of the flight.
    pub fn serves(&self, airport: &str) -> bool {
        self.origin_airport == airport || self.destination_airport == airport
    }
}

fn parse_int(field: &'static str, value: &str) -> Result<i32, RecordError> {
    value.parse::<i32>().map_err(|_| RecordError::NotAnInteger {
        field,
        value: value.to_string(),
    })
}

impl fmt::Display for FlightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}→{} days={} dep={} arr={} {} {} {}",
            self.flight_code,
            self.origin_airport,
            self.destination_airport,
            self.weekdays,
            self.departure_time,
            self.arrival_time,
            self.airline,
            self.price,
            self.flight_class,
        )
    }
}
