//! End-to-end searches over real data files.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use flight_search::{
    day_of_week, FlightLog, FlightSearch, LineFormat, MalformedPolicy, RecordError, SearchConfig,
    SearchError,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/flightData.csv")
}

fn fixture_search() -> FlightSearch {
    FlightSearch::new(SearchConfig::default().with_data_path(fixture()))
}

fn data_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Sunday 2018-03-11 through Saturday 2018-03-17.
fn one_week() -> impl Iterator<Item = NaiveDate> {
    (11..=17).map(|d| date(2018, 3, d))
}

fn codes(flights: &[flight_search::FlightRecord]) -> Vec<&str> {
    flights.iter().map(|f| f.flight_code()).collect()
}

#[test]
fn wednesday_at_gatwick_in_file_order() -> anyhow::Result<()> {
    init_logging();
    let outcome = fixture_search().search_flights("LGW", date(2018, 3, 14))?;
    assert_eq!(codes(&outcome), ["BA123", "EZY8123", "VS27", "TOM512"]);
    Ok(())
}

#[test]
fn thursday_at_gatwick() -> anyhow::Result<()> {
    let outcome = fixture_search().search_flights("LGW", date(2018, 3, 15))?;
    assert_eq!(codes(&outcome), ["BA123", "BA2490"]);
    Ok(())
}

#[test]
fn fixture_whitespace_is_stripped() -> anyhow::Result<()> {
    let outcome = fixture_search().search_flights("JFK", date(2018, 3, 12))?;
    let first = &outcome[0];
    assert_eq!(first.flight_code(), "BA123");
    assert_eq!(first.origin_airport(), "LGW");
    assert_eq!(first.departure_time(), 900);
    assert_eq!(first.flight_class(), "Economy");
    Ok(())
}

#[test]
fn every_result_serves_airport_on_requested_day() -> anyhow::Result<()> {
    let search = fixture_search();
    for airport in ["LGW", "JFK", "STN", "DUB", "MAN", "FRA", "LHR"] {
        for day in one_week() {
            let digit = day_of_week(day);
            for flight in search.search_flights(airport, day)?.iter() {
                assert!(flight.serves(airport), "{flight} does not serve {airport}");
                assert!(flight.operates_on(digit), "{flight} not on day {digit}");
            }
        }
    }
    Ok(())
}

#[test]
fn unknown_airport_is_empty_every_day() -> anyhow::Result<()> {
    let search = fixture_search();
    for day in one_week() {
        assert!(search.search_flights("ZZZ", day)?.is_empty());
    }
    Ok(())
}

#[test]
fn empty_weekdays_never_match() -> anyhow::Result<()> {
    let search = fixture_search();
    for day in one_week() {
        assert!(search.search_flights("FRA", day)?.is_empty());
    }
    Ok(())
}

#[test]
fn single_line_wednesday_scenario() -> anyhow::Result<()> {
    let file = data_file("BA123,LGW,JFK,1234567,0900,1700,BA,450,Economy\n");
    let search = FlightSearch::new(SearchConfig::default().with_data_path(file.path()));

    let outcome = search.search_flights("LGW", date(2018, 3, 14))?;
    assert_eq!(day_of_week(date(2018, 3, 14)), '4');
    assert_eq!(outcome.len(), 1);
    assert_eq!(outcome[0].flight_code(), "BA123");
    Ok(())
}

#[test]
fn missing_data_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let log = FlightLog::new();
    let search = FlightSearch::new(
        SearchConfig::default().with_data_path(dir.path().join("flightData.csv")),
    )
    .with_log(log.clone());

    let err = search.search_flights("LGW", date(2018, 3, 14)).unwrap_err();
    assert!(matches!(err, SearchError::DataSourceNotFound { .. }));
    assert!(log.is_empty());
}

#[test]
fn repeated_search_is_identical_but_log_grows() -> anyhow::Result<()> {
    let log = FlightLog::new();
    let search = fixture_search().with_log(log.clone());
    let wednesday = date(2018, 3, 14);

    let first = search.search_flights("LGW", wednesday)?;
    let second = search.search_flights("LGW", wednesday)?;
    assert_eq!(first, second);
    assert_eq!(log.len(), 8);
    assert_eq!(search.accumulated_flights(), log.snapshot());
    Ok(())
}

#[test]
fn searches_sharing_a_log_accumulate_together() -> anyhow::Result<()> {
    let log = FlightLog::new();
    let config = SearchConfig::default().with_data_path(fixture());

    let gatwick = FlightSearch::with_query(config.clone(), log.clone(), "LGW", date(2018, 3, 14))?;
    assert_eq!(log.len(), 4);

    FlightSearch::with_query(config, log.clone(), "STN", date(2018, 3, 14))?;
    let all = gatwick.accumulated_flights();
    assert_eq!(codes(&all), ["BA123", "EZY8123", "VS27", "TOM512", "FR2201"]);
    Ok(())
}

#[test]
fn abort_policy_discards_partial_matches() {
    let file = data_file(
        "BA123,LGW,JFK,1234567,0900,1700,BA,450,Economy\n\
         BA999,LGW,JFK,1234567,0900,1700,BA,cheap,Economy\n\
         VS27,JFK,LGW,1234567,1830,0640,Virgin,520,Premium\n",
    );
    let log = FlightLog::new();
    let search = FlightSearch::new(SearchConfig::default().with_data_path(file.path()))
        .with_log(log.clone());

    let err = search.search_flights("LGW", date(2018, 3, 14)).unwrap_err();
    match err {
        SearchError::MalformedRecord { line, reason } => {
            assert_eq!(line, 2);
            assert_eq!(
                reason,
                RecordError::NotAnInteger {
                    field: "price",
                    value: "cheap".into()
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(log.is_empty());
}

#[test]
fn skip_policy_reports_and_continues() -> anyhow::Result<()> {
    init_logging();
    let file = data_file(
        "BA123,LGW,JFK,1234567,0900,1700,BA,450,Economy\n\
         BA999,LGW,JFK,1234567,0900,1700,BA,cheap,Economy\n\
         BROKEN,LGW\n\
         VS27,JFK,LGW,1234567,1830,0640,Virgin,520,Premium\n",
    );
    let log = FlightLog::new();
    let search = FlightSearch::new(
        SearchConfig::default()
            .with_data_path(file.path())
            .with_malformed_policy(MalformedPolicy::Skip),
    )
    .with_log(log.clone());

    let outcome = search.search_flights("LGW", date(2018, 3, 14))?;
    assert_eq!(codes(&outcome), ["BA123", "VS27"]);
    let skipped: Vec<usize> = outcome.skipped().iter().map(|s| s.line).collect();
    assert_eq!(skipped, [2, 3]);
    assert_eq!(
        outcome.skipped()[1].reason,
        RecordError::FieldCount { found: 2 }
    );
    assert_eq!(log.len(), 2);
    Ok(())
}

#[test]
fn quoted_format_handles_embedded_commas() -> anyhow::Result<()> {
    let file = data_file(
        "BA123,LGW,JFK,1234567,0900,1700,\"British Airways, plc\",450,Economy\n",
    );

    let plain = FlightSearch::new(SearchConfig::default().with_data_path(file.path()));
    assert!(matches!(
        plain.search_flights("LGW", date(2018, 3, 14)),
        Err(SearchError::MalformedRecord { .. })
    ));

    let quoted = FlightSearch::new(
        SearchConfig::default()
            .with_data_path(file.path())
            .with_format(LineFormat::Quoted),
    );
    let outcome = quoted.search_flights("LGW", date(2018, 3, 14))?;
    assert_eq!(outcome[0].airline(), "BritishAirways,plc");
    assert_eq!(outcome[0].price(), 450);
    Ok(())
}

#[test]
fn config_file_drives_search() -> anyhow::Result<()> {
    let config_json = serde_json::json!({
        "data_path": fixture(),
        "on_malformed": "skip",
    });
    let config_file = data_file(&config_json.to_string());

    let config = SearchConfig::from_json_file(config_file.path())?;
    assert_eq!(config.format, LineFormat::Plain);

    let outcome = FlightSearch::new(config).search_flights("MAN", date(2018, 3, 14))?;
    assert_eq!(codes(&outcome), ["TOM512"]);
    Ok(())
}

#[test]
fn results_serialize_to_json() -> anyhow::Result<()> {
    let outcome = fixture_search().search_flights("MAN", date(2018, 3, 14))?;
    let json = serde_json::to_value(outcome.flights())?;
    assert_eq!(json[0]["flight_code"], "TOM512");
    assert_eq!(json[0]["price"], 95);
    Ok(())
}
