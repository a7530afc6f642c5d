//! Input validation shared by the API handlers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("latitude {0} out of range [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} out of range [-180, 180]")]
    Longitude(f64),
}

/// Check that a point lies within valid geographic bounds.
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), CoordinateError> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(CoordinateError::Latitude(lat));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(CoordinateError::Longitude(lon));
    }
    Ok(())
}

/// Resolve the timestamp for a telemetry point: the client-supplied epoch
/// milliseconds when present and representable. `None` leaves the choice to
/// the database, which stamps the row with the same clock as `czas_startu`.
pub fn telemetry_timestamp(czas_ms: Option<i64>) -> Option<NaiveDateTime> {
    czas_ms
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.naive_utc())
}

/// Parse an optional ISO date string; blank strings count as absent.
pub fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, chrono::ParseError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn accepts_coordinates_on_the_boundary() {
        assert_eq!(validate_coordinates(90.0, 180.0), Ok(()));
        assert_eq!(validate_coordinates(-90.0, -180.0), Ok(()));
        assert_eq!(validate_coordinates(52.2297, 21.0122), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        assert_eq!(
            validate_coordinates(90.0001, 0.0),
            Err(CoordinateError::Latitude(90.0001))
        );
        assert_eq!(
            validate_coordinates(-123.0, 0.0),
            Err(CoordinateError::Latitude(-123.0))
        );
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        assert_eq!(
            validate_coordinates(0.0, 180.5),
            Err(CoordinateError::Longitude(180.5))
        );
    }

    #[test]
    fn telemetry_timestamp_uses_client_millis_when_present() {
        assert_eq!(
            telemetry_timestamp(Some(1_700_000_000_000)),
            Some(
                DateTime::from_timestamp_millis(1_700_000_000_000)
                    .unwrap()
                    .naive_utc()
            )
        );
    }

    #[test]
    fn telemetry_timestamp_defers_to_database_when_absent_or_unrepresentable() {
        assert_eq!(telemetry_timestamp(None), None);
        // i64::MAX millis is outside chrono's representable range
        assert_eq!(telemetry_timestamp(Some(i64::MAX)), None);
    }

    #[test]
    fn parses_iso_dates_and_treats_blank_as_absent() {
        assert_eq!(
            parse_optional_date(Some("1990-05-01")).unwrap(),
            Some(NaiveDate::from_ymd_opt(1990, 5, 1).unwrap())
        );
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("   ")).unwrap(), None);
        assert!(parse_optional_date(Some("01.05.1990")).is_err());
    }
}
