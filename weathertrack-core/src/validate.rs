//! Schema validation for incoming weather-record payloads.
//!
//! The checks run in schema field order and stop at the first violation:
//! location.name -> lat -> lon -> startDate -> endDate -> temperatures.
//! Validation is pure; `now` is injected so the date rules stay testable.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::error::Error;
use crate::model::{
    Coordinates, DateRange, Location, NewWeatherRecord, RecordPayload, TemperatureReading,
};

pub const DEFAULT_DESCRIPTION: &str = "No description";

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const MAX_RANGE_DAYS: i64 = 7;

/// Validate a raw payload and produce the normalized record body.
///
/// # Errors
///
/// Returns `Error::Validation` naming the first violated rule.
pub fn validate_record(
    payload: &RecordPayload,
    now: DateTime<Utc>,
) -> Result<NewWeatherRecord, Error> {
    let location = validate_location(payload)?;
    let date_range = validate_date_range(payload, now)?;
    let temperatures = validate_temperatures(payload)?;

    Ok(NewWeatherRecord { location, date_range, temperatures })
}

fn fail(message: &str) -> Error {
    Error::Validation(message.to_string())
}

fn validate_location(payload: &RecordPayload) -> Result<Location, Error> {
    let location = payload.location.as_ref().ok_or_else(|| fail("Location is required"))?;

    let name = location
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| fail("Location name is required"))?;

    if name.chars().count() < NAME_MIN {
        return Err(fail("Location name must be at least 2 characters long"));
    }
    if name.chars().count() > NAME_MAX {
        return Err(fail("Location name cannot exceed 100 characters"));
    }

    let coordinates = location
        .coordinates
        .as_ref()
        .ok_or_else(|| fail("Location coordinates are required"))?;

    let lat = coordinates.lat.ok_or_else(|| fail("Latitude is required"))?;
    if !(-90.0..=90.0).contains(&lat) {
        return Err(fail("Latitude must be between -90 and 90"));
    }

    let lon = coordinates.lon.ok_or_else(|| fail("Longitude is required"))?;
    if !(-180.0..=180.0).contains(&lon) {
        return Err(fail("Longitude must be between -180 and 180"));
    }

    Ok(Location {
        name: name.to_string(),
        coordinates: Coordinates { lat, lon },
    })
}

fn validate_date_range(
    payload: &RecordPayload,
    now: DateTime<Utc>,
) -> Result<DateRange, Error> {
    let range = payload.date_range.as_ref().ok_or_else(|| fail("Date range is required"))?;

    let raw_start =
        range.start_date.as_deref().ok_or_else(|| fail("Start date is required"))?;
    let start_date =
        parse_date(raw_start).ok_or_else(|| fail("Start date is not a valid date"))?;
    if start_date > now {
        return Err(fail("Start date cannot be in the future"));
    }

    let raw_end = range.end_date.as_deref().ok_or_else(|| fail("End date is required"))?;
    let end_date = parse_date(raw_end).ok_or_else(|| fail("End date is not a valid date"))?;
    if end_date < start_date {
        return Err(fail("End date must be after start date"));
    }
    // The ceiling is deliberately anchored to the current time, not the
    // start date.
    if end_date > now + Duration::days(MAX_RANGE_DAYS) {
        return Err(fail("Date range cannot exceed 7 days"));
    }

    Ok(DateRange { start_date, end_date })
}

fn validate_temperatures(payload: &RecordPayload) -> Result<Vec<TemperatureReading>, Error> {
    let entries = payload
        .temperatures
        .as_ref()
        .ok_or_else(|| fail("Temperatures array is required"))?;

    if entries.is_empty() {
        return Err(fail("At least one temperature record is required"));
    }

    let mut readings = Vec::with_capacity(entries.len());
    for entry in entries {
        let raw_date = entry
            .date
            .as_deref()
            .ok_or_else(|| fail("Date is required for each temperature record"))?;
        let date =
            parse_date(raw_date).ok_or_else(|| fail("Temperature date is not a valid date"))?;

        let temperature = entry
            .temperature
            .ok_or_else(|| fail("Temperature is required for each record"))?;

        let description = entry
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION)
            .to_string();

        readings.push(TemperatureReading {
            date,
            temperature,
            description,
            humidity: entry.humidity,
            wind_speed: entry.wind_speed,
        });
    }

    Ok(readings)
}

/// Accept RFC 3339 timestamps or plain `YYYY-MM-DD` (midnight UTC).
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let date: NaiveDate = raw.parse().ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        CoordinatesPayload, DateRangePayload, LocationPayload, TemperaturePayload,
    };

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn valid_payload() -> RecordPayload {
        RecordPayload {
            location: Some(LocationPayload {
                name: Some("Nowhere".to_string()),
                coordinates: Some(CoordinatesPayload { lat: Some(10.0), lon: Some(20.0) }),
            }),
            date_range: Some(DateRangePayload {
                start_date: Some("2026-03-09".to_string()),
                end_date: Some("2026-03-10".to_string()),
            }),
            temperatures: Some(vec![TemperaturePayload {
                date: Some("2026-03-09".to_string()),
                temperature: Some(15.0),
                description: None,
                humidity: None,
                wind_speed: None,
            }]),
        }
    }

    fn message(result: Result<NewWeatherRecord, Error>) -> String {
        match result.unwrap_err() {
            Error::Validation(msg) => msg,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn valid_payload_normalizes() {
        let record = validate_record(&valid_payload(), now()).expect("payload should validate");

        assert_eq!(record.location.name, "Nowhere");
        assert_eq!(record.temperatures.len(), 1);
        assert_eq!(record.temperatures[0].description, DEFAULT_DESCRIPTION);
        assert_eq!(record.date_range.start_date, Utc.with_ymd_and_hms(2026, 3, 9, 0, 0, 0).unwrap());
    }

    #[test]
    fn name_is_trimmed() {
        let mut payload = valid_payload();
        payload.location.as_mut().unwrap().name = Some("  Kyiv  ".to_string());

        let record = validate_record(&payload, now()).expect("payload should validate");
        assert_eq!(record.location.name, "Kyiv");
    }

    #[test]
    fn missing_location_fails_first() {
        let mut payload = valid_payload();
        payload.location = None;
        // also break a later rule to prove ordering
        payload.temperatures = Some(vec![]);

        assert_eq!(message(validate_record(&payload, now())), "Location is required");
    }

    #[test]
    fn missing_name() {
        let mut payload = valid_payload();
        payload.location.as_mut().unwrap().name = None;

        assert_eq!(message(validate_record(&payload, now())), "Location name is required");
    }

    #[test]
    fn blank_name_counts_as_missing() {
        let mut payload = valid_payload();
        payload.location.as_mut().unwrap().name = Some("   ".to_string());

        assert_eq!(message(validate_record(&payload, now())), "Location name is required");
    }

    #[test]
    fn short_name() {
        let mut payload = valid_payload();
        payload.location.as_mut().unwrap().name = Some("A".to_string());

        assert_eq!(
            message(validate_record(&payload, now())),
            "Location name must be at least 2 characters long"
        );
    }

    #[test]
    fn long_name() {
        let mut payload = valid_payload();
        payload.location.as_mut().unwrap().name = Some("x".repeat(101));

        assert_eq!(
            message(validate_record(&payload, now())),
            "Location name cannot exceed 100 characters"
        );
    }

    #[test]
    fn latitude_bounds() {
        let mut payload = valid_payload();
        payload.location.as_mut().unwrap().coordinates.as_mut().unwrap().lat = Some(90.0);
        assert!(validate_record(&payload, now()).is_ok());

        payload.location.as_mut().unwrap().coordinates.as_mut().unwrap().lat = Some(90.1);
        assert_eq!(
            message(validate_record(&payload, now())),
            "Latitude must be between -90 and 90"
        );

        payload.location.as_mut().unwrap().coordinates.as_mut().unwrap().lat = Some(-90.1);
        assert_eq!(
            message(validate_record(&payload, now())),
            "Latitude must be between -90 and 90"
        );
    }

    #[test]
    fn longitude_bounds() {
        let mut payload = valid_payload();
        payload.location.as_mut().unwrap().coordinates.as_mut().unwrap().lon = Some(-180.5);

        assert_eq!(
            message(validate_record(&payload, now())),
            "Longitude must be between -180 and 180"
        );
    }

    #[test]
    fn missing_latitude_reported_before_longitude() {
        let mut payload = valid_payload();
        let coords = payload.location.as_mut().unwrap().coordinates.as_mut().unwrap();
        coords.lat = None;
        coords.lon = None;

        assert_eq!(message(validate_record(&payload, now())), "Latitude is required");
    }

    #[test]
    fn start_date_in_future() {
        let mut payload = valid_payload();
        payload.date_range.as_mut().unwrap().start_date = Some("2026-03-11".to_string());
        payload.date_range.as_mut().unwrap().end_date = Some("2026-03-12".to_string());

        assert_eq!(
            message(validate_record(&payload, now())),
            "Start date cannot be in the future"
        );
    }

    #[test]
    fn unparseable_start_date() {
        let mut payload = valid_payload();
        payload.date_range.as_mut().unwrap().start_date = Some("yesterday".to_string());

        assert_eq!(
            message(validate_record(&payload, now())),
            "Start date is not a valid date"
        );
    }

    #[test]
    fn end_before_start() {
        let mut payload = valid_payload();
        payload.date_range.as_mut().unwrap().start_date = Some("2026-03-09".to_string());
        payload.date_range.as_mut().unwrap().end_date = Some("2026-03-08".to_string());

        assert_eq!(
            message(validate_record(&payload, now())),
            "End date must be after start date"
        );
    }

    #[test]
    fn end_equal_to_start_is_fine() {
        let mut payload = valid_payload();
        payload.date_range.as_mut().unwrap().end_date = Some("2026-03-09".to_string());

        assert!(validate_record(&payload, now()).is_ok());
    }

    #[test]
    fn end_date_beyond_seven_day_window() {
        let mut payload = valid_payload();
        // ten days past the start date, well past now + 7 days
        payload.date_range.as_mut().unwrap().end_date = Some("2026-03-19".to_string());

        assert_eq!(
            message(validate_record(&payload, now())),
            "Date range cannot exceed 7 days"
        );
    }

    #[test]
    fn window_is_anchored_to_now_not_start() {
        // startDate long in the past, endDate inside now+7d: allowed.
        let mut payload = valid_payload();
        payload.date_range.as_mut().unwrap().start_date = Some("2025-01-01".to_string());
        payload.date_range.as_mut().unwrap().end_date = Some("2026-03-15".to_string());

        assert!(validate_record(&payload, now()).is_ok());
    }

    #[test]
    fn missing_temperatures() {
        let mut payload = valid_payload();
        payload.temperatures = None;

        assert_eq!(message(validate_record(&payload, now())), "Temperatures array is required");
    }

    #[test]
    fn empty_temperatures() {
        let mut payload = valid_payload();
        payload.temperatures = Some(vec![]);

        assert_eq!(
            message(validate_record(&payload, now())),
            "At least one temperature record is required"
        );
    }

    #[test]
    fn temperature_entry_missing_date() {
        let mut payload = valid_payload();
        payload.temperatures.as_mut().unwrap()[0].date = None;

        assert_eq!(
            message(validate_record(&payload, now())),
            "Date is required for each temperature record"
        );
    }

    #[test]
    fn temperature_entry_missing_value() {
        let mut payload = valid_payload();
        payload.temperatures.as_mut().unwrap()[0].temperature = None;

        assert_eq!(
            message(validate_record(&payload, now())),
            "Temperature is required for each record"
        );
    }

    #[test]
    fn blank_description_gets_default() {
        let mut payload = valid_payload();
        payload.temperatures.as_mut().unwrap()[0].description = Some("   ".to_string());

        let record = validate_record(&payload, now()).expect("payload should validate");
        assert_eq!(record.temperatures[0].description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn provided_description_is_kept() {
        let mut payload = valid_payload();
        payload.temperatures.as_mut().unwrap()[0].description = Some("light rain".to_string());

        let record = validate_record(&payload, now()).expect("payload should validate");
        assert_eq!(record.temperatures[0].description, "light rain");
    }

    #[test]
    fn rfc3339_dates_accepted() {
        let mut payload = valid_payload();
        payload.date_range.as_mut().unwrap().start_date =
            Some("2026-03-09T08:30:00Z".to_string());

        let record = validate_record(&payload, now()).expect("payload should validate");
        assert_eq!(
            record.date_range.start_date,
            Utc.with_ymd_and_hms(2026, 3, 9, 8, 30, 0).unwrap()
        );
    }
}
