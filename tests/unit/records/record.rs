use super::*;

fn record() -> FlightRecord {
    FlightRecord {
        id: 1,
        carrier: "AA".to_string(),
        origin: "ATL".to_string(),
        destination: "DFW".to_string(),
        month: Month::Mar,
        month_index: 2,
        carrier_delay: 10.0,
        weather_delay: 3.0,
        nas_delay: 2.0,
        total_delay: 15.0,
        cancelled: false,
        distance: 732.0,
    }
}

#[test]
fn well_formed_record_validates() {
    assert!(record().validate().is_ok());
    assert_eq!(record().route_key(), "ATL-DFW");
}

#[test]
fn rejects_same_origin_and_destination() {
    let mut r = record();
    r.destination = "ATL".to_string();
    assert!(matches!(r.validate(), Err(DelayscopeError::Data(_))));
}

#[test]
fn rejects_inconsistent_month() {
    let mut r = record();
    r.month_index = 5;
    assert!(r.validate().is_err());
}

#[test]
fn total_delay_tolerates_rounding_only() {
    let mut r = record();
    r.total_delay = 16.0;
    assert!(r.validate().is_ok());
    r.total_delay = 20.0;
    assert!(r.validate().is_err());
}

#[test]
fn rejects_negative_delay_and_bad_distance() {
    let mut r = record();
    r.weather_delay = -1.0;
    r.total_delay = 11.0;
    assert!(r.validate().is_err());

    let mut r = record();
    r.distance = 0.0;
    assert!(r.validate().is_err());
}
