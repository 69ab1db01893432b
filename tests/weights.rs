use chrono::NaiveDate;
use flightpath_core::{Criterion, FlightRecord, WeightPolicy};

fn record(stops: &[&str], duration_mins: u32, price: f64) -> FlightRecord {
    let mut nodes = vec!["DEL"];
    nodes.extend_from_slice(stops);
    nodes.push("BOM");
    FlightRecord {
        airline: "IndiGo".to_string(),
        source: "DEL".to_string(),
        destination: "BOM".to_string(),
        stops: stops.iter().map(|stop| stop.to_string()).collect(),
        dep_time: "06:10".to_string(),
        date: NaiveDate::from_ymd_opt(2019, 3, 1).unwrap(),
        duration_mins,
        price,
        total_stops: stops.len() as u32,
        route_text: nodes.join(" ? "),
    }
}

#[test]
fn test_duration_weight_is_per_segment_share() {
    let direct = record(&[], 120, 4000.0);
    let two_stops = record(&["BLR", "HYD"], 300, 4000.0);
    let records = vec![direct.clone(), two_stops.clone()];

    let policy = WeightPolicy::from_records(Criterion::Duration, &records);

    assert_eq!(policy.segment_weight(&direct), 120.0); // 1 segment
    assert_eq!(policy.segment_weight(&two_stops), 100.0); // 300 / 3 segments
}

#[test]
fn test_duration_share_uses_floor_division() {
    let two_stops = record(&["BLR", "HYD"], 400, 1000.0);
    let records = vec![two_stops.clone()];

    let policy = WeightPolicy::from_records(Criterion::Duration, &records);

    assert_eq!(policy.segment_weight(&two_stops), 133.0); // 400 / 3, floored
}

#[test]
fn test_price_weight_floors_the_share() {
    let two_stops = record(&["BLR", "HYD"], 300, 1000.0);
    let records = vec![two_stops.clone()];

    let policy = WeightPolicy::from_records(Criterion::Price, &records);

    assert_eq!(policy.segment_weight(&two_stops), 333.0); // 1000 / 3, floored
}

#[test]
fn test_blended_weight_sums_scaled_totals() {
    let cheap = record(&[], 60, 1000.0);
    let middle = record(&[], 120, 2000.0);
    let pricey = record(&[], 180, 3000.0);
    let records = vec![cheap.clone(), middle.clone(), pricey.clone()];

    let policy = WeightPolicy::from_records(Criterion::Blended, &records);

    assert_eq!(policy.segment_weight(&cheap), 0.0); // both minima
    assert_eq!(policy.segment_weight(&middle), 1.0); // 0.5 + 0.5
    assert_eq!(policy.segment_weight(&pricey), 2.0); // both maxima
}

#[test]
fn test_blended_weight_is_shared_by_every_segment() {
    let direct = record(&[], 60, 1000.0);
    let two_stops = record(&["BLR", "HYD"], 180, 3000.0);
    let records = vec![direct.clone(), two_stops.clone()];

    let policy = WeightPolicy::from_records(Criterion::Blended, &records);

    // The blended weight scales the record totals, not per-segment shares.
    assert_eq!(policy.segment_weight(&two_stops), 2.0);
}

#[test]
fn test_blended_weight_zero_range_maps_to_zero() {
    let first = record(&[], 90, 2500.0);
    let second = record(&["BLR"], 90, 2500.0);
    let records = vec![first.clone(), second.clone()];

    let policy = WeightPolicy::from_records(Criterion::Blended, &records);

    // All durations and prices equal, so both spans collapse.
    assert_eq!(policy.segment_weight(&first), 0.0);
    assert_eq!(policy.segment_weight(&second), 0.0);
}

#[test]
fn test_blended_weight_single_record_set() {
    let only = record(&[], 150, 5000.0);
    let records = vec![only.clone()];

    let policy = WeightPolicy::from_records(Criterion::Blended, &records);

    assert_eq!(policy.segment_weight(&only), 0.0);
}

#[test]
fn test_weights_are_never_negative() {
    let records = vec![
        record(&[], 60, 1000.0),
        record(&["BLR"], 150, 2500.0),
        record(&["BLR", "HYD"], 400, 9000.0),
    ];

    for criterion in [Criterion::Duration, Criterion::Price, Criterion::Blended] {
        let policy = WeightPolicy::from_records(criterion, &records);
        for record in &records {
            assert!(policy.segment_weight(record) >= 0.0);
        }
    }
}

#[test]
fn test_policy_reports_criterion() {
    let records = vec![record(&[], 60, 1000.0)];
    let policy = WeightPolicy::from_records(Criterion::Price, &records);

    assert_eq!(policy.criterion(), Criterion::Price);
}
