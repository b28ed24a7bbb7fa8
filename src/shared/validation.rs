use std::ops::RangeInclusive;

use serde_json::Value;

/// Axis-aligned latitude/longitude rectangle used as an approximate region test
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub latitude: RangeInclusive<f64>,
    pub longitude: RangeInclusive<f64>,
}

impl BoundingBox {
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        // RangeInclusive::contains is false for NaN
        self.latitude.contains(&latitude) && self.longitude.contains(&longitude)
    }
}

/// Rough extent of the Philippines
pub const PHILIPPINES: BoundingBox = BoundingBox {
    latitude: 4.5..=21.5,
    longitude: 116.0..=127.0,
};

/// Convert a JSON value to a coordinate component.
///
/// Accepts numbers and numeric strings; everything else is not a coordinate.
pub fn coordinate_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Parse both components and check them against `region`.
///
/// Returns the numeric coordinate when accepted. Unconvertible input is
/// treated as out-of-region rather than as an error.
pub fn coordinate_within(
    region: &BoundingBox,
    latitude: &Value,
    longitude: &Value,
) -> Option<(f64, f64)> {
    let lat = coordinate_value(latitude)?;
    let lon = coordinate_value(longitude)?;
    region.contains(lat, lon).then_some((lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;
    use serde_json::json;

    fn is_within_philippines(latitude: &Value, longitude: &Value) -> bool {
        coordinate_within(&PHILIPPINES, latitude, longitude).is_some()
    }

    #[test]
    fn test_manila_is_inside() {
        assert!(is_within_philippines(&json!(14.5995), &json!(120.9842)));
    }

    #[test]
    fn test_new_york_is_outside() {
        assert!(!is_within_philippines(&json!(40.0), &json!(-74.0)));
    }

    #[test]
    fn test_box_edges_are_inclusive() {
        assert!(is_within_philippines(&json!(4.5), &json!(116.0)));
        assert!(is_within_philippines(&json!(21.5), &json!(127.0)));
        assert!(!is_within_philippines(&json!(4.49), &json!(120.0)));
        assert!(!is_within_philippines(&json!(21.51), &json!(120.0)));
        assert!(!is_within_philippines(&json!(14.0), &json!(115.99)));
        assert!(!is_within_philippines(&json!(14.0), &json!(127.01)));
    }

    #[test]
    fn test_random_points_inside_box() {
        for _ in 0..200 {
            let lat: f64 = (4.5..21.5).fake();
            let lon: f64 = (116.0..127.0).fake();
            assert!(is_within_philippines(&json!(lat), &json!(lon)));
        }
    }

    #[test]
    fn test_random_points_outside_latitude() {
        for _ in 0..200 {
            let lat: f64 = (21.6..90.0).fake();
            let lon: f64 = (116.0..127.0).fake();
            assert!(!is_within_philippines(&json!(lat), &json!(lon)));
            assert!(!is_within_philippines(&json!(-lat), &json!(lon)));
        }
    }

    #[test]
    fn test_numeric_strings_are_converted() {
        assert!(is_within_philippines(&json!("14.5995"), &json!(" 120.9842 ")));
        assert_eq!(coordinate_value(&json!("10")), Some(10.0));
    }

    #[test]
    fn test_non_numeric_input_is_rejected() {
        assert!(!is_within_philippines(&json!("manila"), &json!(120.9842)));
        assert!(!is_within_philippines(&json!(14.5995), &Value::Null));
        assert!(!is_within_philippines(&json!(true), &json!(120.0)));
        assert!(!is_within_philippines(&json!([14.0]), &json!({"lon": 120.0})));
        assert!(!is_within_philippines(&json!("NaN"), &json!(120.0)));
    }

    #[test]
    fn test_coordinate_within_returns_parsed_pair() {
        assert_eq!(
            coordinate_within(&PHILIPPINES, &json!("14.5"), &json!(121)),
            Some((14.5, 121.0))
        );
        assert_eq!(coordinate_within(&PHILIPPINES, &json!(0), &json!(0)), None);
    }
}
