//! Shared data structures for the application state
//!
//! These structs mirror the records returned by the EPIC API
//! and flow from the fetcher to the selector and the UI layer.

use chrono::NaiveDateTime;
use serde::Deserialize;

/// Kilometers to statute miles
pub const KM_TO_MILES: f64 = 0.621371;

/// Format of the `date` field in EPIC records
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Geographic centroid of the imaged disc
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Position of the DSCOVR spacecraft in the J2000 frame, in kilometers
/// from the Earth's center
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Euclidean norm of the position vector (km)
    pub fn distance_km(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Distance from Earth in miles, unrounded
    pub fn distance_miles(&self) -> f64 {
        self.distance_km() * KM_TO_MILES
    }

    /// Distance rounded to the nearest mile, as displayed and as used
    /// for the ban list.
    ///
    /// Non-finite components are not rejected: they come out as `"NaN"`
    /// or `"inf"` and simply never match a sane label.
    pub fn distance_label(&self) -> String {
        format!("{}", self.distance_miles().round())
    }
}

/// A single natural-color image as described by the EPIC API
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ImageRecord {
    /// Unique EPIC identifier (e.g., "20151031003633")
    pub identifier: String,
    /// Capture time, `YYYY-MM-DD HH:MM:SS`
    pub date: String,
    pub caption: String,
    /// Filename stem in the archive (e.g., "epic_1b_20151031003633")
    pub image: String,
    pub centroid_coordinates: Coordinates,
    pub dscovr_j2000_position: Position,
}

impl ImageRecord {
    /// Distance label of this record (see [`Position::distance_label`])
    pub fn distance_label(&self) -> String {
        self.dscovr_j2000_position.distance_label()
    }

    /// Parsed capture time, if the `date` field is well formed
    pub fn captured_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_label_on_axis() {
        let position = Position { x: 1000.0, y: 0.0, z: 0.0 };
        assert_eq!(position.distance_label(), "621");
    }

    #[test]
    fn test_distance_label_uses_full_norm() {
        // 3-4-5 triangle scaled: norm is 5000 km
        let position = Position { x: 3000.0, y: -4000.0, z: 0.0 };
        assert_eq!(position.distance_km(), 5000.0);
        assert_eq!(position.distance_label(), "3107");
    }

    #[test]
    fn test_distance_label_typical_dscovr() {
        let position = Position {
            x: -1_283_061.502_462,
            y: -669_893.366_213,
            z: -130_240.817_468,
        };
        let expected = ((position.x.powi(2) + position.y.powi(2) + position.z.powi(2)).sqrt()
            * KM_TO_MILES)
            .round();
        assert_eq!(position.distance_label(), format!("{}", expected));
        assert!(!position.distance_label().contains('.'));
    }

    #[test]
    fn test_distance_label_nan_passes_through() {
        let position = Position { x: f64::NAN, y: 0.0, z: 0.0 };
        assert_eq!(position.distance_label(), "NaN");
    }

    #[test]
    fn test_deserialize_api_record() {
        let json = r#"{
            "identifier": "20151031003633",
            "caption": "This image was taken by NASA's EPIC camera onboard the NOAA DSCOVR spacecraft",
            "image": "epic_1b_20151031003633",
            "version": "01",
            "centroid_coordinates": { "lat": -9.59, "lon": 146.51 },
            "dscovr_j2000_position": { "x": -1283061.50, "y": -669893.37, "z": -130240.82 },
            "attitude_quaternions": { "q0": -0.37, "q1": 0.1, "q2": 0.03, "q3": 0.92 },
            "date": "2015-10-31 00:36:33"
        }"#;

        let record: ImageRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.identifier, "20151031003633");
        assert_eq!(record.image, "epic_1b_20151031003633");
        assert_eq!(record.centroid_coordinates.lat, -9.59);
        assert_eq!(record.dscovr_j2000_position.y, -669893.37);
    }

    #[test]
    fn test_captured_at() {
        let record = fixtures::record_at_miles("a", 100.0);
        let captured = record.captured_at().unwrap();
        assert_eq!(captured.format("%Y/%m/%d").to_string(), "2015/10/31");

        let mut broken = record.clone();
        broken.date = "yesterday".to_string();
        assert!(broken.captured_at().is_none());
    }

    #[test]
    fn test_fixture_distance() {
        assert_eq!(fixtures::record_at_miles("a", 100.0).distance_label(), "100");
        assert_eq!(fixtures::record_at_miles("b", 300.0).distance_label(), "300");
    }
}
