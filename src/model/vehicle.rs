//! Vehicle record and support classification.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Bus name to DBC file mapping. Values may be null in upstream data.
pub type BusLookup = IndexMap<String, Option<String>>;

/// Support level of a vehicle.
///
/// Unknown strings are preserved in [`SupportType::Other`] so that a newer
/// dataset with a category this build doesn't know still loads and renders
/// with the default style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SupportType {
    Upstream,
    UnderReview,
    Community,
    DashcamMode,
    NotCompatible,
    /// Missing or unrecognized category
    #[default]
    Unknown,
    Other(String),
}

impl SupportType {
    /// Known support levels in display order.
    pub const ALL: [Self; 5] = [
        Self::Upstream,
        Self::UnderReview,
        Self::Community,
        Self::DashcamMode,
        Self::NotCompatible,
    ];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Upstream => "Upstream",
            Self::UnderReview => "Under review",
            Self::Community => "Community",
            Self::DashcamMode => "Dashcam mode",
            Self::NotCompatible => "Not compatible",
            Self::Unknown => "",
            Self::Other(s) => s,
        }
    }

    /// Parse a support level label. Matching is exact, like the source data.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "Upstream" => Self::Upstream,
            "Under review" => Self::UnderReview,
            "Community" => Self::Community,
            "Dashcam mode" => Self::DashcamMode,
            "Not compatible" => Self::NotCompatible,
            "" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether this is one of the five known categories.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown | Self::Other(_))
    }
}

impl fmt::Display for SupportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SupportType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SupportType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map_or(Self::Unknown, |s| Self::parse(&s)))
    }
}

/// A published longitudinal maneuver report for a platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongitudinalReport {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
}

/// One item of required hardware.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub name: String,
    /// connector, accessory, device, ...
    #[serde(default, rename = "type")]
    pub part_type: String,
}

impl Part {
    pub fn included_with_harness(&self) -> bool {
        matches!(self.part_type.as_str(), "connector" | "accessory")
    }

    pub fn included_with_device(&self) -> bool {
        self.part_type == "device"
    }
}

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One supported (or explicitly unsupported) vehicle.
///
/// Every field except `name` is optional in the input. Unknown keys are
/// ignored, so records produced by newer metadata generators still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleRecord {
    // Identity
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub make: String,
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(deserialize_with = "null_as_default")]
    pub years: String,
    #[serde(deserialize_with = "null_as_default")]
    pub year_list: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub package: String,
    pub brand: Option<String>,

    // Classification
    pub support_type: SupportType,
    pub support_link: Option<String>,
    pub detail_sentence: Option<String>,
    pub car_fingerprint: Option<String>,

    // Media
    pub video: Option<String>,
    pub setup_video: Option<String>,
    pub buy_link: Option<String>,

    // Notes and hardware
    #[serde(deserialize_with = "null_as_default")]
    pub footnotes: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub setup_notes: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub parts: Vec<Part>,

    // Capabilities
    pub harness: Option<String>,
    pub min_steer_speed: Option<f64>,
    pub min_enable_speed: Option<f64>,
    pub auto_resume: Option<bool>,
    pub longitudinal: Option<String>,
    pub fsr_longitudinal: Option<String>,
    pub fsr_steering: Option<String>,
    pub steering_torque: Option<String>,

    // Vehicle metrics
    pub mass_curb_weight: Option<f64>,
    pub wheelbase: Option<f64>,
    pub steer_ratio: Option<f64>,
    pub center_to_front_ratio: Option<f64>,
    pub max_lateral_accel: Option<f64>,

    // Technical parameters
    pub tire_stiffness_factor: Option<f64>,
    pub tire_stiffness_front: Option<f64>,
    pub tire_stiffness_rear: Option<f64>,
    pub steer_actuator_delay: Option<f64>,
    pub steer_limit_timer: Option<f64>,
    pub steer_control_type: Option<String>,
    #[serde(rename = "vEgo_stopping")]
    pub v_ego_stopping: Option<f64>,
    #[serde(rename = "vEgo_starting")]
    pub v_ego_starting: Option<f64>,
    pub stop_accel: Option<f64>,

    // System configuration
    pub network_location: Option<String>,
    pub bus_lookup: Option<BusLookup>,
    pub experimental_longitudinal_available: Option<bool>,
    pub enable_dsu: Option<bool>,
    pub enable_bsm: Option<bool>,
    pub pcm_cruise: Option<bool>,

    // Reports, embedded or attached from a platform index at load time
    #[serde(deserialize_with = "null_as_default")]
    pub longitudinal_reports: Vec<LongitudinalReport>,
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

impl VehicleRecord {
    /// Minimal record, mostly for tests and fixtures.
    #[must_use]
    pub fn new(name: impl Into<String>, make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            make: make.into(),
            model: model.into(),
            ..Self::default()
        }
    }

    /// URL slug derived from the vehicle name.
    #[must_use]
    pub fn slug(&self) -> String {
        crate::utils::slugify(&self.name)
    }

    /// Whether a user video link is present and non-empty.
    #[must_use]
    pub fn has_video(&self) -> bool {
        is_present(self.video.as_deref())
    }

    /// Whether a setup video link is present and non-empty.
    #[must_use]
    pub fn has_setup_video(&self) -> bool {
        is_present(self.setup_video.as_deref())
    }

    #[must_use]
    pub fn has_longitudinal_report(&self) -> bool {
        !self.longitudinal_reports.is_empty()
    }

    /// Earliest model year as an integer, 0 when absent or unparseable.
    ///
    /// Leading digits are parsed, so `"2019"` and `"2019 (EU)"` both give 2019.
    #[must_use]
    pub fn first_year(&self) -> i64 {
        self.year_list
            .first()
            .map(|y| {
                let digits: String = y
                    .trim_start()
                    .chars()
                    .take_while(char::is_ascii_digit)
                    .collect();
                digits.parse().unwrap_or(0)
            })
            .unwrap_or(0)
    }

    /// Whether `year` appears anywhere in the year list.
    #[must_use]
    pub fn covers_year(&self, year: &str) -> bool {
        self.year_list.iter().any(|y| y == year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_type_roundtrip_labels() {
        for st in SupportType::ALL {
            assert_eq!(SupportType::parse(st.as_str()), st);
            assert!(st.is_known());
        }
        let odd = SupportType::parse("Experimental");
        assert_eq!(odd, SupportType::Other("Experimental".to_string()));
        assert!(!odd.is_known());
    }

    #[test]
    fn test_deserialize_tolerates_nulls_and_unknown_keys() {
        let json = r#"{
            "name": "Honda Civic 2022",
            "make": "Honda",
            "model": "Civic",
            "years": "2022",
            "year_list": null,
            "package": null,
            "support_type": "Upstream",
            "video": null,
            "min_steer_speed": null,
            "vEgo_stopping": 0.5,
            "bus_lookup": {"pt": "honda_civic", "radar": null},
            "some_future_field": [1, 2, 3]
        }"#;
        let record: VehicleRecord = serde_json::from_str(json).expect("parse record");
        assert_eq!(record.name, "Honda Civic 2022");
        assert!(record.year_list.is_empty());
        assert_eq!(record.package, "");
        assert_eq!(record.support_type, SupportType::Upstream);
        assert_eq!(record.v_ego_stopping, Some(0.5));
        let bus = record.bus_lookup.expect("bus lookup");
        assert_eq!(bus.get("radar"), Some(&None));
    }

    #[test]
    fn test_missing_support_type_is_unknown() {
        let record: VehicleRecord = serde_json::from_str(r#"{"name": "X"}"#).expect("parse");
        assert_eq!(record.support_type, SupportType::Unknown);
    }

    #[test]
    fn test_presence_checks() {
        let mut record = VehicleRecord::new("A", "B", "C");
        assert!(!record.has_video());
        record.video = Some(String::new());
        assert!(!record.has_video());
        record.video = Some("https://youtu.be/x".to_string());
        assert!(record.has_video());
    }

    #[test]
    fn test_parts_inclusion() {
        let parts: Vec<Part> = serde_json::from_str(
            r#"[{"count": 1, "name": "harness box", "type": "connector"},
                {"count": 1, "name": "comma 3X", "type": "device"}]"#,
        )
        .expect("parts");
        assert!(parts[0].included_with_harness());
        assert!(!parts[0].included_with_device());
        assert!(parts[1].included_with_device());
    }

    #[test]
    fn test_first_year() {
        let mut record = VehicleRecord::new("A", "B", "C");
        assert_eq!(record.first_year(), 0);
        record.year_list = vec!["2019".to_string(), "2020".to_string()];
        assert_eq!(record.first_year(), 2019);
        record.year_list = vec!["n/a".to_string()];
        assert_eq!(record.first_year(), 0);
    }

    #[test]
    fn test_covers_year_any_position() {
        let mut record = VehicleRecord::new("A", "B", "C");
        record.year_list = vec!["2019".into(), "2020".into(), "2021".into()];
        assert!(record.covers_year("2020"));
        assert!(!record.covers_year("2022"));
    }
}
