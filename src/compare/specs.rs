//! Registry of displayable vehicle parameters.
//!
//! Each [`SpecDefinition`] pairs a typed accessor with a formatter, so the
//! detail view and comparison table render fields without any dynamic
//! key lookup. Registry order is display order.

use crate::model::{BusLookup, VehicleRecord};
use crate::utils::{
    format_boolean, format_enabled, format_speed, format_value, format_weight, NOT_AVAILABLE,
};
use std::fmt;

/// Grouping shown as one collapsible section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecCategory {
    CompatibilityInfo,
    Capabilities,
    VehicleMetrics,
    TechnicalParameters,
    SystemConfiguration,
}

impl SpecCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::CompatibilityInfo => "Compatibility Info",
            Self::Capabilities => "Capabilities",
            Self::VehicleMetrics => "Vehicle Metrics",
            Self::TechnicalParameters => "Technical Parameters",
            Self::SystemConfiguration => "System Configuration",
        }
    }

    /// Id of the collapsible section holding this category.
    pub const fn section_id(self) -> &'static str {
        match self {
            Self::CompatibilityInfo => "compatibility-info",
            Self::Capabilities => "capabilities",
            Self::VehicleMetrics => "vehicle-metrics",
            Self::TechnicalParameters => "technical",
            Self::SystemConfiguration => "system",
        }
    }
}

impl fmt::Display for SpecCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw value borrowed from a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpecValue<'a> {
    Text(Option<&'a str>),
    Number(Option<f64>),
    Flag(Option<bool>),
    Lookup(Option<&'a BusLookup>),
}

/// How a raw value is turned into display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Plain,
    /// m/s shown as mph
    Speed,
    /// kg shown as lbs
    Weight,
    /// Approximate number with a unit suffix
    Value(&'static str),
    Boolean,
    Enabled,
}

/// One displayable parameter.
#[derive(Debug, Clone, Copy)]
pub struct SpecDefinition {
    /// Stable id, also the quick-nav anchor
    pub id: &'static str,
    pub label: &'static str,
    /// Record field name as it appears in the dataset JSON
    pub key: &'static str,
    pub category: SpecCategory,
    pub accessor: for<'a> fn(&'a VehicleRecord) -> SpecValue<'a>,
    pub format: SpecFormat,
}

impl SpecDefinition {
    pub fn value<'a>(&self, record: &'a VehicleRecord) -> SpecValue<'a> {
        (self.accessor)(record)
    }

    /// Id of the section this spec lives in.
    pub const fn section_id(&self) -> &'static str {
        self.category.section_id()
    }

    /// Formatted display text for `record`.
    pub fn display(&self, record: &VehicleRecord) -> String {
        match (self.value(record), self.format) {
            (SpecValue::Number(n), SpecFormat::Speed) => format_speed(n),
            (SpecValue::Number(n), SpecFormat::Weight) => format_weight(n),
            (SpecValue::Number(n), SpecFormat::Value(unit)) => format_value(n, unit),
            (SpecValue::Number(Some(n)), SpecFormat::Plain) => n.to_string(),
            (SpecValue::Flag(b), SpecFormat::Enabled) => format_enabled(b),
            (SpecValue::Flag(b), _) => format_boolean(b),
            (SpecValue::Text(Some(s)), _) if !s.is_empty() => s.to_string(),
            (SpecValue::Lookup(Some(map)), _) if !map.is_empty() => format_bus_lookup(map),
            _ => NOT_AVAILABLE.to_string(),
        }
    }
}

/// Render a bus lookup as `bus: dbc` pairs on one line.
pub fn format_bus_lookup(map: &BusLookup) -> String {
    map.iter()
        .map(|(bus, dbc)| format!("{bus}: {}", dbc.as_deref().unwrap_or(NOT_AVAILABLE)))
        .collect::<Vec<_>>()
        .join(", ")
}

const fn spec(
    id: &'static str,
    label: &'static str,
    key: &'static str,
    category: SpecCategory,
    accessor: for<'a> fn(&'a VehicleRecord) -> SpecValue<'a>,
    format: SpecFormat,
) -> SpecDefinition {
    SpecDefinition {
        id,
        label,
        key,
        category,
        accessor,
        format,
    }
}

use SpecCategory::{
    Capabilities, CompatibilityInfo, SystemConfiguration, TechnicalParameters, VehicleMetrics,
};
use SpecFormat::{Boolean, Enabled, Plain, Speed, Value, Weight};

/// Every displayable parameter in display order.
#[rustfmt::skip]
pub static SPECS: [SpecDefinition; 32] = [
    // Compatibility info
    spec("support-type-badge", "Support Type", "support_type", CompatibilityInfo,
        |r| SpecValue::Text(Some(r.support_type.as_str())), Plain),
    spec("adas-package", "ADAS Package", "package", CompatibilityInfo,
        |r| SpecValue::Text(Some(&r.package)), Plain),
    spec("years", "Years", "years", CompatibilityInfo,
        |r| SpecValue::Text(Some(&r.years)), Plain),
    spec("fingerprint", "Fingerprint", "car_fingerprint", CompatibilityInfo,
        |r| SpecValue::Text(r.car_fingerprint.as_deref()), Plain),
    spec("harness", "Harness", "harness", CompatibilityInfo,
        |r| SpecValue::Text(r.harness.as_deref()), Plain),
    // Capabilities
    spec("min-steering-speed", "Min Steering Speed", "min_steer_speed", Capabilities,
        |r| SpecValue::Number(r.min_steer_speed), Speed),
    spec("min-enable-speed", "Min Enable Speed", "min_enable_speed", Capabilities,
        |r| SpecValue::Number(r.min_enable_speed), Speed),
    spec("longitudinal-control", "Longitudinal Control", "longitudinal", Capabilities,
        |r| SpecValue::Text(r.longitudinal.as_deref()), Plain),
    spec("auto-resume", "Auto Resume", "auto_resume", Capabilities,
        |r| SpecValue::Flag(r.auto_resume), Boolean),
    spec("fsr-longitudinal", "FSR Longitudinal", "fsr_longitudinal", Capabilities,
        |r| SpecValue::Text(r.fsr_longitudinal.as_deref()), Plain),
    spec("fsr-steering", "FSR Steering", "fsr_steering", Capabilities,
        |r| SpecValue::Text(r.fsr_steering.as_deref()), Plain),
    spec("steering-torque", "Steering Torque", "steering_torque", Capabilities,
        |r| SpecValue::Text(r.steering_torque.as_deref()), Plain),
    // Vehicle metrics
    spec("curb-weight", "Curb Weight", "mass_curb_weight", VehicleMetrics,
        |r| SpecValue::Number(r.mass_curb_weight), Weight),
    spec("wheelbase", "Wheelbase", "wheelbase", VehicleMetrics,
        |r| SpecValue::Number(r.wheelbase), Value(" m")),
    spec("steer-ratio", "Steer Ratio", "steer_ratio", VehicleMetrics,
        |r| SpecValue::Number(r.steer_ratio), Value("")),
    spec("center-front-ratio", "Center to Front Ratio", "center_to_front_ratio", VehicleMetrics,
        |r| SpecValue::Number(r.center_to_front_ratio), Value("")),
    spec("max-lateral-accel", "Max Lateral Accel", "max_lateral_accel", VehicleMetrics,
        |r| SpecValue::Number(r.max_lateral_accel), Value(" m/s²")),
    // Technical parameters
    spec("tire-stiffness-factor", "Tire Stiffness Factor", "tire_stiffness_factor", TechnicalParameters,
        |r| SpecValue::Number(r.tire_stiffness_factor), Value("")),
    spec("tire-front-stiffness", "Front Stiffness", "tire_stiffness_front", TechnicalParameters,
        |r| SpecValue::Number(r.tire_stiffness_front), Value("")),
    spec("tire-rear-stiffness", "Rear Stiffness", "tire_stiffness_rear", TechnicalParameters,
        |r| SpecValue::Number(r.tire_stiffness_rear), Value("")),
    spec("actuator-delay", "Actuator Delay", "steer_actuator_delay", TechnicalParameters,
        |r| SpecValue::Number(r.steer_actuator_delay), Value("s")),
    spec("limit-timer", "Limit Timer", "steer_limit_timer", TechnicalParameters,
        |r| SpecValue::Number(r.steer_limit_timer), Value("s")),
    spec("control-type", "Control Type", "steer_control_type", TechnicalParameters,
        |r| SpecValue::Text(r.steer_control_type.as_deref()), Plain),
    spec("stopping-speed", "Stopping Speed", "vEgo_stopping", TechnicalParameters,
        |r| SpecValue::Number(r.v_ego_stopping), Value(" m/s")),
    spec("starting-speed", "Starting Speed", "vEgo_starting", TechnicalParameters,
        |r| SpecValue::Number(r.v_ego_starting), Value(" m/s")),
    spec("stop-accel", "Stop Accel", "stop_accel", TechnicalParameters,
        |r| SpecValue::Number(r.stop_accel), Value(" m/s²")),
    // System configuration
    spec("network-location", "Network Location", "network_location", SystemConfiguration,
        |r| SpecValue::Text(r.network_location.as_deref()), Plain),
    spec("bus-lookup", "Bus Lookup", "bus_lookup", SystemConfiguration,
        |r| SpecValue::Lookup(r.bus_lookup.as_ref()), Plain),
    spec("experimental-longitudinal", "Experimental Longitudinal",
        "experimental_longitudinal_available", SystemConfiguration,
        |r| SpecValue::Flag(r.experimental_longitudinal_available), Enabled),
    spec("dsu-enabled", "DSU Enabled", "enable_dsu", SystemConfiguration,
        |r| SpecValue::Flag(r.enable_dsu), Boolean),
    spec("bsm-enabled", "BSM Enabled", "enable_bsm", SystemConfiguration,
        |r| SpecValue::Flag(r.enable_bsm), Boolean),
    spec("pcm-cruise", "PCM Cruise", "pcm_cruise", SystemConfiguration,
        |r| SpecValue::Flag(r.pcm_cruise), Boolean),
];

/// Specs of one category, in registry order.
#[derive(Debug, Clone)]
pub struct SpecGroup {
    pub category: SpecCategory,
    pub specs: Vec<&'static SpecDefinition>,
}

/// Group the registry by category, categories in first-appearance order.
pub fn specs_by_category() -> Vec<SpecGroup> {
    let mut groups: Vec<SpecGroup> = Vec::new();
    for spec in &SPECS {
        match groups.iter_mut().find(|g| g.category == spec.category) {
            Some(group) => group.specs.push(spec),
            None => groups.push(SpecGroup {
                category: spec.category,
                specs: vec![spec],
            }),
        }
    }
    groups
}

pub fn find_spec(id: &str) -> Option<&'static SpecDefinition> {
    SPECS.iter().find(|s| s.id == id)
}

/// Section id holding the spec with `id`.
pub fn section_for_spec(id: &str) -> Option<&'static str> {
    find_spec(id).map(SpecDefinition::section_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SupportType;
    use std::collections::HashSet;

    #[test]
    fn test_registry_ids_unique() {
        let ids: HashSet<_> = SPECS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SPECS.len());
    }

    #[test]
    fn test_grouping_preserves_order() {
        let groups = specs_by_category();
        let categories: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(
            categories,
            vec![
                CompatibilityInfo,
                Capabilities,
                VehicleMetrics,
                TechnicalParameters,
                SystemConfiguration
            ]
        );
        assert_eq!(groups.iter().map(|g| g.specs.len()).sum::<usize>(), 32);
        assert_eq!(groups[0].specs[0].id, "support-type-badge");
    }

    #[test]
    fn test_section_lookup() {
        assert_eq!(section_for_spec("stop-accel"), Some("technical"));
        assert_eq!(section_for_spec("bus-lookup"), Some("system"));
        assert_eq!(section_for_spec("nope"), None);
    }

    #[test]
    fn test_display_formats() {
        let mut record = VehicleRecord::new("Honda Civic 2022", "Honda", "Civic");
        record.support_type = SupportType::Upstream;
        record.min_steer_speed = Some(0.0);
        record.mass_curb_weight = Some(1326.0);
        record.wheelbase = Some(2.7);
        record.experimental_longitudinal_available = Some(true);
        record.enable_dsu = Some(false);
        let mut bus = BusLookup::new();
        bus.insert("pt".to_string(), Some("honda_civic_ex".to_string()));
        bus.insert("radar".to_string(), None);
        record.bus_lookup = Some(bus);

        let show = |id: &str| find_spec(id).expect("spec").display(&record);
        assert_eq!(show("support-type-badge"), "Upstream");
        assert_eq!(show("min-steering-speed"), "any speed");
        assert_eq!(show("min-enable-speed"), "N/A");
        assert_eq!(show("curb-weight"), "2,923 lbs");
        assert_eq!(show("wheelbase"), "~2.70 m");
        assert_eq!(show("experimental-longitudinal"), "Enabled");
        assert_eq!(show("dsu-enabled"), "No");
        assert_eq!(show("pcm-cruise"), "N/A");
        assert_eq!(show("harness"), "N/A");
        assert_eq!(show("adas-package"), "N/A");
        assert_eq!(show("bus-lookup"), "pt: honda_civic_ex, radar: N/A");
    }
}
