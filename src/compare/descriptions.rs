//! Longer explanations of individual specs, shown when a spec is expanded.

/// Explanation for the spec with `id`, if one exists.
pub fn spec_description(id: &str) -> Option<&'static str> {
    let text = match id {
        // Compatibility info
        "support-type-badge" => {
            "The level of openpilot support for this vehicle. 'Upstream' indicates full official \
             support with active maintenance, while other types may have varying levels of \
             functionality and community support."
        }
        "adas-package" => {
            "The required ADAS package/trim that needs to come with this vehicle to be \
             compatible with openpilot."
        }
        "fingerprint" => {
            "The unique identifier openpilot uses to detect and configure itself for this \
             specific vehicle model. This fingerprint is based on CAN message patterns and \
             ensures proper compatibility."
        }
        "harness" => {
            "Type of car harness that is compatible with this vehicle. comma's car harness is a \
             universal interface to your car. Use the car harness to connect your comma device \
             to your vehicle."
        }
        // Capabilities
        "min-steering-speed" => {
            "The minimum speed at which openpilot can provide steering assistance. Below this \
             speed, the driver must steer manually."
        }
        "longitudinal-control" => {
            "The system responsible for acceleration and braking control. 'openpilot' means \
             full longitudinal control, while other values may indicate limited or no \
             longitudinal control."
        }
        "auto-resume" => {
            "Whether openpilot can automatically resume driving after coming to a complete \
             stop, without driver intervention."
        }
        "fsr-longitudinal" => {
            "The minimum speed for longitudinal (acceleration/braking) control in FSR mode."
        }
        "fsr-steering" => "The minimum speed for steering control in FSR mode.",
        "steering-torque" => {
            "Information about the steering torque characteristics or limitations for this \
             vehicle. 'Empty' typically means no specific torque data is available."
        }
        // Vehicle metrics
        "curb-weight" => {
            "The weight of the vehicle without passengers or cargo, including all fluids and a \
             full tank of fuel."
        }
        "wheelbase" => {
            "The distance between the centers of the front and rear wheels. A longer wheelbase \
             typically provides better stability at high speeds."
        }
        "steer-ratio" => {
            "The ratio between the steering wheel angle and the front wheel angle. A higher \
             ratio means more steering wheel turns are needed for the same wheel angle."
        }
        "center-front-ratio" => {
            "The ratio of the distance from the center of gravity to the front axle versus the \
             total wheelbase. Affects weight distribution and handling characteristics."
        }
        "max-lateral-accel" => {
            "The maximum lateral acceleration the vehicle can sustain during cornering before \
             losing traction. Higher values indicate better cornering capability."
        }
        // Technical parameters
        "tire-stiffness-factor" => {
            "A multiplier applied to the tire stiffness values to adjust handling \
             characteristics. This factor fine-tunes how the vehicle's tires respond to \
             steering inputs and road conditions."
        }
        "tire-front-stiffness" => {
            "The cornering stiffness of the front tires measured in N/rad. Higher values \
             indicate stiffer tires that resist lateral deformation more, affecting steering \
             response and front-end grip."
        }
        "tire-rear-stiffness" => {
            "The cornering stiffness of the rear tires measured in N/rad. This value affects \
             rear-end stability and the vehicle's tendency to understeer or oversteer during \
             cornering."
        }
        "actuator-delay" => {
            "The time delay between when openpilot sends a steering command and when the \
             vehicle's steering actuator responds."
        }
        "limit-timer" => {
            "The duration for which steering torque limits are enforced before the system may \
             request reduced steering authority."
        }
        "control-type" => {
            "The method openpilot uses to control steering. 'Torque' control commands steering \
             wheel torque directly, while 'angle' control commands specific steering angles."
        }
        "stopping-speed" => {
            "The speed threshold below which the vehicle is considered stopped."
        }
        "starting-speed" => {
            "The speed threshold above which the vehicle is considered moving after a stop."
        }
        "stop-accel" => {
            "The deceleration rate applied when bringing the vehicle to a stop."
        }
        // System configuration
        "network-location" => "Specifies which CAN gateway the comma device connects to.",
        "bus-lookup" => {
            "Maps message types to physical CAN bus numbers, telling openpilot which physical \
             CAN bus carries each type of vehicle data."
        }
        "experimental-longitudinal" => {
            "If the vehicle supports experimental mode's longitudinal control and it is \
             enabled, openpilot will drive the speed that the model thinks a human would drive."
        }
        "dsu-enabled" => {
            "Toyota-specific: the DSU (Driving Support Unit) is the radar/ACC module on \
             pre-TSS2 Toyotas. When enabled, openpilot sends longitudinal control commands \
             through the DSU instead of directly to the PCM."
        }
        "bsm-enabled" => {
            "Indicates if the vehicle has BSM (Blind Spot Monitoring) capability that \
             openpilot can read from the CAN bus."
        }
        "pcm-cruise" => {
            "Indicates if the vehicle uses PCM (Powertrain Control Module) cruise control \
             rather than camera-based cruise."
        }
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::SPECS;

    #[test]
    fn test_most_specs_described() {
        let described = SPECS
            .iter()
            .filter(|s| spec_description(s.id).is_some())
            .count();
        // Years and min enable speed are self-explanatory.
        assert_eq!(described, SPECS.len() - 2);
        assert!(spec_description("unknown").is_none());
    }
}
