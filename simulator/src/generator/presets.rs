use crate::scenario::config::ScenarioConfig;

pub const PRESET_NAMES: &[&str] = &["baseline", "bow-crossing", "stern-chase", "close-aboard"];

/// Canned training geometries by name.
///
/// Each one produces a distinctly shaped frequency trace, which is the point
/// of a drill: the student learns to read the geometry off the plot.
pub fn preset(name: &str) -> Option<ScenarioConfig> {
    match name {
        "baseline" => Some(ScenarioConfig::default()),
        // Source cuts across the sensor's track from starboard to port.
        "bow-crossing" => Some(ScenarioConfig {
            sensor_speed: 5.0,
            sensor_course: 0.0,
            source_speed: 12.0,
            source_course: 270.0,
            source_initial_range_km: 8.0,
            source_initial_bearing: 30.0,
            source_frequency: 300.0,
            ..ScenarioConfig::default()
        }),
        // Both ships northbound, sensor slowly overhauling the source.
        "stern-chase" => Some(ScenarioConfig {
            sensor_speed: 12.0,
            sensor_course: 0.0,
            source_speed: 8.0,
            source_course: 0.0,
            source_initial_range_km: 6.0,
            source_initial_bearing: 0.0,
            source_frequency: 500.0,
            ..ScenarioConfig::default()
        }),
        // Reciprocal courses, passing within a few hundred meters.
        "close-aboard" => Some(ScenarioConfig {
            sensor_speed: 10.0,
            sensor_course: 0.0,
            source_speed: 10.0,
            source_course: 181.0,
            source_initial_range_km: 15.0,
            source_initial_bearing: 1.0,
            source_frequency: 700.0,
            duration: 2400.0,
            ..ScenarioConfig::default()
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_preset_resolves() {
        for name in PRESET_NAMES {
            assert!(preset(name).is_some(), "missing preset {name}");
        }
    }

    #[test]
    fn unknown_names_resolve_to_none() {
        assert!(preset("flank-speed").is_none());
    }

    #[test]
    fn stern_chase_is_a_pure_overtake() {
        let cfg = preset("stern-chase").unwrap();
        assert_eq!(cfg.sensor_course, cfg.source_course);
        assert!(cfg.sensor_speed > cfg.source_speed);
    }
}
