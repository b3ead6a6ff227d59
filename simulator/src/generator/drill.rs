use crate::scenario::config::ScenarioConfig;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Bounds for randomized training scenarios.
///
/// Defaults follow the trainer's control ranges: speeds up to 30 m/s, range
/// 1-150 km, tone 100-1000 Hz in 10 Hz steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub max_speed: f64,
    pub min_range_km: f64,
    pub max_range_km: f64,
    pub min_frequency: f64,
    pub max_frequency: f64,
    pub duration: f64,
    pub time_step: f64,
    pub description: Option<String>,
    pub scenario: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_speed: 30.0,
            min_range_km: 1.0,
            max_range_km: 150.0,
            min_frequency: 100.0,
            max_frequency: 1000.0,
            duration: 3600.0,
            time_step: 1.0,
            description: None,
            scenario: None,
        }
    }
}

impl GeneratorConfig {
    fn normalized_speed(&self) -> f64 {
        self.max_speed.max(0.0)
    }

    fn normalized_range(&self) -> (f64, f64) {
        let min = self.min_range_km.max(f64::MIN_POSITIVE);
        (min, self.max_range_km.max(min))
    }

    fn normalized_frequency(&self) -> (f64, f64) {
        let min = self.min_frequency.max(10.0);
        (min, self.max_frequency.max(min))
    }
}

/// Draw a reproducible random scenario within the configured bounds.
///
/// The same seed always yields the same drill, so an instructor can hand a
/// student a drill number and both see identical plots.
pub fn build_drill_scenario(config: &GeneratorConfig) -> ScenarioConfig {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let max_speed = config.normalized_speed();
    let (min_range, max_range) = config.normalized_range();
    let (min_freq, max_freq) = config.normalized_frequency();

    // Tone snapped to 10 Hz steps, matching the control granularity.
    let frequency_steps = ((max_freq - min_freq) / 10.0).floor() as u64;
    let frequency = min_freq + 10.0 * rng.gen_range(0..=frequency_steps) as f64;

    ScenarioConfig {
        sensor_speed: rng.gen_range(0.0..=max_speed),
        sensor_course: rng.gen_range(0.0..360.0),
        source_speed: rng.gen_range(0.0..=max_speed),
        source_course: rng.gen_range(0.0..360.0),
        source_initial_range_km: rng.gen_range(min_range..=max_range),
        source_initial_bearing: rng.gen_range(0.0..360.0),
        source_frequency: frequency,
        duration: config.duration,
        time_step: config.time_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_the_drill() {
        let config = GeneratorConfig {
            seed: 42,
            ..Default::default()
        };
        let a = build_drill_scenario(&config);
        let b = build_drill_scenario(&config);
        assert_eq!(a.sensor_course, b.sensor_course);
        assert_eq!(a.source_initial_range_km, b.source_initial_range_km);
        assert_eq!(a.source_frequency, b.source_frequency);
    }

    #[test]
    fn drills_respect_the_bounds() {
        for seed in 0..32 {
            let config = GeneratorConfig {
                seed,
                ..Default::default()
            };
            let drill = build_drill_scenario(&config);
            assert!(drill.sensor_speed >= 0.0 && drill.sensor_speed <= 30.0);
            assert!(drill.source_speed >= 0.0 && drill.source_speed <= 30.0);
            assert!(drill.sensor_course >= 0.0 && drill.sensor_course < 360.0);
            assert!(drill.source_initial_range_km >= 1.0);
            assert!(drill.source_initial_range_km <= 150.0);
            assert!(drill.source_frequency >= 100.0 && drill.source_frequency <= 1000.0);
            assert_eq!(drill.source_frequency % 10.0, 0.0);
        }
    }

    #[test]
    fn degenerate_bounds_are_normalized() {
        let config = GeneratorConfig {
            seed: 7,
            max_speed: -5.0,
            min_range_km: 20.0,
            max_range_km: 10.0,
            ..Default::default()
        };
        let drill = build_drill_scenario(&config);
        assert_eq!(drill.sensor_speed, 0.0);
        assert_eq!(drill.source_initial_range_km, 20.0);
    }
}
