use anyhow::Context;
use serde::{Deserialize, Serialize};
use sonarcore::prelude::ShipParams;
use std::fs;
use std::path::Path;

/// A complete simulation scenario: ship parameters plus the sampling window.
///
/// Field defaults are the trainer's canonical opening setup, so a partial
/// YAML file only needs to name what it changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub sensor_speed: f64,
    pub sensor_course: f64,
    pub source_speed: f64,
    pub source_course: f64,
    pub source_initial_range_km: f64,
    pub source_initial_bearing: f64,
    pub source_frequency: f64,
    /// Total simulated time in seconds.
    pub duration: f64,
    /// Seconds between samples.
    pub time_step: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            sensor_speed: 10.0,
            sensor_course: 0.0,
            source_speed: 15.0,
            source_course: 325.0,
            source_initial_range_km: 12.0,
            source_initial_bearing: 45.0,
            source_frequency: 400.0,
            duration: 3600.0,
            time_step: 1.0,
        }
    }
}

impl ScenarioConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading scenario config {}", path_ref.display()))?;
        let config: ScenarioConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing scenario config {}", path_ref.display()))?;
        Ok(config)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn from_args(
        sensor_speed: f64,
        sensor_course: f64,
        source_speed: f64,
        source_course: f64,
        source_initial_range_km: f64,
        source_initial_bearing: f64,
        source_frequency: f64,
        duration: f64,
        time_step: f64,
    ) -> Self {
        Self {
            sensor_speed,
            sensor_course,
            source_speed,
            source_course,
            source_initial_range_km,
            source_initial_bearing,
            source_frequency,
            duration,
            time_step,
        }
    }

    pub fn to_ship_params(&self) -> ShipParams {
        ShipParams {
            sensor_speed: self.sensor_speed,
            sensor_course: self.sensor_course,
            source_speed: self.source_speed,
            source_course: self.source_course,
            source_initial_range: self.source_initial_range_km,
            source_initial_bearing: self.source_initial_bearing,
            source_frequency: self.source_frequency,
        }
    }
}
