use crate::scenario::config::ScenarioConfig;
use anyhow::Context;
use sonarcore::prelude::{FrequencySample, Point};
use sonarcore::simulation::approach::{closest_point_of_approach, ApproachSummary};
use sonarcore::simulation::{compute_paths, compute_spectrogram};
use sonarcore::telemetry::MetricsRecorder;
use std::sync::Arc;

/// Everything one simulation trigger produces.
pub struct SimulationRun {
    pub sensor_path: Vec<Point>,
    pub source_path: Vec<Point>,
    pub spectrogram: Vec<FrequencySample>,
    pub approach: ApproachSummary,
}

#[derive(Clone)]
pub struct Runner {
    config: ScenarioConfig,
    metrics: Arc<MetricsRecorder>,
}

impl Runner {
    pub fn new(config: ScenarioConfig) -> Self {
        Self {
            config,
            metrics: Arc::new(MetricsRecorder::new()),
        }
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    /// Run the configured scenario.
    pub fn execute(&self) -> anyhow::Result<SimulationRun> {
        self.execute_scenario(&self.config)
    }

    /// Run an ad-hoc scenario through the same pipeline, sharing this
    /// runner's metrics. The bridge feeds posted scenarios through here.
    pub fn execute_scenario(&self, scenario: &ScenarioConfig) -> anyhow::Result<SimulationRun> {
        let result = self.run_pipeline(scenario);
        match &result {
            Ok(_) => self.metrics.record_run(),
            Err(_) => self.metrics.record_failure(),
        }
        result
    }

    fn run_pipeline(&self, scenario: &ScenarioConfig) -> anyhow::Result<SimulationRun> {
        let params = scenario.to_ship_params();

        let paths = compute_paths(&params, scenario.duration, scenario.time_step)
            .context("computing ship paths")?;

        let spectrogram = compute_spectrogram(
            &params,
            &paths.sensor_path,
            &paths.source_path,
            scenario.time_step,
        )
        .context("computing spectrogram")?;

        let approach = closest_point_of_approach(&params);

        Ok(SimulationRun {
            sensor_path: paths.sensor_path,
            source_path: paths.source_path,
            spectrogram,
            approach,
        })
    }
}
