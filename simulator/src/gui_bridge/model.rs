use crate::scenario::config::ScenarioConfig;
use crate::scenario::runner::SimulationRun;
use serde::{Deserialize, Serialize};
use sonarcore::prelude::{FrequencySample, Point};
use sonarcore::simulation::approach::ApproachSummary;

/// Everything the external plotting UI needs to draw one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VisualizationModel {
    pub sensor_path: Vec<Point>,
    pub source_path: Vec<Point>,
    pub spectrogram: Vec<FrequencySample>,
    pub approach: Option<ApproachSummary>,
    /// The scenario that produced this run, echoed back for the controls.
    pub scenario: Option<ScenarioConfig>,
}

impl VisualizationModel {
    pub fn from_run(run: &SimulationRun, scenario: &ScenarioConfig) -> Self {
        Self {
            sensor_path: run.sensor_path.clone(),
            source_path: run.source_path.clone(),
            spectrogram: run.spectrogram.clone(),
            approach: Some(run.approach),
            scenario: Some(scenario.clone()),
        }
    }
}
