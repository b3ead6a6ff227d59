use serde::{Deserialize, Serialize};

/// Motion and emission parameters for a two-ship encounter.
///
/// Courses and the initial bearing are compass bearings: degrees measured
/// clockwise from North. Values outside [0, 360) are accepted and wrap
/// through trigonometric periodicity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipParams {
    /// Sensor (observer) speed in m/s.
    pub sensor_speed: f64,
    /// Sensor course in degrees.
    pub sensor_course: f64,
    /// Source (emitter) speed in m/s.
    pub source_speed: f64,
    /// Source course in degrees.
    pub source_course: f64,
    /// Initial sensor-to-source range in km.
    pub source_initial_range: f64,
    /// Initial sensor-to-source bearing in degrees.
    pub source_initial_bearing: f64,
    /// Emitted tone in Hz.
    pub source_frequency: f64,
}

/// Cartesian position in meters. The sensor starts at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Time-aligned position tracks for both ships, one entry per sample instant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipPaths {
    pub sensor_path: Vec<Point>,
    pub source_path: Vec<Point>,
}

/// Received frequency at a single sample instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencySample {
    /// Seconds since the start of the run.
    pub time: f64,
    /// Perceived frequency in Hz.
    pub frequency: f64,
}

/// Common error type for simulation calls.
#[derive(thiserror::Error, Debug)]
pub enum SimulationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("path mismatch: {0}")]
    PathMismatch(String),
}

pub type SimResult<T> = Result<T, SimulationError>;
