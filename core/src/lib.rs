//! Kinematics and Doppler core for the Rust sonar spectrogram trainer.
//!
//! The modules reimplement the legacy trainer's simulation engine as pure,
//! synchronous functions: two-ship constant-velocity path generation and the
//! classical Doppler shift a sensor would observe from the source's tone.

pub mod math;
pub mod prelude;
pub mod simulation;
pub mod telemetry;

pub use prelude::{FrequencySample, Point, ShipParams, ShipPaths, SimResult, SimulationError};
pub use simulation::{compute_paths, compute_spectrogram, SPEED_OF_SOUND_IN_WATER};
