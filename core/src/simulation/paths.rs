use crate::math::compass::CompassHelper;
use crate::prelude::{Point, ShipParams, ShipPaths, SimResult, SimulationError};
use crate::telemetry::log::LogManager;

/// Compute both ships' positions over `duration` seconds, one sample every
/// `time_step` seconds.
///
/// The sensor starts at the origin; the source starts `source_initial_range`
/// km away along `source_initial_bearing`. Both move at constant velocity, so
/// each track is a straight line sampled at `t = 0, time_step, 2*time_step,
/// ...` up to and including the last instant `<= duration`. Output length is
/// `floor(duration / time_step) + 1` for both tracks.
pub fn compute_paths(params: &ShipParams, duration: f64, time_step: f64) -> SimResult<ShipPaths> {
    if !time_step.is_finite() || time_step <= 0.0 {
        return Err(SimulationError::InvalidArgument(format!(
            "time step must be a positive number of seconds, got {time_step}"
        )));
    }
    if !duration.is_finite() || duration < 0.0 {
        return Err(SimulationError::InvalidArgument(format!(
            "duration must be a non-negative number of seconds, got {duration}"
        )));
    }

    let (sensor_vx, sensor_vy) =
        CompassHelper::velocity_components(params.sensor_course, params.sensor_speed);
    let (source_vx, source_vy) =
        CompassHelper::velocity_components(params.source_course, params.source_speed);

    // Initial range arrives in km; the Cartesian frame is meters.
    let initial_angle = CompassHelper::bearing_to_cartesian(params.source_initial_bearing);
    let initial_range_m = params.source_initial_range * 1000.0;
    let source_x0 = initial_range_m * initial_angle.cos();
    let source_y0 = initial_range_m * initial_angle.sin();

    let sample_count = (duration / time_step).floor() as usize + 1;
    let mut sensor_path = Vec::with_capacity(sample_count);
    let mut source_path = Vec::with_capacity(sample_count);

    for index in 0..sample_count {
        let t = index as f64 * time_step;
        sensor_path.push(Point {
            x: sensor_vx * t,
            y: sensor_vy * t,
        });
        source_path.push(Point {
            x: source_x0 + source_vx * t,
            y: source_y0 + source_vy * t,
        });
    }

    LogManager::new().record(&format!(
        "paths: {} samples over {:.0}s at {:.2}s step",
        sample_count, duration, time_step
    ));

    Ok(ShipPaths {
        sensor_path,
        source_path,
    })
}
