use crate::math::compass::CompassHelper;
use crate::prelude::{FrequencySample, Point, ShipParams, SimResult, SimulationError};
use crate::telemetry::log::LogManager;

/// Nominal propagation speed for underwater sound, m/s.
pub const SPEED_OF_SOUND_IN_WATER: f64 = 1500.0;

/// Compute the frequency the sensor perceives at every sample instant.
///
/// Index `i` of both paths and of the output refer to the same instant
/// `i * time_step`. Each sample is evaluated from the instantaneous geometry
/// alone: the separation vector gives the line of sight, both constant
/// velocities are projected onto it, and the classical moving-source /
/// moving-observer formula `f0 * (c + vr) / (c + vs)` is applied with
/// `c = SPEED_OF_SOUND_IN_WATER`.
///
/// Coincident positions perceive the unshifted tone. That is a policy for the
/// singular geometry, chosen over returning an error or a non-finite value.
pub fn compute_spectrogram(
    params: &ShipParams,
    sensor_path: &[Point],
    source_path: &[Point],
    time_step: f64,
) -> SimResult<Vec<FrequencySample>> {
    if sensor_path.len() != source_path.len() {
        return Err(SimulationError::PathMismatch(format!(
            "sensor has {} samples, source has {}",
            sensor_path.len(),
            source_path.len()
        )));
    }
    if !time_step.is_finite() || time_step < 0.0 {
        return Err(SimulationError::InvalidArgument(format!(
            "time step must be a non-negative number of seconds, got {time_step}"
        )));
    }
    if !params.source_frequency.is_finite() || params.source_frequency <= 0.0 {
        return Err(SimulationError::InvalidArgument(format!(
            "source frequency must be positive, got {}",
            params.source_frequency
        )));
    }

    let (sensor_vx, sensor_vy) =
        CompassHelper::velocity_components(params.sensor_course, params.sensor_speed);
    let (source_vx, source_vy) =
        CompassHelper::velocity_components(params.source_course, params.source_speed);

    let mut spectrogram = Vec::with_capacity(sensor_path.len());

    for (index, (sensor, source)) in sensor_path.iter().zip(source_path.iter()).enumerate() {
        let time = index as f64 * time_step;

        let dx = source.x - sensor.x;
        let dy = source.y - sensor.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance == 0.0 {
            spectrogram.push(FrequencySample {
                time,
                frequency: params.source_frequency,
            });
            continue;
        }

        // Unit vector from sensor to source.
        let ux = dx / distance;
        let uy = dy / distance;

        // Sensor velocity along the line of sight, positive toward the source.
        let vr_los = sensor_vx * ux + sensor_vy * uy;

        // Source velocity along the line of sight, positive toward the sensor.
        let vs_los = -(source_vx * ux + source_vy * uy);

        let c = SPEED_OF_SOUND_IN_WATER;
        let frequency = params.source_frequency * (c + vr_los) / (c + vs_los);

        spectrogram.push(FrequencySample { time, frequency });
    }

    LogManager::new().record(&format!(
        "spectrogram: {} samples from {:.1} Hz tone",
        spectrogram.len(),
        params.source_frequency
    ));

    Ok(spectrogram)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::paths::compute_paths;

    fn params() -> ShipParams {
        ShipParams {
            sensor_speed: 0.0,
            sensor_course: 0.0,
            source_speed: 0.0,
            source_course: 0.0,
            source_initial_range: 1.0,
            source_initial_bearing: 90.0,
            source_frequency: 500.0,
        }
    }

    #[test]
    fn stationary_ships_perceive_the_emitted_tone() {
        let p = params();
        let paths = compute_paths(&p, 60.0, 1.0).unwrap();
        let spectrogram =
            compute_spectrogram(&p, &paths.sensor_path, &paths.source_path, 1.0).unwrap();
        assert_eq!(spectrogram.len(), 61);
        for sample in &spectrogram {
            assert_eq!(sample.frequency, 500.0);
        }
    }

    #[test]
    fn times_advance_by_the_step() {
        let p = params();
        let paths = compute_paths(&p, 10.0, 2.0).unwrap();
        let spectrogram =
            compute_spectrogram(&p, &paths.sensor_path, &paths.source_path, 2.0).unwrap();
        assert_eq!(spectrogram[0].time, 0.0);
        assert_eq!(spectrogram[3].time, 6.0);
    }

    #[test]
    fn westbound_source_at_sound_speed_halves_the_tone() {
        // Source due East running due West at c: the motion is fully along
        // the line of sight, vs_los = +c, so f = 500 * c / (c + c) = 250 Hz
        // at every sample while the source stays east of the sensor.
        let mut p = params();
        p.source_speed = SPEED_OF_SOUND_IN_WATER;
        p.source_course = 270.0;
        let paths = compute_paths(&p, 0.5, 0.1).unwrap();
        let spectrogram =
            compute_spectrogram(&p, &paths.sensor_path, &paths.source_path, 0.1).unwrap();
        for sample in &spectrogram {
            assert!((sample.frequency - 250.0).abs() < 1e-9);
        }
    }

    #[test]
    fn westbound_source_east_of_sensor_lowers_the_tone() {
        // vs_los is positive for this geometry, so f = f0 * c / (c + v).
        let mut p = params();
        p.source_speed = 10.0;
        p.source_course = 270.0;
        let paths = compute_paths(&p, 10.0, 1.0).unwrap();
        let spectrogram =
            compute_spectrogram(&p, &paths.sensor_path, &paths.source_path, 1.0).unwrap();
        let expected = 500.0 * SPEED_OF_SOUND_IN_WATER / (SPEED_OF_SOUND_IN_WATER + 10.0);
        assert!((spectrogram[0].frequency - expected).abs() < 1e-9);
        assert!(spectrogram[0].frequency < 500.0);
    }

    #[test]
    fn eastbound_source_east_of_sensor_raises_the_tone() {
        // vs_los is negative for this geometry, so f = f0 * c / (c - v).
        let mut p = params();
        p.source_speed = 10.0;
        p.source_course = 90.0;
        let paths = compute_paths(&p, 10.0, 1.0).unwrap();
        let spectrogram =
            compute_spectrogram(&p, &paths.sensor_path, &paths.source_path, 1.0).unwrap();
        let expected = 500.0 * SPEED_OF_SOUND_IN_WATER / (SPEED_OF_SOUND_IN_WATER - 10.0);
        assert!((spectrogram[0].frequency - expected).abs() < 1e-9);
        assert!(spectrogram[0].frequency > 500.0);
    }

    #[test]
    fn sensor_closing_on_the_source_raises_the_tone() {
        // vr_los is positive when the sensor runs up the line of sight.
        let mut p = params();
        p.sensor_speed = 10.0;
        p.sensor_course = 90.0;
        let paths = compute_paths(&p, 5.0, 1.0).unwrap();
        let spectrogram =
            compute_spectrogram(&p, &paths.sensor_path, &paths.source_path, 1.0).unwrap();
        let expected = 500.0 * (SPEED_OF_SOUND_IN_WATER + 10.0) / SPEED_OF_SOUND_IN_WATER;
        assert!((spectrogram[0].frequency - expected).abs() < 1e-9);
        assert!(spectrogram[0].frequency > 500.0);
    }

    #[test]
    fn coincident_ships_perceive_the_emitted_tone() {
        let p = params();
        let track = vec![Point { x: 10.0, y: -4.0 }; 3];
        let spectrogram = compute_spectrogram(&p, &track, &track, 1.0).unwrap();
        for sample in &spectrogram {
            assert_eq!(sample.frequency, 500.0);
            assert!(sample.frequency.is_finite());
        }
    }

    #[test]
    fn mismatched_paths_are_rejected() {
        let p = params();
        let sensor = vec![Point { x: 0.0, y: 0.0 }; 3];
        let source = vec![Point { x: 0.0, y: 0.0 }; 4];
        assert!(compute_spectrogram(&p, &sensor, &source, 1.0).is_err());
    }

    #[test]
    fn negative_time_step_is_rejected() {
        let p = params();
        let track = vec![Point { x: 0.0, y: 0.0 }; 2];
        assert!(compute_spectrogram(&p, &track, &track, -1.0).is_err());
    }

    #[test]
    fn non_positive_frequency_is_rejected() {
        let mut p = params();
        p.source_frequency = 0.0;
        let track = vec![Point { x: 0.0, y: 0.0 }; 2];
        assert!(compute_spectrogram(&p, &track, &track, 1.0).is_err());
        p.source_frequency = -100.0;
        assert!(compute_spectrogram(&p, &track, &track, 1.0).is_err());
    }

    #[test]
    fn single_instant_scenario_matches_hand_computation() {
        let p = params();
        let paths = compute_paths(&p, 0.0, 1.0).unwrap();
        assert_eq!(paths.sensor_path, vec![Point { x: 0.0, y: 0.0 }]);
        assert!((paths.source_path[0].x - 1000.0).abs() < 1e-6);
        assert!(paths.source_path[0].y.abs() < 1e-6);
        let spectrogram =
            compute_spectrogram(&p, &paths.sensor_path, &paths.source_path, 1.0).unwrap();
        assert_eq!(spectrogram.len(), 1);
        assert_eq!(spectrogram[0].time, 0.0);
        assert_eq!(spectrogram[0].frequency, 500.0);
    }
}
