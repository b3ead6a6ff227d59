use serde::{Deserialize, Serialize};

use crate::math::compass::CompassHelper;
use crate::prelude::ShipParams;

/// Closest point of approach between the two ships.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApproachSummary {
    /// Minimum separation in meters.
    pub range_m: f64,
    /// Seconds from the start of the run at which it occurs. Negative means
    /// the ships are already opening; the minimum lies in the past.
    pub time_s: f64,
}

/// Compute CPA/TCPA for the constant-velocity encounter described by
/// `params`, via the relative-velocity method: with the source's position and
/// velocity taken relative to the sensor, the separation is minimized at
/// `t = -(r . v) / |v|^2`.
pub fn closest_point_of_approach(params: &ShipParams) -> ApproachSummary {
    let (sensor_vx, sensor_vy) =
        CompassHelper::velocity_components(params.sensor_course, params.sensor_speed);
    let (source_vx, source_vy) =
        CompassHelper::velocity_components(params.source_course, params.source_speed);

    let initial_angle = CompassHelper::bearing_to_cartesian(params.source_initial_bearing);
    let range_m = params.source_initial_range * 1000.0;
    let rx = range_m * initial_angle.cos();
    let ry = range_m * initial_angle.sin();

    let rvx = source_vx - sensor_vx;
    let rvy = source_vy - sensor_vy;

    let rv_dot = rx * rvx + ry * rvy;
    let v_sq = rvx * rvx + rvy * rvy;

    // Matched courses and speeds: the separation never changes.
    if v_sq < 1e-6 {
        return ApproachSummary {
            range_m: (rx * rx + ry * ry).sqrt(),
            time_s: 0.0,
        };
    }

    let time_s = -rv_dot / v_sq;
    let cpa_x = rx + rvx * time_s;
    let cpa_y = ry + rvy * time_s;

    ApproachSummary {
        range_m: (cpa_x * cpa_x + cpa_y * cpa_y).sqrt(),
        time_s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn head_on_runner_passes_through_the_sensor() {
        let mut p = params();
        p.source_speed = 10.0;
        p.source_course = 270.0;
        let summary = closest_point_of_approach(&p);
        assert!(summary.range_m.abs() < 1e-6);
        assert!((summary.time_s - 100.0).abs() < 1e-6);
    }

    #[test]
    fn matched_motion_keeps_the_initial_separation() {
        let mut p = params();
        p.sensor_speed = 5.0;
        p.sensor_course = 45.0;
        p.source_speed = 5.0;
        p.source_course = 45.0;
        let summary = closest_point_of_approach(&p);
        assert!((summary.range_m - 1000.0).abs() < 1e-6);
        assert_eq!(summary.time_s, 0.0);
    }

    #[test]
    fn opening_ships_report_a_past_cpa() {
        let mut p = params();
        p.source_speed = 10.0;
        p.source_course = 90.0;
        let summary = closest_point_of_approach(&p);
        assert!(summary.time_s < 0.0);
    }

    #[test]
    fn abeam_pass_keeps_the_offset_range() {
        // Source starts 1 km East heading due North: CPA is now, broadside.
        let mut p = params();
        p.source_speed = 10.0;
        p.source_course = 0.0;
        let summary = closest_point_of_approach(&p);
        assert!((summary.range_m - 1000.0).abs() < 1e-6);
        assert!(summary.time_s.abs() < 1e-6);
    }
}
